//! # fatcp
//!
//! Copy a directory tree onto a filesystem with restrictive naming rules.
//!
//! Every file and directory name below the source root is slugged on the way
//! over: lowercased, with runs of anything that is not a letter or digit
//! collapsed into a single `-`. File extensions are kept exactly as they were.
//! The shape of the tree is preserved; only names change.
//!
//! ## Features
//!
//! - **Name sanitization**: slugged directory names and filenames with their
//!   extension intact
//! - **Path splitting**: absolute paths broken into normalized segments
//! - **Tree copy**: destination directories created on demand, files
//!   overwritten in place, first error aborts the run
//! - **Explicit options**: verbosity and directory mode travel in
//!   [`CopyOptions`], not global state
//!
//! ## Examples
//!
//! ### Sanitizing Names
//!
//! ```rust
//! use fatcp::{sanitize_file_name, sanitize_segment};
//!
//! assert_eq!(sanitize_segment("Sub Dir!").unwrap(), "sub-dir");
//! assert_eq!(sanitize_file_name("My File?.txt").unwrap(), "my-file.txt");
//! assert_eq!(
//!     sanitize_file_name("Filename  ??  <without> an extension").unwrap(),
//!     "filename-without-an-extension"
//! );
//! ```
//!
//! ### Building Destination Paths
//!
//! ```rust
//! use fatcp::{destination_path, root_depth, split_path};
//! use std::path::{Path, PathBuf};
//!
//! let depth = root_depth(Path::new("/home/me/Music")).unwrap();
//! let segments = split_path("/home/me/Music/Live @ Home/Encore!.flac").unwrap();
//! let dest = destination_path(Path::new("/media/usb"), &segments, depth).unwrap();
//! assert_eq!(dest, PathBuf::from("/media/usb/live-home/encore.flac"));
//! ```
//!
//! ### Copying a Tree
//!
//! ```rust
//! use fatcp::{CopyOptions, TreeCopier};
//! use std::fs;
//!
//! let src = tempfile::tempdir().unwrap();
//! let dest = tempfile::tempdir().unwrap();
//! fs::create_dir(src.path().join("Sub Dir!")).unwrap();
//! fs::write(src.path().join("Sub Dir!/My File?.txt"), b"contents").unwrap();
//!
//! let copier = TreeCopier::new(CopyOptions::default());
//! let report = copier.copy_tree(src.path(), dest.path()).unwrap();
//!
//! assert_eq!(report.files_copied, 1);
//! assert_eq!(fs::read(dest.path().join("sub-dir/my-file.txt")).unwrap(), b"contents");
//! ```

pub mod cli;
mod config;
mod copy;
mod error;
mod layout;
pub mod logging;
mod materialize;
mod report;
mod sanitize;
mod slug;
mod split;
mod walk;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use config::{CopyOptions, DEFAULT_DIR_MODE};
pub use copy::copy_file;
pub use error::{CopyError, Result};
pub use layout::destination_path;
pub use materialize::Materializer;
pub use report::CopyReport;
pub use sanitize::{is_fat_safe, sanitize_file_name, sanitize_segment};
pub use slug::slugify;
pub use split::{normalize_segments, root_depth, split_path, split_path_buf};
pub use walk::{copy_to_fat, TreeCopier};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
