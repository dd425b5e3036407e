//! Tree traversal and copy orchestration
//!
//! Every regular file below the source root is copied to a sanitized path
//! under the destination root. Directories are only ever created as parents
//! of copied files, so empty source directories leave no trace.

use crate::config::CopyOptions;
use crate::copy::copy_file;
use crate::error::Result;
use crate::layout::destination_path;
use crate::materialize::Materializer;
use crate::report::CopyReport;
use crate::sanitize::is_fat_safe;
use crate::split::{root_depth, split_path_buf};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Copies a source tree into a destination tree with FAT-safe names
#[derive(Debug, Clone)]
pub struct TreeCopier {
    options: CopyOptions,
    materializer: Materializer,
}

impl TreeCopier {
    pub fn new(options: CopyOptions) -> Self {
        Self {
            materializer: Materializer::new(&options),
            options,
        }
    }

    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Copy everything under `src` into `dest`
    ///
    /// Both paths must be absolute. Entries are visited in lexical order by
    /// file name and symlinks are not followed. The first failure stops the
    /// walk; files copied before it stay in place.
    pub fn copy_tree(&self, src: &Path, dest: &Path) -> Result<CopyReport> {
        let depth = root_depth(src)?;
        let mut report = CopyReport::default();

        for entry in WalkDir::new(src).sort_by_file_name() {
            let entry = entry?;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                debug!(path = %entry.path().display(), "skipping non-regular entry");
                report.add_skipped();
                continue;
            }

            self.copy_entry(entry.path(), dest, depth, &mut report)?;
        }

        Ok(report)
    }

    fn copy_entry(
        &self,
        src_file: &Path,
        dest_root: &Path,
        depth: usize,
        report: &mut CopyReport,
    ) -> Result<()> {
        let segments = split_path_buf(src_file)?;
        let dest_file = destination_path(dest_root, &segments, depth)?;

        for name in fat_unsafe_names(dest_root, &dest_file) {
            warn!(
                path = %dest_file.display(),
                name = %name,
                "name is not accepted by FAT filesystems"
            );
        }

        if let Some(parent) = dest_file.parent() {
            if self.materializer.ensure_dir(parent)? {
                report.add_dir();
            }
        }

        let bytes = copy_file(src_file, &dest_file)?;
        report.add_file(bytes);

        if self.options.verbose {
            info!(
                "copied {} to {}",
                src_file.display(),
                dest_file.display()
            );
        }

        Ok(())
    }
}

/// Components of `dest_file` below `dest_root` that FAT would refuse
fn fat_unsafe_names(dest_root: &Path, dest_file: &Path) -> Vec<String> {
    let Ok(relative) = dest_file.strip_prefix(dest_root) else {
        return Vec::new();
    };
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .filter(|name| !is_fat_safe(name))
        .collect()
}

/// Copy `src` into `dest` with the given options
///
/// # Examples
/// ```
/// use fatcp::{copy_to_fat, CopyOptions};
/// use std::fs;
///
/// let src = tempfile::tempdir().unwrap();
/// let dest = tempfile::tempdir().unwrap();
/// fs::create_dir(src.path().join("Live Set")).unwrap();
/// fs::write(src.path().join("Live Set/Track 01.flac"), b"audio").unwrap();
///
/// let report = copy_to_fat(src.path(), dest.path(), CopyOptions::default()).unwrap();
/// assert_eq!(report.files_copied, 1);
/// assert!(dest.path().join("live-set/track-01.flac").is_file());
/// ```
pub fn copy_to_fat(src: &Path, dest: &Path, options: CopyOptions) -> Result<CopyReport> {
    TreeCopier::new(options).copy_tree(src, dest)
}
