//! Destination path construction

use crate::error::{CopyError, Result};
use crate::sanitize::{sanitize_file_name, sanitize_segment};
use std::path::{Path, PathBuf};

/// Build the destination path for one source file
///
/// `segments` is the split source path of the file and `root_depth` the
/// segment count of the source root. Every directory segment between the
/// root and the file is sanitized and appended to `dest_root`, followed by the
/// sanitized filename, so the relative depth below the root is preserved.
///
/// # Examples
/// ```
/// use fatcp::{destination_path, split_path};
/// use std::path::{Path, PathBuf};
///
/// let segments = split_path("/music/Best Of/Track 01.mp3").unwrap();
/// let dest = destination_path(Path::new("/mnt/usb"), &segments, 1).unwrap();
/// assert_eq!(dest, PathBuf::from("/mnt/usb/best-of/track-01.mp3"));
/// ```
pub fn destination_path<P: AsRef<Path>>(
    dest_root: P,
    segments: &[String],
    root_depth: usize,
) -> Result<PathBuf> {
    let (file_name, parents) = match segments.split_last() {
        Some((file_name, parents)) if parents.len() >= root_depth => (file_name, parents),
        _ => {
            return Err(CopyError::InvalidPath {
                path: segments.join("/"),
            })
        }
    };

    let mut dest = dest_root.as_ref().to_path_buf();
    for segment in &parents[root_depth..] {
        dest.push(sanitize_segment(segment)?);
    }
    dest.push(sanitize_file_name(file_name)?);

    Ok(dest)
}
