//! Path splitting and normalization
//!
//! Turns an absolute path into the ordered list of its segments so that the
//! part below a source root can be re-rooted under a destination.

use crate::error::{CopyError, Result};
use std::path::{Path, MAIN_SEPARATOR};

/// Normalize the segments of a rooted path
///
/// This function:
/// - Drops empty components (repeated separators)
/// - Drops `.` components
/// - Resolves `..` against the previous segment, ignoring it at the root
///
/// The input is treated as already stripped of its leading separator.
///
/// # Examples
/// ```
/// use fatcp::normalize_segments;
///
/// assert_eq!(normalize_segments("var//log/./syslog"), vec!["var", "log", "syslog"]);
/// assert_eq!(normalize_segments("var/tmp/../log"), vec!["var", "log"]);
/// assert_eq!(normalize_segments("../etc"), vec!["etc"]);
/// ```
pub fn normalize_segments(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for component in path.split(MAIN_SEPARATOR) {
        match component {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other.to_string()),
        }
    }
    segments
}

/// Split a fully-qualified path into its segments
///
/// The path must start with the platform separator. The root itself splits
/// into no segments.
///
/// # Examples
/// ```
/// use fatcp::split_path;
///
/// assert_eq!(split_path("/var/log/syslog").unwrap(), vec!["var", "log", "syslog"]);
/// assert!(split_path("var/log/syslog").is_err());
/// ```
pub fn split_path(path: &str) -> Result<Vec<String>> {
    match path.strip_prefix(MAIN_SEPARATOR) {
        Some(rest) => Ok(normalize_segments(rest)),
        None => Err(CopyError::InvalidPath {
            path: path.to_string(),
        }),
    }
}

/// Split a [`Path`], converting non-UTF-8 names lossily
pub fn split_path_buf<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    split_path(&path.as_ref().to_string_lossy())
}

/// Number of segments in a root path
///
/// Segments at this index and beyond in a descendant's split path are the
/// ones that get reproduced under the destination.
pub fn root_depth<P: AsRef<Path>>(root: P) -> Result<usize> {
    Ok(split_path_buf(root)?.len())
}
