//! Name sanitization for FAT targets
//!
//! Directory names are slugged whole; filenames keep everything from their
//! last `.` onward untouched so extensions survive the trip.

use crate::error::{CopyError, Result};
use crate::slug::slugify;

/// DOS device names FAT refuses as a file stem
const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters FAT long names cannot contain
const FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Sanitize a directory name
///
/// # Examples
/// ```
/// use fatcp::sanitize_segment;
///
/// assert_eq!(sanitize_segment("Sub Dir!").unwrap(), "sub-dir");
/// assert!(sanitize_segment("???").is_err());
/// ```
pub fn sanitize_segment(segment: &str) -> Result<String> {
    non_empty(segment, slugify(segment))
}

/// Sanitize a filename, keeping the extension as-is
///
/// Only the part before the last `.` is slugged. A name without a `.` is
/// slugged whole.
///
/// # Examples
/// ```
/// use fatcp::sanitize_file_name;
///
/// assert_eq!(
///     sanitize_file_name("This <is> a Terrible Filename?.mp3").unwrap(),
///     "this-is-a-terrible-filename.mp3"
/// );
/// assert_eq!(sanitize_file_name("archive.TAR.GZ").unwrap(), "archive-tar.GZ");
/// ```
pub fn sanitize_file_name(name: &str) -> Result<String> {
    let sanitized = match name.rfind('.') {
        Some(last_dot) => {
            let (stem, extension) = name.split_at(last_dot);
            format!("{}{}", slugify(stem), extension)
        }
        None => slugify(name),
    };
    non_empty(name, sanitized)
}

fn non_empty(original: &str, sanitized: String) -> Result<String> {
    if sanitized.is_empty() {
        return Err(CopyError::EmptyName {
            name: original.to_string(),
        });
    }
    Ok(sanitized)
}

/// Check whether a single name is acceptable to a FAT filesystem
///
/// Rejects empty names, control characters, the characters FAT forbids and
/// the DOS device names (case-insensitive, with or without extension).
///
/// # Examples
/// ```
/// use fatcp::is_fat_safe;
///
/// assert!(is_fat_safe("my-file.txt"));
/// assert!(!is_fat_safe("what?.txt"));
/// assert!(!is_fat_safe("con.txt"));
/// ```
pub fn is_fat_safe(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }

    if name.chars().any(|c| c.is_control() || FORBIDDEN_CHARS.contains(&c)) {
        return false;
    }

    let stem_upper = name.split('.').next().unwrap_or("").to_uppercase();
    !RESERVED_NAMES.contains(&stem_upper.as_str())
}
