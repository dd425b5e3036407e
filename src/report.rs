//! Copy run counters

use std::fmt;

/// Totals for one tree copy
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Regular files copied
    pub files_copied: u64,
    /// Bytes written across all copied files
    pub bytes_copied: u64,
    /// Destination directories that had to be created
    pub dirs_created: u64,
    /// Entries that were neither directories nor regular files
    pub entries_skipped: u64,
}

impl CopyReport {
    pub fn add_file(&mut self, bytes: u64) {
        self.files_copied += 1;
        self.bytes_copied += bytes;
    }

    pub fn add_dir(&mut self) {
        self.dirs_created += 1;
    }

    pub fn add_skipped(&mut self) {
        self.entries_skipped += 1;
    }
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "copied={} bytes={} dirs_created={} skipped={}",
            self.files_copied, self.bytes_copied, self.dirs_created, self.entries_skipped
        )
    }
}
