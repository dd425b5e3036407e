//! Error types for tree copy operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for tree copy operations
#[derive(Error, Debug)]
pub enum CopyError {
    /// Path handed to the splitter is not absolute, or has nothing below the root
    #[error("Invalid path: {path} is not a fully-qualified path")]
    InvalidPath { path: String },

    /// Sanitizing a name left nothing behind
    #[error("Name {name:?} has no characters left after sanitizing")]
    EmptyName { name: String },

    /// Metadata lookup failed for a reason other than the path being absent
    #[error("Cannot stat {}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory was expected but something else is there
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Recursive directory creation failed
    #[error("Cannot create directory {}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source file cannot be opened for reading
    #[error("Cannot open source {}", path.display())]
    OpenSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination file cannot be created or truncated
    #[error("Cannot create destination {}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error part way through streaming bytes
    #[error("Copy from {} to {} failed", from.display(), to.display())]
    CopyStream {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Flushing the destination to disk failed
    #[error("Cannot finish writing {}", path.display())]
    Finish {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed
    #[error("Cannot walk source tree")]
    Walk(#[from] walkdir::Error),

    /// Missing or malformed command-line arguments
    #[error("{message}")]
    Argument { message: String },
}

impl CopyError {
    /// Build an [`CopyError::Argument`] from any message
    pub fn argument(message: impl Into<String>) -> Self {
        CopyError::Argument {
            message: message.into(),
        }
    }

    /// Whether the failure comes from bad invocation rather than I/O during the copy
    pub fn is_usage(&self) -> bool {
        matches!(self, CopyError::Argument { .. })
    }
}

/// Result type for tree copy operations
pub type Result<T> = std::result::Result<T, CopyError>;
