//! Destination directory creation

use crate::config::CopyOptions;
use crate::error::{CopyError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Creates destination directories on demand
#[derive(Debug, Clone)]
pub struct Materializer {
    verbose: bool,
    dir_mode: u32,
}

impl Materializer {
    pub fn new(options: &CopyOptions) -> Self {
        Self {
            verbose: options.verbose,
            dir_mode: options.dir_mode,
        }
    }

    /// Check whether `path` is an existing directory
    ///
    /// An absent path is `Ok(false)`. Anything else that is not a directory
    /// is an error.
    pub fn dir_exists(&self, path: &Path) -> Result<bool> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => Ok(true),
            Ok(_) => Err(CopyError::NotADirectory {
                path: path.to_path_buf(),
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(CopyError::Stat {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }

    /// Create `path` along with any missing ancestors
    pub fn create_dir(&self, path: &Path) -> Result<()> {
        if self.verbose {
            info!(path = %path.display(), "creating directory");
        }

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.dir_mode);
        }

        builder
            .create(path)
            .map_err(|source| CopyError::CreateDirectory {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Make sure `path` exists as a directory, returning whether it had to be created
    pub fn ensure_dir(&self, path: &Path) -> Result<bool> {
        if self.dir_exists(path)? {
            debug!(path = %path.display(), "directory already present");
            return Ok(false);
        }
        self.create_dir(path)?;
        Ok(true)
    }
}
