//! Run configuration

/// Permission bits for directories created on the destination
pub const DEFAULT_DIR_MODE: u32 = 0o777;

/// Options for one tree copy, fixed before the run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOptions {
    /// Log every copied file and created directory
    pub verbose: bool,
    /// Mode for new directories on Unix (the process umask still applies)
    pub dir_mode: u32,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}

impl CopyOptions {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_dir_mode(mut self, dir_mode: u32) -> Self {
        self.dir_mode = dir_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CopyOptions::default();
        assert!(!options.verbose);
        assert_eq!(options.dir_mode, 0o777);
    }

    #[test]
    fn test_builders() {
        let options = CopyOptions::default()
            .with_verbose(true)
            .with_dir_mode(0o755);
        assert!(options.verbose);
        assert_eq!(options.dir_mode, 0o755);
    }
}
