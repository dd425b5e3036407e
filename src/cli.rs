//! Command-line interface
//!
//! Two invocation styles are accepted:
//!
//! - `fatcp <SOURCE> <DEST>`
//! - `fatcp -src <SOURCE> -dest <DEST> -v <LEVEL>`
//!
//! The single-dash long flags of the second form are rewritten to their
//! double-dash spelling before clap sees them.

use crate::config::CopyOptions;
use crate::error::{CopyError, Result};
use clap::Parser;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Copy a directory tree, renaming everything to be safe on FAT filesystems.
#[derive(Parser, Debug)]
#[command(name = "fatcp")]
#[command(version)]
#[command(about = "Copy a directory tree with FAT-safe file and directory names")]
pub struct Cli {
    /// Source directory
    #[arg(long = "src", value_name = "SOURCE")]
    pub src: Option<PathBuf>,

    /// Destination directory
    #[arg(long = "dest", value_name = "DEST")]
    pub dest: Option<PathBuf>,

    /// Verbosity level; anything above 0 logs each copied file
    #[arg(
        short = 'v',
        long = "verbose",
        value_name = "LEVEL",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub verbose: i64,

    /// Source and destination directories, when not given as flags
    #[arg(value_name = "PATH", num_args = 0..=2)]
    pub paths: Vec<PathBuf>,
}

/// Fully resolved arguments for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub options: CopyOptions,
}

/// Rewrite `-src`/`-dest` style flags into `--src`/`--dest`
///
/// Arguments after a bare `--` are left alone.
///
/// # Examples
/// ```
/// use fatcp::cli::normalize_legacy_args;
/// use std::ffi::OsString;
///
/// let args = normalize_legacy_args(["fatcp", "-src", "/a", "-dest=/b", "-v", "1"]);
/// let expected: Vec<OsString> = ["fatcp", "--src", "/a", "--dest=/b", "-v", "1"]
///     .iter()
///     .map(OsString::from)
///     .collect();
/// assert_eq!(args, expected);
/// ```
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if after_terminator {
                return arg;
            }
            if arg == "--" {
                after_terminator = true;
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some(flag) if is_legacy_flag(flag) => Some(OsString::from(format!("-{flag}"))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn is_legacy_flag(arg: &str) -> bool {
    ["-src", "-dest"].iter().any(|flag| {
        arg == *flag
            || arg
                .strip_prefix(flag)
                .is_some_and(|rest| rest.starts_with('='))
    })
}

impl Cli {
    /// Parse the process arguments, accepting both invocation styles
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_args(std::env::args_os()))
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }

    /// Resolve paths to absolute form and check the source directory
    pub fn into_invocation(self) -> Result<Invocation> {
        let verbose = self.is_verbose();
        let mut positional = self.paths.into_iter();

        let src = self.src.or_else(|| positional.next());
        let dest = self.dest.or_else(|| positional.next());

        if let Some(extra) = positional.next() {
            return Err(CopyError::argument(format!(
                "unexpected extra argument: {}",
                extra.display()
            )));
        }

        let (src, dest) = match (src, dest) {
            (Some(src), Some(dest)) => (src, dest),
            (None, None) => {
                return Err(CopyError::argument(
                    "fatcp requires a source and a destination argument",
                ))
            }
            (None, Some(_)) => return Err(CopyError::argument("missing source directory")),
            (Some(_), None) => return Err(CopyError::argument("missing destination directory")),
        };

        let source = std::path::absolute(&src).map_err(|err| {
            CopyError::argument(format!(
                "source {} is not a valid directory name: {err}",
                src.display()
            ))
        })?;
        let destination = std::path::absolute(&dest).map_err(|err| {
            CopyError::argument(format!(
                "destination {} is not a valid directory name: {err}",
                dest.display()
            ))
        })?;

        check_source_dir(&source)?;

        Ok(Invocation {
            source,
            destination,
            options: CopyOptions::default().with_verbose(verbose),
        })
    }
}

fn check_source_dir(source: &Path) -> Result<()> {
    match fs::metadata(source) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CopyError::argument(format!(
            "source is not a directory: {}",
            source.display()
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(CopyError::argument(format!(
            "source directory does not exist: {}",
            source.display()
        ))),
        Err(err) => Err(CopyError::Stat {
            path: source.to_path_buf(),
            source: err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["fatcp"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(normalize_legacy_args(argv)).unwrap()
    }

    #[test]
    fn test_positional_form() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let cli = parse(&[
            src.path().to_str().unwrap(),
            dest.path().to_str().unwrap(),
        ]);
        assert!(!cli.is_verbose());

        let invocation = cli.into_invocation().unwrap();
        assert_eq!(invocation.source, src.path());
        assert_eq!(invocation.destination, dest.path());
        assert!(!invocation.options.verbose);
    }

    #[test]
    fn test_flag_form() {
        let src = TempDir::new().unwrap();
        let cli = parse(&[
            "-src",
            src.path().to_str().unwrap(),
            "-dest",
            "/tmp/fatcp-flag-form",
            "-v",
            "2",
        ]);
        assert_eq!(cli.verbose, 2);

        let invocation = cli.into_invocation().unwrap();
        assert_eq!(invocation.source, src.path());
        assert_eq!(invocation.destination, PathBuf::from("/tmp/fatcp-flag-form"));
        assert!(invocation.options.verbose);
    }

    #[test]
    fn test_verbosity_accepts_any_integer() {
        let cli = parse(&["-v", "300", "/a", "/b"]);
        assert_eq!(cli.verbose, 300);
        assert!(cli.is_verbose());

        let cli = parse(&["-v", "-1", "/a", "/b"]);
        assert_eq!(cli.verbose, -1);
        assert!(!cli.is_verbose());
        assert_eq!(cli.paths.len(), 2);
    }

    #[test]
    fn test_relative_paths_become_absolute() {
        let cli = parse(&[".", "some/dest"]);
        let invocation = cli.into_invocation().unwrap();
        assert!(invocation.source.is_absolute());
        assert!(invocation.destination.is_absolute());
        assert!(invocation.destination.ends_with("some/dest"));
    }

    #[test]
    fn test_missing_arguments() {
        let err = parse(&[]).into_invocation().unwrap_err();
        assert!(matches!(err, CopyError::Argument { .. }));
        assert!(err.is_usage());

        let err = parse(&["/only/one"]).into_invocation().unwrap_err();
        assert!(matches!(err, CopyError::Argument { .. }));

        let err = parse(&["-dest", "/only/dest"]).into_invocation().unwrap_err();
        assert!(err.to_string().contains("missing source"));
    }

    #[test]
    fn test_extra_positional_with_flags() {
        let err = parse(&["--src", "/a", "--dest", "/b", "/c"])
            .into_invocation()
            .unwrap_err();
        assert!(matches!(err, CopyError::Argument { .. }));
    }

    #[test]
    fn test_too_many_positionals_rejected_by_parser() {
        let argv = normalize_legacy_args(["fatcp", "/a", "/b", "/c"]);
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("not-here");
        let err = parse(&[missing.to_str().unwrap(), "/tmp/out"])
            .into_invocation()
            .unwrap_err();
        assert!(matches!(err, CopyError::Argument { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_source_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, b"x").unwrap();

        let err = parse(&[file.to_str().unwrap(), "/tmp/out"])
            .into_invocation()
            .unwrap_err();
        assert!(matches!(err, CopyError::Argument { .. }));
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_normalize_legacy_args_terminator() {
        let args = normalize_legacy_args(["fatcp", "--", "-src"]);
        assert_eq!(args[2], OsString::from("-src"));
    }
}
