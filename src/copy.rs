//! Single file copy

use crate::error::{CopyError, Result};
use std::fs::File;
use std::io;
use std::path::Path;

/// Copy the bytes of `src` into `dest`, replacing whatever `dest` held
///
/// Returns the number of bytes written. The destination is synced before
/// returning so late write errors are reported here rather than lost when the
/// handle drops. A failure part way through leaves a partial destination.
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64> {
    let mut reader = File::open(src).map_err(|source| CopyError::OpenSource {
        path: src.to_path_buf(),
        source,
    })?;

    let mut writer = File::create(dest).map_err(|source| CopyError::CreateDestination {
        path: dest.to_path_buf(),
        source,
    })?;

    let bytes = io::copy(&mut reader, &mut writer).map_err(|source| CopyError::CopyStream {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source,
    })?;

    writer.sync_all().map_err(|source| CopyError::Finish {
        path: dest.to_path_buf(),
        source,
    })?;

    Ok(bytes)
}
