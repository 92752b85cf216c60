//! Read-only filesystem queries used by the story-file check.

use std::{fs, io, path::Path};

use crate::lib::errors::ProbeError;

/// Returns `Ok(true)` when `path` names a regular file.
///
/// Symlinks are followed, so a link to a regular file counts. Directories and
/// other non-file objects yield `Ok(false)`, as do paths that do not exist or
/// that traverse a non-directory. Any other I/O failure (for example
/// permission denied on a parent directory) is returned as [`ProbeError`].
pub fn is_regular_file(path: &Path) -> Result<bool, ProbeError> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(err) if is_absent(&err) => Ok(false),
        Err(source) => Err(ProbeError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn is_absent(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::NotFound {
        return true;
    }
    // ENOTDIR: some component of the path is a regular file.
    #[cfg(unix)]
    if err.raw_os_error() == Some(20) {
        return true;
    }
    false
}
