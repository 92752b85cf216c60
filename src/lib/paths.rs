//! Shared path helpers.

use std::{borrow::Cow, ffi::OsStr, path::Path};

/// Final path segment of `path`, or the whole path when there is none.
pub fn base_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
}

/// Literal suffix strip on the raw encoded bytes, so non-UTF-8 names still match.
#[cfg(unix)]
pub fn strip_suffix<'a>(path: &'a OsStr, suffix: &str) -> Option<&'a OsStr> {
    use std::os::unix::ffi::OsStrExt;

    path.as_bytes()
        .strip_suffix(suffix.as_bytes())
        .map(OsStr::from_bytes)
}

#[cfg(not(unix))]
pub fn strip_suffix<'a>(path: &'a OsStr, suffix: &str) -> Option<&'a OsStr> {
    path.to_str()?.strip_suffix(suffix).map(OsStr::new)
}
