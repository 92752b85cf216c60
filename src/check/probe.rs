use std::path::Path;

use crate::lib::{fs::is_regular_file, telemetry};

/// Answers whether a story file exists.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
///
/// An I/O failure other than "not found" is logged and reported as absent, so
/// the check fails closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        match is_regular_file(path) {
            Ok(found) => found,
            Err(err) => {
                telemetry::emit_probe_failure(path, &err);
                false
            }
        }
    }
}
