//! Telemetry initialization and check outcome events.

use std::{ffi::OsStr, path::Path};

use anyhow::Result;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::check::Verdict;
use crate::lib::errors::ProbeError;

/// Default filter. Hooks read our stdout, so logs stay on stderr and quiet.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Emit the outcome of a single check.
pub fn emit_verdict(file_path: &OsStr, verdict: &Verdict) {
    debug!(
        target: "story_check::cli",
        file_path = %file_path.to_string_lossy(),
        verdict = verdict.as_str(),
        story_path = %verdict
            .story_path()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        "Completed story file check"
    );
}

/// Record a probe failure that is being treated as a missing story file.
pub fn emit_probe_failure(path: &Path, error: &ProbeError) {
    warn!(
        target: "story_check::probe",
        path = %path.display(),
        reason = %error,
        "Could not inspect story file; treating it as missing"
    );
}
