//! CLI entrypoint: turns an argument list into one check and its exit.
use std::ffi::OsString;

use anyhow::Context;

use crate::check::{check_file, FsProbe};
use crate::config::CheckConfig;
use crate::lib::telemetry;

pub mod args;
pub mod exit;

pub use args::{usage_line, CheckArgs, ParsedCommand, USAGE_PROGRAM};
pub use exit::CheckExit;

/// Run one invocation against the real filesystem.
pub fn run<I, T>(args: I) -> CheckExit
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CheckArgs::parse_command(args) {
        ParsedCommand::Check(args) => execute_check(args),
        ParsedCommand::Usage => CheckExit::usage(),
        ParsedCommand::Info(text) => CheckExit::info(text),
    }
}

fn execute_check(args: CheckArgs) -> CheckExit {
    let Some(file_path) = args.file_path else {
        return CheckExit::usage();
    };

    let config = match CheckConfig::load(args.config_path).with_context(|| {
        format!(
            "failed to load rule configuration for {}",
            file_path.to_string_lossy()
        )
    }) {
        Ok(config) => config,
        Err(err) => return CheckExit::from_error(err),
    };

    let verdict = check_file(&config.rule, &file_path, &FsProbe);
    telemetry::emit_verdict(&file_path, &verdict);
    CheckExit::from_verdict(&verdict)
}
