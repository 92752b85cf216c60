//! Entry point for the story-file existence check.
use std::process::ExitCode;

use story_file_check::{
    cli::{self, CheckExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    if let Err(err) = telemetry::init_tracing() {
        return CheckExit::from_error(err).report();
    }
    cli::run(std::env::args_os()).report()
}
