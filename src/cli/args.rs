//! CLI argument definitions.
use std::{ffi::OsString, path::PathBuf};

use clap::{error::ErrorKind, Parser};
use tracing::debug;

/// Name the enclosing rule files invoke us by; kept verbatim in the usage line.
pub const USAGE_PROGRAM: &str = "check-story-book-file-exists.py";

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Check(CheckArgs),
    /// No file path (or arguments clap rejects, such as `--config` without a value).
    Usage,
    /// `--help` / `--version`; the rendered text is printed as-is.
    Info(String),
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "check-story-book-file-exists",
    version,
    about = "Fail when a .tsx component has no sibling .stories.tsx file",
    long_about = None
)]
pub struct CheckArgs {
    /// Rule configuration file (TOML). Defaults to the built-in .tsx/.stories.tsx rule.
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    /// File to check. Taken verbatim, so `-x.tsx` is a path, not a flag.
    #[arg(value_name = "FILE_PATH", allow_hyphen_values = true)]
    pub file_path: Option<OsString>,
    /// Extra args (accepted for compatibility with hook runners; ignored)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub extra: Vec<OsString>,
}

impl CheckArgs {
    /// Parse a full argument list (program name first) into a command.
    pub fn parse_command<I, T>(args: I) -> ParsedCommand
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(args) if args.file_path.is_some() => ParsedCommand::Check(args),
            Ok(_) => ParsedCommand::Usage,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                ParsedCommand::Info(err.render().to_string())
            }
            Err(err) => {
                debug!(
                    target: "story_check::cli",
                    kind = ?err.kind(),
                    "Rejected command line"
                );
                ParsedCommand::Usage
            }
        }
    }
}

/// The single usage line printed when no file path is given.
pub fn usage_line() -> String {
    format!("Usage: {USAGE_PROGRAM} <file_path>")
}
