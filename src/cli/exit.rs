use std::process::ExitCode;

use anyhow::Error;

use crate::check::Verdict;

use super::args::usage_line;

/// Bundles what to print with the exit code of one invocation.
///
/// `stdout` carries the hook-facing line (usage or `not found: ...`);
/// `stderr` carries operational failures only.
#[derive(Debug)]
pub struct CheckExit {
    stdout: Option<String>,
    stderr: Option<String>,
    exit_code: ExitCode,
}

impl CheckExit {
    pub fn usage() -> Self {
        Self {
            stdout: Some(usage_line()),
            stderr: None,
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn info(text: String) -> Self {
        Self {
            stdout: Some(text),
            stderr: None,
            exit_code: ExitCode::SUCCESS,
        }
    }

    pub fn from_verdict(verdict: &Verdict) -> Self {
        let exit_code = if verdict.passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
        Self {
            stdout: verdict.diagnostic(),
            stderr: None,
            exit_code,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            stdout: None,
            stderr: Some(format!("{err:?}")),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        if let Some(text) = &self.stdout {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
        }
        if let Some(text) = &self.stderr {
            eprintln!("{text}");
        }
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn stdout(&self) -> Option<&str> {
        self.stdout.as_deref()
    }

    pub fn stderr(&self) -> Option<&str> {
        self.stderr.as_deref()
    }
}
