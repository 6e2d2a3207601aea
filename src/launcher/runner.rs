//! Child-process execution of the converter

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

use super::LaunchError;

/// Result of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, `None` if the child was killed by a signal
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn with_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs a program to completion.
pub trait ProcessRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ExitOutcome, LaunchError>;
}

/// Spawns a real child process that inherits stdin, stdout and stderr, then
/// blocks until it exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ExitOutcome, LaunchError> {
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: program.display().to_string(),
                source,
            })?;
        Ok(status.into())
    }
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ExitOutcome, LaunchError> {
        (**self).run(program, args)
    }
}
