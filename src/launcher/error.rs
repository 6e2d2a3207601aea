//! Error types for the conversion launcher.
//!
//! Each variant corresponds to one way a launch can stop: the converter is
//! missing, could not be started, or ran and reported failure. Option files
//! add two more variants for read and parse failures. Underlying I/O and JSON
//! errors are exposed through `source()` rather than repeated in the message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing or running a conversion.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The converter executable could not be found on the search path.
    ///
    /// Raised before any other work is attempted.
    #[error("No {program} installation found.")]
    MissingDependency {
        /// Name of the executable that was looked up
        program: String,
    },

    /// The converter was found but the child process could not be started.
    #[error("Failed to start {program}")]
    Spawn {
        /// Name or path of the executable
        program: String,
        source: io::Error,
    },

    /// The converter ran and exited unsuccessfully.
    ///
    /// `code` is `None` when the child was terminated by a signal.
    #[error("Conversion failed: {program} {}", describe_exit(.code))]
    ConversionFailure {
        /// Name of the executable
        program: String,
        /// Exit code reported by the child, if any
        code: Option<i32>,
    },

    /// An options file could not be read.
    #[error("Failed to read options file {}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    /// An options file was read but is not valid.
    #[error("Invalid options file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LaunchError {
    /// Process exit code the launcher should terminate with for this error.
    ///
    /// A failing converter hands its own exit code through; everything else
    /// maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::ConversionFailure {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}
