//! Launcher module - dependency check, argument assembly and pandoc invocation

pub mod command;
pub mod config;
mod error;
pub mod locator;
pub mod runner;

use std::path::{Path, PathBuf};

pub use command::*;
pub use config::*;
pub use error::LaunchError;
pub use locator::*;
pub use runner::*;

use crate::utils::{print_command, print_processing, print_written};

/// What to convert and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub target: PathBuf,
    pub output: PathBuf,
    pub format: InputFormat,
}

impl ConversionRequest {
    /// Request with the input format detected from the target's extension.
    pub fn new(target: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let target = target.into();
        let format = InputFormat::from_path(&target);
        Self {
            target,
            output: output.into(),
            format,
        }
    }

    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Runs one conversion: locate pandoc, build its arguments, run it, report.
pub struct Launcher<L, R> {
    locator: L,
    runner: R,
    quiet: bool,
}

impl Launcher<PathLocator, SystemRunner> {
    /// Launcher that searches `PATH` and spawns real processes.
    pub fn system() -> Self {
        Self::new(PathLocator, SystemRunner)
    }
}

impl<L: DependencyLocator, R: ProcessRunner> Launcher<L, R> {
    pub fn new(locator: L, runner: R) -> Self {
        Self {
            locator,
            runner,
            quiet: false,
        }
    }

    /// Suppress the status lines printed around the conversion.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Resolve the pandoc executable or fail with [`LaunchError::MissingDependency`].
    pub fn check_dependency(&self) -> Result<PathBuf, LaunchError> {
        self.locator
            .locate(PANDOC)
            .ok_or_else(|| LaunchError::MissingDependency {
                program: PANDOC.to_string(),
            })
    }

    /// Convert `request.target` and return the path of the written HTML file.
    ///
    /// Only reports success when pandoc exits with status 0; otherwise the
    /// child's status comes back as [`LaunchError::ConversionFailure`].
    pub fn run(
        &self,
        config: &ConversionConfig,
        request: &ConversionRequest,
    ) -> Result<PathBuf, LaunchError> {
        let program = self.check_dependency()?;
        self.run_with(&program, config, request)
    }

    /// Like [`Launcher::run`] for an executable that was already located.
    pub fn run_with(
        &self,
        program: &Path,
        config: &ConversionConfig,
        request: &ConversionRequest,
    ) -> Result<PathBuf, LaunchError> {
        let args = build_argument_vector(config, &request.target, request.format, &request.output);

        if !self.quiet {
            print_processing(&request.target);
            print_command(&render_command_line(PANDOC, &args));
        }

        let outcome = self.runner.run(program, &args)?;
        if !outcome.is_success() {
            return Err(LaunchError::ConversionFailure {
                program: PANDOC.to_string(),
                code: outcome.code,
            });
        }

        if !self.quiet {
            print_written(&request.output);
        }
        Ok(request.output.clone())
    }
}
