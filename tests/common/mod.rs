//! Shared test utilities: fake locators, recording runners and fake pandoc scripts

#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tex2html::launcher::{DependencyLocator, ExitOutcome, LaunchError, ProcessRunner};

/// Locator with a fixed answer, independent of the real PATH
pub struct FixedLocator(pub Option<PathBuf>);

impl FixedLocator {
    pub fn present() -> Self {
        FixedLocator(Some(PathBuf::from("/usr/bin/pandoc")))
    }

    pub fn absent() -> Self {
        FixedLocator(None)
    }
}

impl DependencyLocator for FixedLocator {
    fn locate(&self, _program: &str) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Runner that records every invocation and returns a canned outcome
pub struct RecordingRunner {
    pub outcome: ExitOutcome,
    pub calls: RefCell<Vec<(PathBuf, Vec<OsString>)>>,
}

impl RecordingRunner {
    pub fn new(outcome: ExitOutcome) -> Self {
        Self {
            outcome,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(ExitOutcome::success())
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Program and arguments of the first recorded call, as UTF-8 strings
    pub fn first_call(&self) -> (PathBuf, Vec<String>) {
        let calls = self.calls.borrow();
        let (program, args) = &calls[0];
        (program.clone(), utf8_args(args))
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ExitOutcome, LaunchError> {
        self.calls
            .borrow_mut()
            .push((program.to_path_buf(), args.to_vec()));
        Ok(self.outcome)
    }
}

/// Write an executable `pandoc` shell script into `dir` that stores its
/// arguments, one per line, in `dir/args.txt` and exits with `exit_code`.
#[cfg(unix)]
pub fn write_fake_pandoc(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let args_file = dir.join("args.txt");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {}\n",
        args_file.display(),
        exit_code
    );
    let path = dir.join("pandoc");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Arguments recorded by the fake pandoc script
pub fn recorded_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("args.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Convert an argument vector to strings, failing the test on non-UTF-8 input
pub fn utf8_args(args: &[OsString]) -> Vec<String> {
    args.iter()
        .map(|arg| arg.to_str().unwrap().to_string())
        .collect()
}
