//! External formatter invocation
//!
//! The formatter is a boundary dependency: one subprocess per file, blocking
//! until the tool exits, stdio inherited so whatever the tool prints reaches
//! the user directly. A failed invocation is reported back to the walker and
//! never stops the walk.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Program invoked when none is configured.
pub const DEFAULT_FORMATTER: &str = "autopep8";

/// Fixed arguments passed before the file name: rewrite in place, with the
/// aggressiveness level raised to 3 by the repeated `-a` flags.
pub const FORMATTER_ARGS: [&str; 4] = ["-i", "-a", "-a", "-a"];

/// Result of one formatter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The tool exited with status zero.
    Formatted,
    /// The tool could not be spawned or exited non-zero.
    Failed(String),
}

/// Boundary to the external formatting tool.
///
/// The walker only ever talks to this trait, so tests can substitute an
/// in-process recorder for the real subprocess.
pub trait FormatRunner {
    /// Format a single file in place.
    fn format(&self, file: &Path) -> RunStatus;
}

impl<T: FormatRunner + ?Sized> FormatRunner for &T {
    fn format(&self, file: &Path) -> RunStatus {
        (**self).format(file)
    }
}

/// Runs autopep8 (or a compatible drop-in) once per file.
pub struct Autopep8 {
    program: PathBuf,
}

impl Autopep8 {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_FORMATTER)
    }

    /// Use a different executable in place of `autopep8`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Autopep8 {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatRunner for Autopep8 {
    fn format(&self, file: &Path) -> RunStatus {
        match Command::new(&self.program)
            .args(FORMATTER_ARGS)
            .arg(file)
            .status()
        {
            Ok(status) if status.success() => RunStatus::Formatted,
            Ok(status) => RunStatus::Failed(format!(
                "{} exited with {}",
                self.program.display(),
                status
            )),
            Err(e) => RunStatus::Failed(format!(
                "failed to run {}: {}",
                self.program.display(),
                e
            )),
        }
    }
}
