//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use crate::runner::{FormatRunner, RunStatus};

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an empty directory, including any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Formatter stand-in that records invocations instead of spawning processes.
///
/// Files whose name appears in the failure list report a failed invocation;
/// everything else reports success.
pub struct RecordingRunner {
    calls: Mutex<Vec<PathBuf>>,
    fail_names: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_names: Vec::new(),
        }
    }

    /// A runner that fails for the given file names (case-insensitive).
    pub fn failing_on(names: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_names: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Paths handed to the runner so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().expect("runner mutex poisoned").clone()
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatRunner for RecordingRunner {
    fn format(&self, file: &Path) -> RunStatus {
        self.calls
            .lock()
            .expect("runner mutex poisoned")
            .push(file.to_path_buf());

        let name = file
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        if self.fail_names.iter().any(|f| f.eq_ignore_ascii_case(&name)) {
            RunStatus::Failed(format!("synthetic failure for {}", name))
        } else {
            RunStatus::Formatted
        }
    }
}
