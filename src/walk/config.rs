//! Configuration for the format walk

/// Directory levels visited below the starting root: the root itself, its
/// immediate subdirectories, and theirs. Nothing deeper is entered.
pub const MAX_DEPTH: usize = 2;

/// Glob matched against file names when selecting formatting targets.
pub const PYTHON_PATTERN: &str = "*.py";

/// File name never handed to the formatter, compared without regard to case.
pub const EXCLUDED_FILE: &str = "rF2data.py";

/// Configuration for walk behavior.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Number of parallel formatter invocations per directory.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub jobs: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self { jobs: 1 }
    }
}
