//! Pygroom - runs autopep8 across a shallow Python source tree

pub mod report;
pub mod runner;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use report::{FileOutcome, FormatReport, Outcome, print_report, print_report_json};
pub use runner::{Autopep8, DEFAULT_FORMATTER, FORMATTER_ARGS, FormatRunner, RunStatus};
pub use walk::{
    EXCLUDED_FILE, FormatWalker, MAX_DEPTH, PYTHON_PATTERN, WalkConfig, is_excluded,
    is_python_source,
};
