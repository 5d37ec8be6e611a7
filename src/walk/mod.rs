//! Bounded-depth directory walking
//!
//! The walk visits the starting directory, its immediate subdirectories, and
//! theirs, handing every Python source file it finds to the formatter. The
//! exclusion list and the depth cap live in `config`; `walker` drives the
//! traversal and `utils` holds the name matching.

mod config;
mod utils;
mod walker;

pub use config::{EXCLUDED_FILE, MAX_DEPTH, PYTHON_PATTERN, WalkConfig};
pub use utils::{is_excluded, is_python_source};
pub use walker::FormatWalker;
