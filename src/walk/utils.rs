//! Shared helpers for the format walk

use std::fs::DirEntry;
use std::path::Path;

use glob::{MatchOptions, Pattern};

use super::config::{EXCLUDED_FILE, PYTHON_PATTERN};

/// Matching ignores letter case so `.PY` files are picked up even on
/// case-sensitive filesystems.
fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: false,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}

/// Check if a file name is a Python source file.
pub fn is_python_source(name: &str) -> bool {
    Pattern::new(PYTHON_PATTERN)
        .map(|p| p.matches_with(name, match_options()))
        .unwrap_or(false)
}

/// Check if a file name is on the exclusion list.
pub fn is_excluded(name: &str) -> bool {
    name.eq_ignore_ascii_case(EXCLUDED_FILE)
}

/// Read directory entries, dropping unreadable ones, sorted by name for
/// deterministic output. Returns `None` if the directory cannot be listed.
pub fn read_entries(path: &Path) -> Option<Vec<DirEntry>> {
    let entries = std::fs::read_dir(path).ok()?;

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());

    Some(entries)
}
