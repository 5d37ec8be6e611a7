//! FormatWalker - bounded-depth traversal feeding files to the formatter

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::report::FormatReport;
use crate::runner::{FormatRunner, RunStatus};

use super::config::{MAX_DEPTH, WalkConfig};
use super::utils::{is_excluded, is_python_source, read_entries};

/// Walks a directory tree and runs the formatter on every Python source file
/// it finds. The walk covers the starting root, its immediate subdirectories,
/// and theirs; deeper directories are never entered.
///
/// The directory under visit is always an explicit parameter; the process
/// working directory is never consulted or changed.
pub struct FormatWalker<R> {
    config: WalkConfig,
    runner: R,
    pool: Option<rayon::ThreadPool>,
}

impl<R: FormatRunner + Sync> FormatWalker<R> {
    pub fn new(config: WalkConfig, runner: R) -> Self {
        // A dedicated pool is only built for an explicit worker count;
        // jobs = 0 uses rayon's global pool.
        let pool = match config.jobs {
            0 | 1 => None,
            n => rayon::ThreadPoolBuilder::new().num_threads(n).build().ok(),
        };

        Self {
            config,
            runner,
            pool,
        }
    }

    /// Walk from `root` and return the run report.
    /// Returns `None` if `root` is not a directory.
    pub fn walk(&self, root: &Path) -> Option<FormatReport> {
        if !root.is_dir() {
            return None;
        }

        let mut report = FormatReport::new();
        self.walk_dir(root, 0, &mut report);
        Some(report)
    }

    fn walk_dir(&self, path: &Path, depth: usize, report: &mut FormatReport) {
        // An unlistable directory (permissions, concurrent removal) is
        // skipped; the rest of the walk continues.
        let Some(entries) = read_entries(path) else {
            return;
        };
        report.record_directory();

        let mut targets = Vec::new();
        let mut subdirs = Vec::new();

        for entry in entries {
            let entry_path = entry.path();

            // Symlinks are skipped: a link back up the tree would otherwise
            // be visited once per level it appears at.
            if entry_path.is_symlink() {
                continue;
            }

            if entry_path.is_file() {
                let name = entry.file_name().to_string_lossy().to_string();
                if !is_python_source(&name) {
                    continue;
                }
                if is_excluded(&name) {
                    report.record_excluded(entry_path);
                    continue;
                }
                targets.push(entry_path);
            } else if entry_path.is_dir() {
                subdirs.push(entry_path);
            }
        }

        self.format_files(targets, report);

        if depth < MAX_DEPTH {
            for dir in subdirs {
                self.walk_dir(&dir, depth + 1, report);
            }
        }
    }

    /// Run the formatter over one directory's worth of files. A failed
    /// invocation is recorded and the remaining files still run.
    fn format_files(&self, targets: Vec<PathBuf>, report: &mut FormatReport) {
        if self.config.jobs == 1 {
            for path in targets {
                let status = self.runner.format(&path);
                report.record_status(path, status);
            }
            return;
        }

        let run = |path: PathBuf| {
            let status = self.runner.format(&path);
            (path, status)
        };

        let outcomes: Vec<(PathBuf, RunStatus)> = if let Some(pool) = &self.pool {
            pool.install(|| targets.into_par_iter().map(run).collect())
        } else {
            targets.into_par_iter().map(run).collect()
        };

        for (path, status) in outcomes {
            report.record_status(path, status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Outcome;
    use crate::test_utils::{RecordingRunner, TestTree};

    fn walk_with(tree: &TestTree, runner: &RecordingRunner) -> FormatReport {
        let walker = FormatWalker::new(WalkConfig::default(), runner);
        walker.walk(tree.path()).expect("root should be walkable")
    }

    fn called_names(runner: &RecordingRunner) -> Vec<String> {
        let mut names: Vec<String> = runner
            .calls()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_formats_every_python_file_across_levels() {
        let tree = TestTree::new();
        tree.add_file("root.py", "x=1\n");
        tree.add_file("sub/mid.py", "x=1\n");
        tree.add_file("sub/nested/leaf.py", "x=1\n");
        tree.add_file("other/also.py", "x=1\n");

        let runner = RecordingRunner::new();
        let report = walk_with(&tree, &runner);
        assert_eq!(
            called_names(&runner),
            vec!["also.py", "leaf.py", "mid.py", "root.py"]
        );
        // root, other, sub, sub/nested
        assert_eq!(report.directories, 4);
        assert_eq!(report.formatted_count(), 4);
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let tree = TestTree::new();
        tree.add_file("a.py", "x=1\n");
        tree.add_file("A.PY", "x=1\n");
        tree.add_file("rF2data.py", "x=1\n");
        tree.add_file("sub/RF2Data.PY", "x=1\n");
        tree.add_file("notpython.txt", "text\n");

        let runner = RecordingRunner::new();
        let report = walk_with(&tree, &runner);
        let names = called_names(&runner);
        assert_eq!(names, vec!["A.PY", "a.py"]);
        assert_eq!(report.excluded_count(), 2);
        // The txt file never appears in the report at all.
        assert_eq!(report.files.len(), 4);
    }

    #[test]
    fn test_depth_capped_at_two() {
        let tree = TestTree::new();
        tree.add_file("root.py", "x=1\n");
        tree.add_file("sub1/mid.py", "x=1\n");
        tree.add_file("sub1/sub2/leaf.py", "x=1\n");
        tree.add_file("sub1/sub2/sub3/deep.py", "x=1\n");

        let runner = RecordingRunner::new();
        let report = walk_with(&tree, &runner);
        let names = called_names(&runner);
        assert_eq!(names, vec!["leaf.py", "mid.py", "root.py"]);
        assert!(!names.contains(&"deep.py".to_string()));
        // sub3 is depth 3 and never visited.
        assert_eq!(report.directories, 3);
    }

    #[test]
    fn test_failure_does_not_stop_the_walk() {
        let tree = TestTree::new();
        tree.add_file("a.py", "x=1\n");
        tree.add_file("bad.py", "x=1\n");
        tree.add_file("sub/c.py", "x=1\n");

        let runner = RecordingRunner::failing_on(&["bad.py"]);
        let report = walk_with(&tree, &runner);
        // All three were still attempted.
        assert_eq!(called_names(&runner), vec!["a.py", "bad.py", "c.py"]);
        assert_eq!(report.formatted_count(), 2);
        assert_eq!(report.failed_count(), 1);

        let failed: Vec<_> = report
            .files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Failed { .. }))
            .collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].path.ends_with("bad.py"));
    }

    #[test]
    fn test_missing_root_returns_none() {
        let walker = FormatWalker::new(WalkConfig::default(), RecordingRunner::new());
        assert!(walker.walk(Path::new("/nonexistent/nowhere")).is_none());
    }

    #[test]
    fn test_file_root_returns_none() {
        let tree = TestTree::new();
        let file = tree.add_file("only.py", "x=1\n");

        let walker = FormatWalker::new(WalkConfig::default(), RecordingRunner::new());
        assert!(walker.walk(&file).is_none());
    }

    #[test]
    fn test_empty_tree() {
        let tree = TestTree::new();
        tree.add_dir("empty1");
        tree.add_dir("empty2/inner");

        let runner = RecordingRunner::new();
        let report = walk_with(&tree, &runner);
        assert!(runner.calls().is_empty());
        assert_eq!(report.directories, 4);
        assert_eq!(report.files.len(), 0);
    }

    #[test]
    fn test_working_directory_untouched() {
        let tree = TestTree::new();
        tree.add_file("a.py", "x=1\n");
        tree.add_file("sub/b.py", "x=1\n");

        let before = std::env::current_dir().unwrap();
        let runner = RecordingRunner::new();
        let _ = walk_with(&tree, &runner);
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_parallel_walk_formats_same_set() {
        let tree = TestTree::new();
        for i in 0..8 {
            tree.add_file(&format!("f{}.py", i), "x=1\n");
            tree.add_file(&format!("sub/g{}.py", i), "x=1\n");
        }
        tree.add_file("rF2data.py", "x=1\n");

        let sequential = {
            let runner = RecordingRunner::new();
            let _ = walk_with(&tree, &runner);
            called_names(&runner)
        };

        let runner = RecordingRunner::new();
        let walker = FormatWalker::new(WalkConfig { jobs: 4 }, &runner);
        let report = walker.walk(tree.path()).unwrap();

        assert_eq!(called_names(&runner), sequential);
        assert_eq!(report.formatted_count(), 16);
        assert_eq!(report.excluded_count(), 1);
    }

    #[test]
    fn test_parallel_failure_isolation() {
        let tree = TestTree::new();
        tree.add_file("a.py", "x=1\n");
        tree.add_file("bad.py", "x=1\n");
        tree.add_file("c.py", "x=1\n");

        let walker = FormatWalker::new(
            WalkConfig { jobs: 0 },
            RecordingRunner::failing_on(&["bad.py"]),
        );
        let report = walker.walk(tree.path()).unwrap();

        assert_eq!(report.formatted_count(), 2);
        assert_eq!(report.failed_count(), 1);
    }
}
