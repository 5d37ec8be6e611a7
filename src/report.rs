//! Run reporting and display
//!
//! Collects per-file outcomes during the walk and prints them either as a
//! colored console listing with a summary line, or as pretty-printed JSON.

use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Local};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::runner::RunStatus;

/// What happened to one file during the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The formatter ran and exited cleanly.
    Formatted,
    /// The file is on the exclusion list and was never handed to the formatter.
    Excluded,
    /// The formatter could not be spawned or exited non-zero.
    Failed { error: String },
}

/// One file considered during the walk.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Accumulated results of one walk.
#[derive(Debug, Clone, Serialize)]
pub struct FormatReport {
    /// When the walk started.
    pub started_at: DateTime<Local>,
    /// Directories visited, the root included.
    pub directories: usize,
    /// Per-file outcomes in visit order.
    pub files: Vec<FileOutcome>,
}

impl FormatReport {
    pub fn new() -> Self {
        Self {
            started_at: Local::now(),
            directories: 0,
            files: Vec::new(),
        }
    }

    /// Record a directory visit.
    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    /// Record a file skipped by the exclusion list.
    pub fn record_excluded(&mut self, path: PathBuf) {
        self.files.push(FileOutcome {
            path,
            outcome: Outcome::Excluded,
        });
    }

    /// Record the result of a formatter invocation.
    pub fn record_status(&mut self, path: PathBuf, status: RunStatus) {
        let outcome = match status {
            RunStatus::Formatted => Outcome::Formatted,
            RunStatus::Failed(error) => Outcome::Failed { error },
        };
        self.files.push(FileOutcome { path, outcome });
    }

    pub fn formatted_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == Outcome::Formatted)
            .count()
    }

    pub fn excluded_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == Outcome::Excluded)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, Outcome::Failed { .. }))
            .count()
    }
}

impl Default for FormatReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Print per-file outcomes and a summary line with optional color.
pub fn print_report(report: &FormatReport, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut green = ColorSpec::new();
    green.set_fg(Some(Color::Green));
    let mut yellow = ColorSpec::new();
    yellow.set_fg(Some(Color::Yellow));
    let mut red = ColorSpec::new();
    red.set_fg(Some(Color::Red));

    for file in &report.files {
        match &file.outcome {
            Outcome::Formatted => {
                stdout.set_color(&green)?;
                write!(stdout, "{:<10}", "formatted")?;
                stdout.reset()?;
                writeln!(stdout, "{}", file.path.display())?;
            }
            Outcome::Excluded => {
                stdout.set_color(&yellow)?;
                write!(stdout, "{:<10}", "excluded")?;
                stdout.reset()?;
                writeln!(stdout, "{}", file.path.display())?;
            }
            Outcome::Failed { error } => {
                stdout.set_color(&red)?;
                write!(stdout, "{:<10}", "failed")?;
                stdout.reset()?;
                writeln!(stdout, "{} ({})", file.path.display(), error)?;
            }
        }
    }

    if !report.files.is_empty() {
        writeln!(stdout)?;
    }

    writeln!(
        stdout,
        "{} directories, {} files formatted, {} excluded, {} failed",
        report.directories,
        report.formatted_count(),
        report.excluded_count(),
        report.failed_count()
    )?;

    Ok(())
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_report_json(report: &FormatReport) -> io::Result<()> {
    let json =
        serde_json::to_string_pretty(report).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
