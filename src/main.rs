//! CLI entry point for pygroom

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pygroom::{
    Autopep8, DEFAULT_FORMATTER, FormatWalker, WalkConfig, print_report, print_report_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pygroom")]
#[command(about = "Runs autopep8 across a shallow Python source tree")]
#[command(version)]
struct Args {
    /// Directory to format
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Formatter executable to invoke
    #[arg(long = "formatter", value_name = "PROGRAM", default_value = DEFAULT_FORMATTER)]
    formatter: PathBuf,

    /// Number of parallel formatter invocations
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "1")]
    jobs: usize,

    /// Print the run report as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let config = WalkConfig { jobs: args.jobs };
    let walker = FormatWalker::new(config, Autopep8::with_program(&args.formatter));

    let report = match walker.walk(&root) {
        Some(r) => r,
        None => {
            eprintln!(
                "pygroom: cannot access '{}': No such file or directory",
                args.path.display()
            );
            process::exit(1);
        }
    };

    let result = if args.json {
        print_report_json(&report)
    } else {
        print_report(&report, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("pygroom: error writing output: {}", e);
        process::exit(1);
    }
}
