//! CLI entry point for synolint

use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use synolint::{Diagnostics, OutputFormat, Scanner};

/// Color mode for diagnostics on stderr
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

/// Determine whether to color diagnostics based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Diagnostics go to stderr, so that is the stream that matters
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "synolint")]
#[command(about = "List files and directories whose names are too long for eCryptfs (143 bytes)")]
#[command(version)]
struct Args {
    /// Files or directories to scan recursively
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Silence progress, warnings and the summary on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Print violating paths as a single JSON array
    #[arg(short, long)]
    json: bool,

    /// Control color on stderr: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    // Usage errors exit with status 2
    let args = Args::parse();

    let mut diag = if args.quiet {
        Diagnostics::silent()
    } else {
        Diagnostics::stderr(should_use_color(args.color))
    };

    let stdout = BufWriter::new(io::stdout().lock());
    let mut formatter = OutputFormat::from_json_flag(args.json).formatter(stdout);

    let mut scanner = Scanner::new();
    let outcome = scanner.scan(args.paths.as_slice(), &mut formatter, &mut diag);

    // Close the JSON array even when the scan stopped early
    let finished = formatter.finish();
    drop(formatter);

    if let Err(e) = outcome {
        eprintln!("synolint: error: {}", e);
        process::exit(1);
    }
    if let Err(e) = finished {
        eprintln!("synolint: error writing output: {}", e);
        process::exit(1);
    }

    diag.summary(&scanner.report());

    if scanner.found_violation() {
        process::exit(1);
    }
}
