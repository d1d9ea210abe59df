//! Human-readable progress and warnings on stderr
//!
//! Nothing written here is part of the result stream, and all of it can be
//! switched off with quiet mode.

use std::fmt::Display;
use std::io;
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scan::ScanReport;

/// Diagnostic channel used by the scanner and the CLI.
///
/// Failures to write diagnostics are ignored.
pub struct Diagnostics<W: WriteColor = StandardStream> {
    out: Option<W>,
}

impl Diagnostics<StandardStream> {
    /// Diagnostics on stderr, coloured when `use_color` is set.
    pub fn stderr(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stderr(choice))
    }
}

impl<W: WriteColor> Diagnostics<W> {
    pub fn new(out: W) -> Self {
        Self { out: Some(out) }
    }

    /// Diagnostics that discard every message (quiet mode).
    pub fn silent() -> Self {
        Self { out: None }
    }

    pub fn is_silent(&self) -> bool {
        self.out.is_none()
    }

    /// Announce the start of a root.
    pub fn scanning(&mut self, root: &Path) {
        if let Some(out) = self.out.as_mut() {
            let _ = writeln!(out, "scanning: {}", root.display());
        }
    }

    /// Report an entry that could not be accessed.
    pub fn warning(&mut self, message: impl Display) {
        if let Some(out) = self.out.as_mut() {
            let _ = write_labelled(out, "warning", Color::Yellow, &message);
        }
    }

    /// Final one-line verdict for the whole run.
    pub fn summary(&mut self, report: &ScanReport) {
        if let Some(out) = self.out.as_mut() {
            let _ = write_summary(out, report);
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

fn write_labelled<W: WriteColor>(
    out: &mut W,
    label: &str,
    color: Color,
    message: &dyn Display,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}:", label)?;
    out.reset()?;
    writeln!(out, " {}", message)
}

fn write_summary<W: WriteColor>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    writeln!(out)?;
    if report.found_violation() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(out, "Heads up:")?;
        out.reset()?;
        writeln!(
            out,
            " {} violating {} found ({} scanned, {}).",
            report.violations,
            plural(report.violations, "filename", "filenames"),
            count_entries(report.entries),
            count_warnings(report.warnings),
        )
    } else {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "All good:")?;
        out.reset()?;
        writeln!(
            out,
            " no violating filenames found ({} scanned, {}).",
            count_entries(report.entries),
            count_warnings(report.warnings),
        )
    }
}

fn count_entries(n: u64) -> String {
    format!("{} {}", n, plural(n, "entry", "entries"))
}

fn count_warnings(n: u64) -> String {
    format!("{} {}", n, plural(n, "warning", "warnings"))
}

fn plural<'a>(n: u64, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
