//! Scanner - walks each root depth-first and streams violating paths

use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use ignore::{Walk, WalkBuilder};
use termcolor::WriteColor;

use crate::diagnostics::Diagnostics;

use super::error::ScanError;
use super::name::{base_name, exceeds_limit};
use super::report::ScanReport;

/// Tree scanner that checks every entry under a set of roots.
///
/// Violating paths are written to the output sink one per line as they are
/// discovered, so nothing is held in memory between entries. The scanner
/// keeps its totals across calls to [`scan`](Self::scan).
#[derive(Debug, Default)]
pub struct Scanner {
    report: ScanReport,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals so far. Still valid after `scan` returned an error.
    pub fn report(&self) -> ScanReport {
        self.report
    }

    pub fn found_violation(&self) -> bool {
        self.report.found_violation()
    }

    /// Scan every root in order and report whether any violation was found.
    ///
    /// Entries that cannot be accessed are reported to `diag` and skipped.
    /// Only a failure to write to `out` stops the scan.
    pub fn scan<P, O, D>(
        &mut self,
        roots: &[P],
        out: &mut O,
        diag: &mut Diagnostics<D>,
    ) -> Result<bool, ScanError>
    where
        P: AsRef<Path>,
        O: Write + ?Sized,
        D: WriteColor,
    {
        for root in roots {
            self.scan_root(root.as_ref(), out, diag)?;
        }
        Ok(self.found_violation())
    }

    fn scan_root<O, D>(
        &mut self,
        root: &Path,
        out: &mut O,
        diag: &mut Diagnostics<D>,
    ) -> Result<(), ScanError>
    where
        O: Write + ?Sized,
        D: WriteColor,
    {
        diag.scanning(root);
        self.report.roots += 1;

        let output_error = |source: io::Error| ScanError::Output {
            root: root.to_path_buf(),
            source,
        };

        // A symlinked root is an entry of its own, never a way into its target
        if fs::symlink_metadata(root).is_ok_and(|meta| meta.file_type().is_symlink()) {
            return self.check_entry(root, out).map_err(output_error);
        }

        for result in build_walker(&walk_root(root)) {
            match result {
                Ok(entry) => {
                    self.check_entry(entry.path(), out).map_err(output_error)?;
                }
                Err(err) => {
                    self.report.warnings += 1;
                    diag.warning(format_args!("cannot access {}", err));
                }
            }
        }
        Ok(())
    }

    fn check_entry<O: Write + ?Sized>(&mut self, path: &Path, out: &mut O) -> io::Result<()> {
        self.report.entries += 1;
        if !exceeds_limit(base_name(path)) {
            return Ok(());
        }
        self.report.violations += 1;
        write_path(out, path)
    }
}

/// `ignore` reads a bare `-` root as stdin; `./-` names the directory.
fn walk_root(root: &Path) -> Cow<'_, Path> {
    if root == Path::new("-") {
        Cow::Owned(Path::new(".").join("-"))
    } else {
        Cow::Borrowed(root)
    }
}

/// Depth-first walk over everything under `root`, the root included.
///
/// Hidden files and ignore files get no special treatment, symlinks are not
/// followed, and siblings are visited in file name order.
fn build_walker(root: &Path) -> Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}

#[cfg(unix)]
fn write_path<O: Write + ?Sized>(out: &mut O, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())?;
    out.write_all(b"\n")
}

#[cfg(not(unix))]
fn write_path<O: Write + ?Sized>(out: &mut O, path: &Path) -> io::Result<()> {
    out.write_all(path.to_string_lossy().as_bytes())?;
    out.write_all(b"\n")
}
