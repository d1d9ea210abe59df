//! Newline-delimited output

use std::io::{self, Write};

use super::ResultFormatter;

/// Passes the scanner's one-path-per-line output straight through.
///
/// Every write is already a complete, terminated line, so `finish` only
/// flushes.
pub struct LineFormatter<W: Write> {
    out: W,
}

impl<W: Write> LineFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Write for LineFormatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> ResultFormatter for LineFormatter<W> {
    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
