//! Result stream formatting
//!
//! The scanner writes violating paths one per line to any `io::Write`. The
//! formatters here sit between the scanner and stdout:
//!
//! - `lines` - newline-delimited output, passed through as-is
//! - `json` - the same items reframed as one JSON array
//! - `config` - format selection

mod config;
mod json;
mod lines;

use std::io::{self, Write};

pub use config::OutputFormat;
pub use json::JsonArrayFormatter;
pub use lines::LineFormatter;

/// A result sink that may need a closing step once all items are written.
pub trait ResultFormatter: Write {
    /// Complete the output. Must be called once after the last write.
    fn finish(&mut self) -> io::Result<()>;
}
