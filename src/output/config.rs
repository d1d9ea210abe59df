//! Output format selection

use std::io::Write;

use super::ResultFormatter;
use super::json::JsonArrayFormatter;
use super::lines::LineFormatter;

/// How violating paths are rendered on the result stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Lines,
    /// A single JSON array of strings
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Lines }
    }

    /// Wrap `out` in the formatter for this format.
    pub fn formatter<'a, W: Write + 'a>(self, out: W) -> Box<dyn ResultFormatter + 'a> {
        match self {
            Self::Lines => Box::new(LineFormatter::new(out)),
            Self::Json => Box::new(JsonArrayFormatter::new(out)),
        }
    }
}
