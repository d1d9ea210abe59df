//! Errors that stop a scan

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure that prevents the scanner from continuing with a root.
///
/// Per-entry access problems are not errors: they are reported as warnings
/// and the walk goes on.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The output sink rejected a violating path.
    #[error("failed to write results while scanning '{}': {}", .root.display(), .source)]
    Output {
        root: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Root that was being scanned when the error occurred.
    pub fn root(&self) -> &std::path::Path {
        match self {
            ScanError::Output { root, .. } => root,
        }
    }
}
