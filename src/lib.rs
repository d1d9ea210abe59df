//! Synolint - find names too long for eCryptfs-encrypted shares

pub mod diagnostics;
pub mod output;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use diagnostics::Diagnostics;
pub use output::{JsonArrayFormatter, LineFormatter, OutputFormat, ResultFormatter};
pub use scan::{MAX_NAME_BYTES, ScanError, ScanReport, Scanner, exceeds_limit, name_len};
