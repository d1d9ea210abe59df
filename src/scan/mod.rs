//! Name-length scanning
//!
//! This module walks directory trees and flags every entry whose base name
//! is longer than eCryptfs allows:
//!
//! - `name` - the byte-length check itself
//! - `walker` - depth-first traversal that streams violating paths
//! - `report` - totals collected during a scan
//! - `error` - failures that stop a scan

mod error;
mod name;
mod report;
mod walker;

pub use error::ScanError;
pub use name::{MAX_NAME_BYTES, base_name, exceeds_limit, name_len};
pub use report::ScanReport;
pub use walker::Scanner;
