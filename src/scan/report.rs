//! Counters accumulated over a scan

/// Totals for everything a [`Scanner`](super::Scanner) has visited so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Roots the scanner started walking
    pub roots: usize,
    /// Entries checked, including each root itself
    pub entries: u64,
    pub violations: u64,
    /// Entries that could not be accessed
    pub warnings: u64,
}

impl ScanReport {
    pub fn found_violation(&self) -> bool {
        self.violations > 0
    }
}
