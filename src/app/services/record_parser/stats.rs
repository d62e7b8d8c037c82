//! Parsing statistics and result structures for HPI files
//!
//! The counters here replace the running tallies a one-off script would keep
//! in globals: they are scoped to a single parse call and returned with its
//! output.

use crate::app::models::SeriesStore;

/// Parsing result with the series store and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// Observations grouped by region
    pub store: SeriesStore<T>,

    /// Parse diagnostics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of non-blank data lines seen (header excluded)
    pub total_records: usize,

    /// Number of observations added to the store
    pub available: usize,

    /// Lines that produced no observation: unavailable markers plus malformed lines
    pub unavailable: usize,

    /// Subset of `unavailable` that failed to parse
    pub malformed: usize,

    /// Whether the first line was discarded as a header
    pub header_skipped: bool,

    /// Raw text of each line whose index was the unavailable marker
    pub unavailable_rows: Vec<String>,

    /// Parse errors for debugging
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            available: 0,
            unavailable: 0,
            malformed: 0,
            header_skipped: false,
            unavailable_rows: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Share of data lines that produced an observation, as a percentage
    pub fn availability_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.available as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Number of lines whose value was reported as unavailable, excluding malformed ones
    pub fn marked_unavailable(&self) -> usize {
        self.unavailable - self.malformed
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
