//! Application constants for the HPI processor
//!
//! Default values and field layout shared by the parser, the ranker
//! and the command-line interface.

// =============================================================================
// Input Format
// =============================================================================

/// Value written in place of an index when the figure is unavailable
pub const UNAVAILABLE_MARKER: &str = ".";

/// Leading token of the optional header line in state-level files
pub const HEADER_TOKEN: &str = "state";

/// Number of whitespace-delimited fields every data line must carry
pub const FIELD_COUNT: usize = 4;

/// Field positions within a data line
pub mod fields {
    pub const REGION: usize = 0;
    pub const YEAR: usize = 1;
    /// Quarter in state files; an ignored column in ZIP files
    pub const QUARTER: usize = 2;
    pub const INDEX: usize = 3;
}

/// Valid quarter numbers
pub const QUARTER_RANGE: std::ops::RangeInclusive<u8> = 1..=4;

/// File name fragment that marks state-level (quarterly) input
pub const STATE_FILE_MARKER: &str = "state";

// =============================================================================
// Ranking
// =============================================================================

/// Size of the top and bottom views of a ranking
pub const DEFAULT_RANKING_SIZE: usize = 10;
