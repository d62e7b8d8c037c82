//! Parser for whitespace-delimited house price index files
//!
//! Two layouts share one line shape, `region year <third> index`:
//! - state-level files, where the third field is the quarter and the first
//!   line may be a header starting with `state`
//! - ZIP-level files, where the third field is ignored and the first line is
//!   always a header
//!
//! The layout is chosen by the caller, never guessed from the field count.
//!
//! ## Architecture
//!
//! - [`parser`] - Line iteration, header handling and statistics
//! - [`record`] - Conversion of split fields into typed observations
//! - [`field_parsers`] - Helpers for individual numeric fields
//! - [`stats`] - Parse statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use hpi_processor::app::services::record_parser::RecordParser;
//! use hpi_processor::HpiConfig;
//!
//! # fn example() -> hpi_processor::Result<()> {
//! let parser = RecordParser::new(HpiConfig::default());
//! let result = parser.parse_quarterly("state yr qtr index\nIL 2000 1 150.2\nIL 2000 2 .\n")?;
//!
//! assert_eq!(result.stats.available, 1);
//! assert_eq!(result.stats.unavailable, 1);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod parser;
pub mod record;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{LineOutcome, RecordParser};
pub use record::RecordSchema;
pub use stats::{ParseResult, ParseStats};
