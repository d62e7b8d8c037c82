//! Core HPI file parser
//!
//! This module walks the lines of an input file, decides whether the first
//! line is a header, and turns every data line into either an observation,
//! an unavailable-row tally, or a recorded parse error.

use std::path::Path;
use tracing::{debug, info, warn};

use super::field_parsers::is_unavailable;
use super::record::RecordSchema;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{AnnualObservation, QuarterObservation, Resolution, SeriesStore};
use crate::config::HpiConfig;
use crate::constants::{FIELD_COUNT, fields};
use crate::{Error, Result};

/// What a single data line turned into
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome<T> {
    /// Whitespace-only line, ignored entirely
    Blank,
    /// The index field held the unavailable marker; carries the row's fields joined by spaces
    Unavailable(String),
    Observation(T),
}

/// Parser for state-level (quarterly) and ZIP-level (annual) HPI files
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    config: HpiConfig,
}

impl RecordParser {
    pub fn new(config: HpiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HpiConfig {
        &self.config
    }

    /// Parse state-level quarterly content
    pub fn parse_quarterly(&self, content: &str) -> Result<ParseResult<QuarterObservation>> {
        self.parse_content(content)
    }

    /// Parse ZIP-level annual content
    pub fn parse_annual(&self, content: &str) -> Result<ParseResult<AnnualObservation>> {
        self.parse_content(content)
    }

    /// Read and parse a state-level quarterly file
    pub fn parse_quarterly_file(&self, path: &Path) -> Result<ParseResult<QuarterObservation>> {
        self.parse_file(path)
    }

    /// Read and parse a ZIP-level annual file
    pub fn parse_annual_file(&self, path: &Path) -> Result<ParseResult<AnnualObservation>> {
        self.parse_file(path)
    }

    /// Read a file and parse it with the layout of `T`
    pub fn parse_file<T: RecordSchema>(&self, path: &Path) -> Result<ParseResult<T>> {
        info!("Parsing {} HPI file: {}", T::RESOLUTION, path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read file {}", path.display()), e)
        })?;

        self.parse_content(&content)
    }

    /// Parse file content with the layout of `T`
    pub fn parse_content<T: RecordSchema>(&self, content: &str) -> Result<ParseResult<T>> {
        let mut store = SeriesStore::new();
        let mut stats = ParseStats::new();

        for (offset, line) in content.lines().enumerate() {
            let line_number = offset + 1;

            if offset == 0 && self.is_header::<T>(line) {
                debug!("Discarding header line: {}", line.trim());
                stats.header_skipped = true;
                continue;
            }

            match self.parse_line::<T>(line, line_number) {
                Ok(LineOutcome::Blank) => {}
                Ok(LineOutcome::Unavailable(row)) => {
                    stats.total_records += 1;
                    stats.unavailable += 1;
                    warn!("data unavailable: {}", row);
                    stats.unavailable_rows.push(row);
                }
                Ok(LineOutcome::Observation(observation)) => {
                    stats.total_records += 1;
                    stats.available += 1;
                    store.push(observation);
                }
                Err(e) => {
                    if self.config.strict {
                        return Err(e);
                    }
                    stats.total_records += 1;
                    stats.unavailable += 1;
                    stats.malformed += 1;
                    warn!("Skipped malformed line: {}", e);
                    stats.errors.push(e.to_string());
                }
            }
        }

        warn!(
            "count: {} uncounted: {} ({} regions)",
            stats.available,
            stats.unavailable,
            store.region_count()
        );

        Ok(ParseResult { store, stats })
    }

    /// Parse one data line
    ///
    /// Fails with [`Error::Parse`] when the line has too few fields or a
    /// numeric field does not parse; an unavailable marker is not an error.
    pub fn parse_line<T: RecordSchema>(
        &self,
        line: &str,
        line_number: usize,
    ) -> Result<LineOutcome<T>> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.is_empty() {
            return Ok(LineOutcome::Blank);
        }

        if parts.len() < FIELD_COUNT {
            return Err(Error::parse(
                line_number,
                format!(
                    "expected {} fields, found {}: '{}'",
                    FIELD_COUNT,
                    parts.len(),
                    line.trim()
                ),
            ));
        }

        if is_unavailable(&parts, fields::INDEX, &self.config.unavailable_marker) {
            return Ok(LineOutcome::Unavailable(parts.join(" ")));
        }

        T::from_fields(&parts)
            .map(LineOutcome::Observation)
            .map_err(|e| Error::parse(line_number, e.to_string()))
    }

    /// Annual files always open with a header; quarterly files only when the
    /// first line starts with the header token.
    fn is_header<T: RecordSchema>(&self, first_line: &str) -> bool {
        match T::RESOLUTION {
            Resolution::Annual => true,
            Resolution::Quarterly => first_line
                .trim_start()
                .starts_with(self.config.header_token.as_str()),
        }
    }
}
