//! Configuration management and validation.
//!
//! Provides the settings that shape parsing (sentinel and header tokens,
//! strictness), aggregation order and the size of ranking views.

use crate::constants::{DEFAULT_RANKING_SIZE, HEADER_TOKEN, UNAVAILABLE_MARKER};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Order of the annual observations produced from quarterly data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearOrder {
    /// Years appear in the order they were first seen in the quarterly series
    #[default]
    EncounterOrder,
    /// Years are sorted ascending
    Chronological,
}

/// Global configuration for HPI processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HpiConfig {
    /// Index field value that marks an unavailable observation
    pub unavailable_marker: String,

    /// Leading token that identifies the optional header of state files
    pub header_token: String,

    /// Number of entries in each of the top and bottom ranking views
    pub ranking_size: usize,

    /// Output order of annualized series
    pub year_order: YearOrder,

    /// Abort on the first malformed line instead of skipping it
    pub strict: bool,
}

impl Default for HpiConfig {
    fn default() -> Self {
        Self {
            unavailable_marker: UNAVAILABLE_MARKER.to_string(),
            header_token: HEADER_TOKEN.to_string(),
            ranking_size: DEFAULT_RANKING_SIZE,
            year_order: YearOrder::EncounterOrder,
            strict: false,
        }
    }
}

impl HpiConfig {
    /// Set the ranking view size
    pub fn with_ranking_size(mut self, ranking_size: usize) -> Self {
        self.ranking_size = ranking_size;
        self
    }

    /// Set the annualized year order
    pub fn with_year_order(mut self, year_order: YearOrder) -> Self {
        self.year_order = year_order;
        self
    }

    /// Enable strict parsing
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Set the unavailable-value marker
    pub fn with_unavailable_marker(mut self, marker: impl Into<String>) -> Self {
        self.unavailable_marker = marker.into();
        self
    }

    /// Check the configuration for values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.unavailable_marker.trim().is_empty() {
            return Err(Error::configuration("unavailable marker must not be empty"));
        }
        if self.unavailable_marker.split_whitespace().count() != 1 {
            return Err(Error::configuration(format!(
                "unavailable marker '{}' must be a single token",
                self.unavailable_marker
            )));
        }
        if self.header_token.trim().is_empty() {
            return Err(Error::configuration("header token must not be empty"));
        }
        if self.ranking_size == 0 {
            return Err(Error::configuration("ranking size must be at least 1"));
        }
        Ok(())
    }
}
