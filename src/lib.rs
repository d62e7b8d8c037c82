//! HPI Processor Library
//!
//! A Rust library for working with regional house price index (HPI) series:
//! state-level quarterly records and ZIP-level annual records.
//!
//! This library provides tools for:
//! - Parsing whitespace-delimited HPI files, tallying unavailable rows
//! - Collapsing quarterly series into annual series by averaging
//! - Finding the lowest and highest index of a region
//! - Ranking regions for a period, with stable tie handling
//! - Computing compound annual growth rates between two years
//! - Restricting series to an inclusive year window

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod growth;
        pub mod period_ranking;
        pub mod range_finder;
        pub mod ranker;
        pub mod record_parser;
        pub mod window_filter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod report;
}

// Re-export commonly used types
pub use app::models::{
    AnnualObservation, Observation, Period, QuarterObservation, RankedEntry, Resolution,
    SeriesStore,
};
pub use config::HpiConfig;

/// Result type alias for the HPI processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for HPI pipeline operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A data line could not be turned into an observation
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Region key not present in the store
    #[error("Unknown region: {region}")]
    UnknownRegion { region: String },

    /// Region present but with no observations
    #[error("Region {region} has no observations")]
    EmptyRegion { region: String },

    /// Year range precondition violated
    #[error("Invalid year range: {year0}..{year1}")]
    InvalidRange { year0: i32, year1: i32 },

    /// Base-year index of zero makes a growth rate undefined
    #[error("Division by zero: region {region} has a zero index in {year}")]
    DivisionByZero { region: String, year: i32 },

    /// Observation values outside their valid domain
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an unknown region error
    pub fn unknown_region(region: impl Into<String>) -> Self {
        Self::UnknownRegion {
            region: region.into(),
        }
    }

    /// Create an empty region error
    pub fn empty_region(region: impl Into<String>) -> Self {
        Self::EmptyRegion {
            region: region.into(),
        }
    }

    /// Create an invalid range error
    pub fn invalid_range(year0: i32, year1: i32) -> Self {
        Self::InvalidRange { year0, year1 }
    }

    /// Create a division by zero error
    pub fn division_by_zero(region: impl Into<String>, year: i32) -> Self {
        Self::DivisionByZero {
            region: region.into(),
            year,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
