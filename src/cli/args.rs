//! Command-line argument definitions for the HPI processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::Resolution;
use crate::config::{HpiConfig, YearOrder};
use crate::constants::{DEFAULT_RANKING_SIZE, STATE_FILE_MARKER};
use crate::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the house price index processor
///
/// Reads state-level quarterly or ZIP-level annual HPI files and reports
/// index ranges, period rankings, growth rankings and windowed series.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hpi-processor",
    version,
    about = "Rank regions by house price index level and growth"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Number of entries in the top and bottom ranking views
    #[arg(
        long = "top",
        value_name = "N",
        default_value_t = DEFAULT_RANKING_SIZE,
        global = true
    )]
    pub top: usize,

    /// Sort annualized years ascending instead of first-seen order
    #[arg(long = "chronological", global = true)]
    pub chronological: bool,

    /// Fail on the first malformed line instead of skipping it
    #[arg(long = "strict", global = true)]
    pub strict: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show the lowest and highest index of one or more regions
    Range(RangeArgs),
    /// Rank regions by index for one year or quarter
    Rank(RankArgs),
    /// Rank regions by compound annual growth rate between two years
    Trend(TrendArgs),
    /// Show year-by-year values of regions within a window
    Window(WindowArgs),
}

/// Layout of the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Quarterly when the file name contains "state", annual otherwise
    Auto,
    Quarterly,
    Annual,
}

impl InputFormat {
    /// Resolve the layout for a concrete path
    pub fn resolve(self, path: &Path) -> Resolution {
        match self {
            InputFormat::Quarterly => Resolution::Quarterly,
            InputFormat::Annual => Resolution::Annual,
            InputFormat::Auto => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_lowercase())
                    .unwrap_or_default();
                if name.contains(STATE_FILE_MARKER) {
                    Resolution::Quarterly
                } else {
                    Resolution::Annual
                }
            }
        }
    }
}

/// Input file shared by every subcommand
#[derive(Debug, Clone, Parser)]
pub struct InputArgs {
    /// House price index file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Input layout
    #[arg(short = 'f', long = "format", value_enum, default_value_t = InputFormat::Auto)]
    pub format: InputFormat,
}

impl InputArgs {
    pub fn resolution(&self) -> Resolution {
        self.format.resolve(&self.file)
    }
}

#[derive(Debug, Clone, Parser)]
pub struct RangeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Regions of interest
    #[arg(short = 'r', long = "region", value_name = "REGION", required = true, num_args = 1..)]
    pub regions: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct RankArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Year of interest
    #[arg(short = 'y', long = "year")]
    pub year: i32,

    /// Quarter of interest (quarterly input only)
    #[arg(long = "quarter", value_parser = clap::value_parser!(u8).range(1..=4))]
    pub quarter: Option<u8>,
}

#[derive(Debug, Clone, Parser)]
pub struct TrendArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Start year
    #[arg(long = "from", value_name = "YEAR")]
    pub from: i32,

    /// End year, after the start year
    #[arg(long = "to", value_name = "YEAR")]
    pub to: i32,
}

#[derive(Debug, Clone, Parser)]
pub struct WindowArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// First year of the window
    #[arg(long = "from", value_name = "YEAR")]
    pub from: i32,

    /// Last year of the window (inclusive)
    #[arg(long = "to", value_name = "YEAR")]
    pub to: i32,

    /// Regions of interest
    #[arg(short = 'r', long = "region", value_name = "REGION", required = true, num_args = 1..)]
    pub regions: Vec<String>,
}

impl Args {
    /// Get the log level string based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build and validate the pipeline configuration from the flags
    pub fn to_config(&self) -> Result<HpiConfig> {
        let mut config = HpiConfig::default().with_ranking_size(self.top);
        if self.chronological {
            config = config.with_year_order(YearOrder::Chronological);
        }
        if self.strict {
            config = config.with_strict();
        }

        config.validate()?;
        Ok(config)
    }
}
