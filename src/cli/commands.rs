//! Command implementations for the HPI processor CLI
//!
//! Each subcommand loads the input file, runs the relevant pipeline stages
//! and renders a text report, which `run` prints to stdout. Diagnostics go to stderr through
//! `tracing`.

use crate::app::models::{AnnualObservation, QuarterObservation, Resolution, SeriesStore};
use crate::app::services::aggregator::annualize_with_order;
use crate::app::services::growth::calculate_trends;
use crate::app::services::period_ranking::{rank_quarter, rank_year};
use crate::app::services::range_finder::index_range;
use crate::app::services::record_parser::{ParseStats, RecordParser};
use crate::app::services::window_filter::{filter_years, year_grid};
use crate::cli::args::{Args, Commands, InputArgs, RangeArgs, RankArgs, TrendArgs, WindowArgs};
use crate::cli::report;
use crate::config::HpiConfig;
use anyhow::{Context, bail};
use tracing::{debug, info, warn};

/// A parsed input file in its native resolution
#[derive(Debug, Clone)]
pub enum Dataset {
    Quarterly(SeriesStore<QuarterObservation>),
    Annual(SeriesStore<AnnualObservation>),
}

impl Dataset {
    /// Annual view of the data, averaging quarters when needed
    pub fn annual(&self, config: &HpiConfig) -> SeriesStore<AnnualObservation> {
        match self {
            Dataset::Quarterly(store) => annualize_with_order(store, config.year_order),
            Dataset::Annual(store) => store.clone(),
        }
    }
}

/// Main command runner
pub fn run(args: Args) -> anyhow::Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config()?;
    let parser = RecordParser::new(config.clone());

    let output = match &args.command {
        Commands::Range(range_args) => range_report(range_args, &parser)?,
        Commands::Rank(rank_args) => rank_report(rank_args, &parser)?,
        Commands::Trend(trend_args) => trend_report(trend_args, &parser)?,
        Commands::Window(window_args) => window_report(window_args, &parser)?,
    };

    print!("{}", output);
    Ok(())
}

/// Set up structured logging on stderr
///
/// At the default level only parse diagnostics and warnings come through, so
/// those lines carry no timestamp. Verbose runs add uptime to time the stages,
/// and `-vv` or more also names the emitting module.
fn setup_logging(args: &Args) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hpi_processor={}", log_level)));

    let layout = LogLayout::for_args(args);
    let layer = fmt::layer()
        .with_target(layout.target)
        .with_level(true)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);
    let initialised = if layout.uptime {
        registry.with(layer.with_timer(fmt::time::uptime())).try_init()
    } else {
        registry.with(layer.without_time().compact()).try_init()
    };
    initialised.context("Failed to initialise logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Decorations on each stderr log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogLayout {
    uptime: bool,
    target: bool,
}

impl LogLayout {
    fn for_args(args: &Args) -> Self {
        let verbose = if args.quiet { 0 } else { args.verbose };
        Self {
            uptime: verbose >= 1,
            target: verbose >= 2,
        }
    }
}

/// Parse the input file in the layout the arguments select
pub fn load_dataset(input: &InputArgs, parser: &RecordParser) -> anyhow::Result<Dataset> {
    let path = input.file.as_path();
    let resolution = input.resolution();
    info!("Reading {} as {} data", path.display(), resolution);

    let dataset = match resolution {
        Resolution::Quarterly => {
            let result = parser
                .parse_quarterly_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            log_stats(&result.stats);
            Dataset::Quarterly(result.store)
        }
        Resolution::Annual => {
            let result = parser
                .parse_annual_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            log_stats(&result.stats);
            Dataset::Annual(result.store)
        }
    };

    Ok(dataset)
}

fn log_stats(stats: &ParseStats) {
    if stats.malformed > 0 {
        warn!(
            "{} malformed lines skipped (first: {})",
            stats.malformed,
            stats.errors.first().map(String::as_str).unwrap_or("")
        );
    }
    info!(
        "{:.1}% of {} rows available",
        stats.availability_rate(),
        stats.total_records
    );
}

/// Index ranges and annual series for each requested region
///
/// Regions missing from the input are reported as a warning and skipped.
pub fn range_report(args: &RangeArgs, parser: &RecordParser) -> anyhow::Result<String> {
    let dataset = load_dataset(&args.input, parser)?;
    let annual = dataset.annual(parser.config());
    let mut output = String::new();

    for region in &args.regions {
        output.push_str(&"=".repeat(30));
        output.push('\n');

        if let Dataset::Quarterly(store) = &dataset {
            match index_range(store, region) {
                Ok(range) => output.push_str(&report::format_range(region, &range)),
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            }
        }

        match index_range(&annual, region) {
            Ok(range) => output.push_str(&report::format_range(region, &range)),
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        }

        if let Some(observations) = annual.get(region) {
            output.push_str(&report::format_series(region, observations));
        }
    }

    Ok(output)
}

/// Ranking of every region for one quarter, or for one year
pub fn rank_report(args: &RankArgs, parser: &RecordParser) -> anyhow::Result<String> {
    let dataset = load_dataset(&args.input, parser)?;
    let config = parser.config();

    let (ranking, heading) = match (&dataset, args.quarter) {
        (Dataset::Quarterly(store), Some(quarter)) => (
            rank_quarter(store, args.year, quarter),
            format!("{} Q{} Ranking", args.year, quarter),
        ),
        (Dataset::Annual(_), Some(_)) => {
            bail!("A quarter can only be ranked from quarterly (state) input")
        }
        (_, None) => (
            rank_year(&dataset.annual(config), args.year),
            format!("{} Annual Ranking", args.year),
        ),
    };

    Ok(report::format_ranking(
        &ranking.view(config.ranking_size, heading),
    ))
}

/// CAGR ranking between the two reference years
pub fn trend_report(args: &TrendArgs, parser: &RecordParser) -> anyhow::Result<String> {
    let dataset = load_dataset(&args.input, parser)?;
    let config = parser.config();

    let ranking = calculate_trends(&dataset.annual(config), args.from, args.to)
        .with_context(|| format!("Failed to compute growth for {}-{}", args.from, args.to))?;

    let heading = format!("{}-{} Compound Annual Growth Rate", args.from, args.to);
    Ok(report::format_ranking(
        &ranking.view(config.ranking_size, heading),
    ))
}

/// Year grids of the requested regions inside the window
pub fn window_report(args: &WindowArgs, parser: &RecordParser) -> anyhow::Result<String> {
    let dataset = load_dataset(&args.input, parser)?;
    let windowed = filter_years(&dataset.annual(parser.config()), args.from, args.to)?;
    let mut output = String::new();

    for region in &args.regions {
        match windowed.get(region) {
            Some(observations) => {
                let grid = year_grid(observations, args.from, args.to);
                output.push_str(&report::format_year_grid(region, &grid));
            }
            None => {
                warn!(
                    "Region {} has no observations between {} and {}",
                    region, args.from, args.to
                );
                output.push_str(&format!(
                    "{}: no observations between {} and {}\n",
                    region, args.from, args.to
                ));
            }
        }
    }

    Ok(output)
}
