//! Ranking of regions by index level for a single quarter or year

use crate::app::models::{AnnualObservation, QuarterObservation, RankedEntry, SeriesStore};
use crate::app::services::ranker::{Ranking, rank_descending};
use tracing::debug;

/// Rank every quarterly observation for (`year`, `quarter`) by index
///
/// Each matching observation yields one entry, so a region with duplicate
/// rows for the period appears more than once.
pub fn rank_quarter(
    store: &SeriesStore<QuarterObservation>,
    year: i32,
    quarter: u8,
) -> Ranking {
    let entries: Vec<RankedEntry> = store
        .iter()
        .flat_map(|(_, observations)| observations.iter())
        .filter(|o| o.year == year && o.quarter == quarter)
        .map(|o| RankedEntry::new(o.region.clone(), o.index))
        .collect();

    debug!("{} entries for {} Q{}", entries.len(), year, quarter);
    rank_descending(entries)
}

/// Rank every annual observation for `year` by index
pub fn rank_year(store: &SeriesStore<AnnualObservation>, year: i32) -> Ranking {
    let entries: Vec<RankedEntry> = store
        .iter()
        .flat_map(|(_, observations)| observations.iter())
        .filter(|o| o.year == year)
        .map(|o| RankedEntry::new(o.region.clone(), o.index))
        .collect();

    debug!("{} entries for {}", entries.len(), year);
    rank_descending(entries)
}
