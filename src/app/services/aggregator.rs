//! Quarterly to annual aggregation
//!
//! Each region's quarterly observations are grouped by year and the annual
//! index is the mean of whichever quarters are present. Missing quarters are
//! not interpolated.

use crate::app::models::{AnnualObservation, QuarterObservation, SeriesStore};
use crate::config::YearOrder;
use std::collections::HashMap;
use tracing::debug;

/// Annualize a quarterly store, keeping years in first-encounter order
pub fn annualize(store: &SeriesStore<QuarterObservation>) -> SeriesStore<AnnualObservation> {
    annualize_with_order(store, YearOrder::EncounterOrder)
}

/// Annualize a quarterly store with an explicit year order
///
/// Regions keep their order from `store`. A region with no observations
/// stays present with an empty sequence.
pub fn annualize_with_order(
    store: &SeriesStore<QuarterObservation>,
    order: YearOrder,
) -> SeriesStore<AnnualObservation> {
    let mut annual = SeriesStore::new();

    for (region, observations) in store.iter() {
        let series = annualize_region(region, observations, order);
        debug!(
            "Annualized {}: {} quarters into {} years",
            region,
            observations.len(),
            series.len()
        );
        annual.insert_series(region, series);
    }

    annual
}

fn annualize_region(
    region: &str,
    observations: &[QuarterObservation],
    order: YearOrder,
) -> Vec<AnnualObservation> {
    // (year, sum, count) in first-encounter order
    let mut groups: Vec<(i32, f64, usize)> = Vec::new();
    let mut slots: HashMap<i32, usize> = HashMap::new();

    for observation in observations {
        let slot = *slots.entry(observation.year).or_insert_with(|| {
            groups.push((observation.year, 0.0, 0));
            groups.len() - 1
        });
        groups[slot].1 += observation.index;
        groups[slot].2 += 1;
    }

    if order == YearOrder::Chronological {
        groups.sort_by_key(|(year, _, _)| *year);
    }

    groups
        .into_iter()
        .map(|(year, sum, count)| AnnualObservation {
            region: region.to_string(),
            year,
            index: sum / count as f64,
        })
        .collect()
}
