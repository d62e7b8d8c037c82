//! Year-window restriction of annual series
//!
//! Also builds the gap-aware year grid that charting front ends consume.

use crate::app::models::{AnnualObservation, SeriesStore};
use crate::{Error, Result};
use tracing::debug;

/// Keep only observations with `year0 <= year <= year1`
///
/// Regions with nothing in the window are left out of the result rather
/// than kept with an empty sequence. Fails with [`Error::InvalidRange`] when
/// `year0 > year1`.
pub fn filter_years(
    store: &SeriesStore<AnnualObservation>,
    year0: i32,
    year1: i32,
) -> Result<SeriesStore<AnnualObservation>> {
    if year0 > year1 {
        return Err(Error::invalid_range(year0, year1));
    }

    let mut filtered = SeriesStore::new();
    for observation in store
        .iter()
        .flat_map(|(_, observations)| observations.iter())
        .filter(|o| (year0..=year1).contains(&o.year))
    {
        filtered.push(observation.clone());
    }

    debug!(
        "Window {}-{} kept {} of {} regions",
        year0,
        year1,
        filtered.region_count(),
        store.region_count()
    );

    Ok(filtered)
}

/// One slot per year of the observed span, clipped to `first..=last`
///
/// The grid starts at the earliest observed year and ends at the latest one,
/// so open-ended bounds never produce empty padding. A slot holds the summed
/// index of the observations for that year (a single value unless the series
/// has duplicates), or `None` for a gap. No observations inside the bounds
/// gives an empty grid.
pub fn year_grid(
    observations: &[AnnualObservation],
    first: i32,
    last: i32,
) -> Vec<(i32, Option<f64>)> {
    let mut observed = observations
        .iter()
        .map(|o| o.year)
        .filter(|year| (first..=last).contains(year));
    let Some(start) = observed.next() else {
        return Vec::new();
    };
    let (start, end) = observed.fold((start, start), |(low, high), year| {
        (low.min(year), high.max(year))
    });

    (start..=end)
        .map(|year| {
            let value = observations
                .iter()
                .filter(|o| o.year == year)
                .map(|o| o.index)
                .reduce(|total, index| total + index);
            (year, value)
        })
        .collect()
}
