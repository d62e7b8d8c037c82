//! Lowest and highest index lookup for a region

use crate::app::models::{Observation, SeriesStore};
use crate::{Error, Result};

/// The observations holding a region's lowest and highest index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRange<'a, T> {
    pub low: &'a T,
    pub high: &'a T,
}

/// Find the minimum and maximum observation by index for `region`
///
/// Scans in sequence order and only replaces the running extreme on a strict
/// improvement, so among equal values the earliest observation wins.
pub fn index_range<'a, T: Observation>(
    store: &'a SeriesStore<T>,
    region: &str,
) -> Result<IndexRange<'a, T>> {
    let observations = store
        .get(region)
        .ok_or_else(|| Error::unknown_region(region))?;

    let (first, rest) = observations
        .split_first()
        .ok_or_else(|| Error::empty_region(region))?;

    let mut low = first;
    let mut high = first;
    for observation in rest {
        if observation.index() < low.index() {
            low = observation;
        }
        if observation.index() > high.index() {
            high = observation;
        }
    }

    Ok(IndexRange { low, high })
}
