//! Compound annual growth rate (CAGR) between two reference years
//!
//! A region takes part only when its annual series holds exactly one
//! observation for each reference year; anything else leaves it out of the
//! ranking without raising an error.

use crate::app::models::{AnnualObservation, RankedEntry, SeriesStore};
use crate::app::services::ranker::{Ranking, rank_descending};
use crate::{Error, Result};
use tracing::{debug, info};

/// CAGR as a percentage for an index moving from `index0` to `index1` over `periods` years
pub fn cagr(index0: f64, index1: f64, periods: u32) -> f64 {
    ((index1 / index0).powf(1.0 / periods as f64) - 1.0) * 100.0
}

/// Compute and rank the CAGR of every region between `year0` and `year1`
///
/// Fails with [`Error::InvalidRange`] unless `year0 < year1`, and with
/// [`Error::DivisionByZero`] when an included region has a zero index in
/// `year0`.
pub fn calculate_trends(
    store: &SeriesStore<AnnualObservation>,
    year0: i32,
    year1: i32,
) -> Result<Ranking> {
    if year1 <= year0 {
        return Err(Error::invalid_range(year0, year1));
    }
    let periods = u32::try_from(i64::from(year1) - i64::from(year0))
        .map_err(|_| Error::invalid_range(year0, year1))?;

    let mut rates = Vec::new();
    let mut excluded = 0usize;

    for (region, observations) in store.iter() {
        let (Some(start), Some(end)) = (
            single_index(observations, year0),
            single_index(observations, year1),
        ) else {
            excluded += 1;
            continue;
        };

        if start == 0.0 {
            return Err(Error::division_by_zero(region, year0));
        }

        let rate = cagr(start, end, periods);
        debug!("{}: {} -> {} gives {:.3}%", region, start, end, rate);
        rates.push(RankedEntry::new(region, rate));
    }

    info!(
        "Computed {}-{} CAGR for {} regions ({} excluded)",
        year0,
        year1,
        rates.len(),
        excluded
    );

    Ok(rank_descending(rates))
}

/// The index for `year` when exactly one observation carries it
fn single_index(observations: &[AnnualObservation], year: i32) -> Option<f64> {
    let mut matches = observations.iter().filter(|o| o.year == year);
    match (matches.next(), matches.next()) {
        (Some(observation), None) => Some(observation.index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(rows: &[(&str, i32, f64)]) -> SeriesStore<AnnualObservation> {
        let mut store = SeriesStore::new();
        for &(region, year, index) in rows {
            store.push(AnnualObservation::new(region, year, index).unwrap());
        }
        store
    }

    #[test]
    fn test_cagr_doubling_over_ten_years() {
        let rate = cagr(100.0, 200.0, 10);
        assert!((rate - 7.177).abs() < 1e-3);
    }

    #[test]
    fn test_regions_missing_a_year_are_excluded() {
        let store = store(&[
            ("A", 2010, 100.0),
            ("A", 2020, 200.0),
            ("B", 2010, 100.0),
            ("C", 2020, 300.0),
            ("D", 2010, 100.0),
            ("D", 2015, 120.0),
            ("D", 2020, 100.0),
        ]);

        let ranking = calculate_trends(&store, 2010, 2020).unwrap();
        let regions: Vec<&str> = ranking.entries().iter().map(|e| e.region.as_str()).collect();

        assert_eq!(regions, vec!["A", "D"]);
        assert!((ranking.entries()[0].value - 7.177).abs() < 1e-3);
        assert_eq!(ranking.entries()[1].value, 0.0);
    }

    #[test]
    fn test_duplicate_reference_year_excludes_region() {
        let store = store(&[
            ("A", 2010, 100.0),
            ("A", 2010, 110.0),
            ("A", 2020, 200.0),
        ]);

        let ranking = calculate_trends(&store, 2010, 2020).unwrap();
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_declining_regions_rank_last() {
        let store = store(&[
            ("DOWN", 2000, 200.0),
            ("DOWN", 2002, 50.0),
            ("UP", 2000, 100.0),
            ("UP", 2002, 121.0),
        ]);

        let ranking = calculate_trends(&store, 2000, 2002).unwrap();
        assert_eq!(ranking.entries()[0].region, "UP");
        assert!((ranking.entries()[0].value - 10.0).abs() < 1e-9);
        assert!((ranking.entries()[1].value + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_year_range() {
        let store = store(&[("A", 2010, 100.0)]);

        assert!(matches!(
            calculate_trends(&store, 2010, 2010),
            Err(Error::InvalidRange {
                year0: 2010,
                year1: 2010
            })
        ));
        assert!(matches!(
            calculate_trends(&store, 2020, 2010),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_extreme_year_span_does_not_overflow() {
        let store = store(&[("A", 2000, 100.0), ("A", 2001, 110.0)]);

        let ranking = calculate_trends(&store, i32::MIN, 2001).unwrap();
        assert!(ranking.is_empty());

        let ranking = calculate_trends(&store, i32::MIN, i32::MAX).unwrap();
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_zero_base_index_is_an_error() {
        let store = store(&[("Z", 2000, 0.0), ("Z", 2005, 10.0)]);

        assert!(matches!(
            calculate_trends(&store, 2000, 2005),
            Err(Error::DivisionByZero { year: 2000, .. })
        ));
    }
}
