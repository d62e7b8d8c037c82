//! Data models for HPI processing
//!
//! This module contains the observation types for quarterly and annual house
//! price index records, the ordered per-region series store built from them,
//! and the ranked entries produced by the ranking services.

use crate::constants::QUARTER_RANGE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Resolution and Period Tags
// =============================================================================

/// Time resolution of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// State-level quarterly observations
    Quarterly,
    /// ZIP-level (or annualized) yearly observations
    Annual,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Quarterly => write!(f, "quarterly"),
            Resolution::Annual => write!(f, "annual"),
        }
    }
}

/// The period an observation covers
///
/// Presentation code branches on this tag rather than on the concrete
/// observation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Quarter { year: i32, quarter: u8 },
    Year { year: i32 },
}

impl Period {
    pub fn year(&self) -> i32 {
        match self {
            Period::Quarter { year, .. } | Period::Year { year } => *year,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Quarter { year, quarter } => write!(f, "{} Q{}", year, quarter),
            Period::Year { year } => write!(f, "{}", year),
        }
    }
}

// =============================================================================
// Observations
// =============================================================================

/// Behaviour shared by quarterly and annual observations
pub trait Observation: Clone + fmt::Debug {
    /// Resolution every observation of this type has
    const RESOLUTION: Resolution;

    fn region(&self) -> &str;
    fn year(&self) -> i32;
    fn index(&self) -> f64;
    fn period(&self) -> Period;
}

/// One region's price index for one quarter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterObservation {
    /// State (or other region) identifier
    pub region: String,

    /// Calendar year, always positive
    pub year: i32,

    /// Quarter number in 1..=4
    pub quarter: u8,

    /// House price index value, finite and non-negative
    pub index: f64,
}

impl QuarterObservation {
    /// Create a validated quarterly observation
    pub fn new(region: impl Into<String>, year: i32, quarter: u8, index: f64) -> Result<Self> {
        let observation = Self {
            region: region.into(),
            year,
            quarter,
            index,
        };

        observation.validate()?;
        Ok(observation)
    }

    /// Validate year, quarter and index ranges
    pub fn validate(&self) -> Result<()> {
        validate_common(&self.region, self.year, self.index)?;

        if !QUARTER_RANGE.contains(&self.quarter) {
            return Err(Error::data_validation(format!(
                "Invalid quarter {}: must be between 1 and 4",
                self.quarter
            )));
        }

        Ok(())
    }
}

impl Observation for QuarterObservation {
    const RESOLUTION: Resolution = Resolution::Quarterly;

    fn region(&self) -> &str {
        &self.region
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn index(&self) -> f64 {
        self.index
    }

    fn period(&self) -> Period {
        Period::Quarter {
            year: self.year,
            quarter: self.quarter,
        }
    }
}

/// One region's price index for one year, native or derived from quarters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualObservation {
    /// ZIP code, state, or other region identifier
    pub region: String,

    /// Calendar year, always positive
    pub year: i32,

    /// House price index value, finite and non-negative
    pub index: f64,
}

impl AnnualObservation {
    /// Create a validated annual observation
    pub fn new(region: impl Into<String>, year: i32, index: f64) -> Result<Self> {
        let observation = Self {
            region: region.into(),
            year,
            index,
        };

        observation.validate()?;
        Ok(observation)
    }

    /// Validate year and index ranges
    pub fn validate(&self) -> Result<()> {
        validate_common(&self.region, self.year, self.index)
    }
}

impl Observation for AnnualObservation {
    const RESOLUTION: Resolution = Resolution::Annual;

    fn region(&self) -> &str {
        &self.region
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn index(&self) -> f64 {
        self.index
    }

    fn period(&self) -> Period {
        Period::Year { year: self.year }
    }
}

fn validate_common(region: &str, year: i32, index: f64) -> Result<()> {
    if region.trim().is_empty() {
        return Err(Error::data_validation("Region identifier must not be empty"));
    }

    if year <= 0 {
        return Err(Error::data_validation(format!(
            "Invalid year {}: must be positive",
            year
        )));
    }

    if !index.is_finite() || index < 0.0 {
        return Err(Error::data_validation(format!(
            "Invalid index {}: must be a finite, non-negative number",
            index
        )));
    }

    Ok(())
}

// =============================================================================
// Series Store
// =============================================================================

/// Mapping from region to its ordered observation sequence
///
/// Regions iterate in first-seen order, which downstream ranking relies on
/// for deterministic tie-breaking. Duplicate periods within a region are
/// kept as separate observations; use [`SeriesStore::duplicate_periods`]
/// to detect them.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStore<T> {
    series: Vec<(String, Vec<T>)>,
    region_index: HashMap<String, usize>,
}

impl<T> Default for SeriesStore<T> {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            region_index: HashMap::new(),
        }
    }
}

impl<T: Observation> SeriesStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolution of every observation in this store
    pub fn resolution(&self) -> Resolution {
        T::RESOLUTION
    }

    /// Append an observation to its region's sequence, creating the region if new
    pub fn push(&mut self, observation: T) {
        let slot = self.slot_for(observation.region());
        self.series[slot].1.push(observation);
    }

    /// Append a whole sequence for a region
    ///
    /// The region is registered even when `observations` is empty.
    pub fn insert_series(&mut self, region: impl Into<String>, observations: Vec<T>) {
        let region = region.into();
        let slot = self.slot_for(&region);
        self.series[slot].1.extend(observations);
    }

    fn slot_for(&mut self, region: &str) -> usize {
        if let Some(&slot) = self.region_index.get(region) {
            return slot;
        }
        let slot = self.series.len();
        self.series.push((region.to_string(), Vec::new()));
        self.region_index.insert(region.to_string(), slot);
        slot
    }

    /// Observations for a region, in insertion order
    pub fn get(&self, region: &str) -> Option<&[T]> {
        self.region_index
            .get(region)
            .map(|&slot| self.series[slot].1.as_slice())
    }

    pub fn contains(&self, region: &str) -> bool {
        self.region_index.contains_key(region)
    }

    /// Region keys in first-seen order
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|(region, _)| region.as_str())
    }

    /// (region, observations) pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.series
            .iter()
            .map(|(region, observations)| (region.as_str(), observations.as_slice()))
    }

    pub fn region_count(&self) -> usize {
        self.series.len()
    }

    /// Total number of observations across all regions
    pub fn observation_count(&self) -> usize {
        self.series.iter().map(|(_, observations)| observations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Periods that occur more than once in a region's sequence, in first-seen order
    pub fn duplicate_periods(&self, region: &str) -> Vec<Period> {
        let Some(observations) = self.get(region) else {
            return Vec::new();
        };

        let mut counts: HashMap<Period, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for observation in observations {
            let period = observation.period();
            let count = counts.entry(period).or_default();
            *count += 1;
            if *count == 2 {
                duplicates.push(period);
            }
        }
        duplicates
    }
}

// =============================================================================
// Ranked Entries
// =============================================================================

/// A (region, value) pair produced by ranking and growth calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub region: String,
    pub value: f64,
}

impl RankedEntry {
    pub fn new(region: impl Into<String>, value: f64) -> Self {
        Self {
            region: region.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_observation_validation() {
        assert!(QuarterObservation::new("IL", 2010, 1, 150.0).is_ok());
        assert!(QuarterObservation::new("IL", 2010, 0, 150.0).is_err());
        assert!(QuarterObservation::new("IL", 2010, 5, 150.0).is_err());
        assert!(QuarterObservation::new("IL", 0, 1, 150.0).is_err());
        assert!(QuarterObservation::new("IL", 2010, 1, -1.0).is_err());
        assert!(QuarterObservation::new("IL", 2010, 1, f64::NAN).is_err());
        assert!(QuarterObservation::new("", 2010, 1, 150.0).is_err());
    }

    #[test]
    fn test_annual_observation_validation() {
        assert!(AnnualObservation::new("14623", 1995, 0.0).is_ok());
        assert!(AnnualObservation::new("14623", -3, 100.0).is_err());
        assert!(AnnualObservation::new("14623", 1995, f64::INFINITY).is_err());
    }

    #[test]
    fn test_period_tags() {
        let quarter = QuarterObservation::new("NY", 2001, 3, 200.0).unwrap();
        let annual = AnnualObservation::new("NY", 2001, 200.0).unwrap();

        assert_eq!(
            quarter.period(),
            Period::Quarter {
                year: 2001,
                quarter: 3
            }
        );
        assert_eq!(annual.period(), Period::Year { year: 2001 });
        assert_eq!(quarter.period().to_string(), "2001 Q3");
        assert_eq!(annual.period().to_string(), "2001");
        assert_eq!(quarter.period().year(), 2001);
    }

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::Quarterly.to_string(), "quarterly");
        assert_eq!(Resolution::Annual.to_string(), "annual");
    }

    #[test]
    fn test_store_preserves_first_seen_order() {
        let mut store = SeriesStore::new();
        store.push(AnnualObservation::new("WY", 2000, 1.0).unwrap());
        store.push(AnnualObservation::new("AK", 2000, 2.0).unwrap());
        store.push(AnnualObservation::new("WY", 2001, 3.0).unwrap());

        let regions: Vec<&str> = store.regions().collect();
        assert_eq!(regions, vec!["WY", "AK"]);
        assert_eq!(store.get("WY").unwrap().len(), 2);
        assert_eq!(store.region_count(), 2);
        assert_eq!(store.observation_count(), 3);
        assert_eq!(store.resolution(), Resolution::Annual);
        assert!(store.get("CA").is_none());
    }

    #[test]
    fn test_store_keeps_and_reports_duplicates() {
        let mut store = SeriesStore::new();
        store.push(QuarterObservation::new("OH", 2000, 1, 100.0).unwrap());
        store.push(QuarterObservation::new("OH", 2000, 2, 101.0).unwrap());
        store.push(QuarterObservation::new("OH", 2000, 1, 102.0).unwrap());
        store.push(QuarterObservation::new("OH", 2000, 1, 103.0).unwrap());

        assert_eq!(store.get("OH").unwrap().len(), 4);
        assert_eq!(
            store.duplicate_periods("OH"),
            vec![Period::Quarter {
                year: 2000,
                quarter: 1
            }]
        );
        assert!(store.duplicate_periods("missing").is_empty());
    }

    #[test]
    fn test_insert_series_registers_empty_region() {
        let mut store: SeriesStore<AnnualObservation> = SeriesStore::new();
        store.insert_series("EMPTY", Vec::new());

        assert!(store.contains("EMPTY"));
        assert_eq!(store.get("EMPTY").unwrap().len(), 0);
        assert!(!store.is_empty());
    }
}
