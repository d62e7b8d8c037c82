//! Descending ranking of (region, value) pairs with top and bottom views
//!
//! Sorting is stable: entries with equal values keep the order they had in
//! the input, which in turn follows the first-seen region order of the
//! series store they came from.

use crate::app::models::RankedEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A ranked entry with its 1-based position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub rank: usize,
    pub entry: RankedEntry,
}

/// Top-N and bottom-N slices of a ranking, ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingView {
    pub heading: String,
    /// Number of entries in the full ranking
    pub total: usize,
    pub top: Vec<RankedRow>,
    pub bottom: Vec<RankedRow>,
}

/// Entries sorted by value, highest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    /// Sort `entries` descending by value with a stable sort
    pub fn new(mut entries: Vec<RankedEntry>) -> Self {
        entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankedEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First `n` entries, ranked from 1
    pub fn top(&self, n: usize) -> Vec<RankedRow> {
        self.entries
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, entry)| RankedRow {
                rank: i + 1,
                entry: entry.clone(),
            })
            .collect()
    }

    /// Last `n` entries, ranked from `max(1, len - n + 1)`
    pub fn bottom(&self, n: usize) -> Vec<RankedRow> {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..]
            .iter()
            .enumerate()
            .map(|(i, entry)| RankedRow {
                rank: start + i + 1,
                entry: entry.clone(),
            })
            .collect()
    }

    /// Top and bottom `n` with a heading; the two halves overlap for short rankings
    pub fn view(&self, n: usize, heading: impl Into<String>) -> RankingView {
        RankingView {
            heading: heading.into(),
            total: self.entries.len(),
            top: self.top(n),
            bottom: self.bottom(n),
        }
    }
}

/// Rank (region, value) pairs highest first
pub fn rank_descending(entries: Vec<RankedEntry>) -> Ranking {
    Ranking::new(entries)
}
