//! Text rendering of pipeline results for the terminal
//!
//! Every function returns a `String` so the layout can be tested without
//! capturing stdout. Only headings are coloured.

use crate::app::models::{AnnualObservation, Observation, Period};
use crate::app::services::range_finder::IndexRange;
use crate::app::services::ranker::{RankedRow, RankingView};
use colored::Colorize;
use std::fmt::Write;

/// Low and high observation of a region, laid out by period type
pub fn format_range<T: Observation>(region: &str, range: &IndexRange<'_, T>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Region: {}", region.bold());
    let _ = writeln!(out, "Low: {}", describe(range.low));
    let _ = writeln!(out, "High: {}", describe(range.high));
    out
}

fn describe<T: Observation>(observation: &T) -> String {
    match observation.period() {
        Period::Quarter { year, quarter } => format!(
            "year/quarter/index: {} / {} / {}",
            year,
            quarter,
            observation.index()
        ),
        Period::Year { year } => format!("year/index: {} / {}", year, observation.index()),
    }
}

/// Annual series of a region, one line per observation
pub fn format_series(region: &str, observations: &[AnnualObservation]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("Annualized Index Values for {}:", region).bold()
    );
    for observation in observations {
        let _ = writeln!(out, "  {}: {}", observation.year, observation.index);
    }
    out
}

/// Top and bottom halves of a ranking
pub fn format_ranking(view: &RankingView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.heading.bold().underline());

    if view.total == 0 {
        let _ = writeln!(out, "No regions to rank");
        return out;
    }

    let _ = writeln!(out, "{}", format!("The Top {}:", view.top.len()).green());
    write_rows(&mut out, &view.top);
    let _ = writeln!(out, "{}", format!("The Bottom {}:", view.bottom.len()).red());
    write_rows(&mut out, &view.bottom);
    out
}

fn write_rows(out: &mut String, rows: &[RankedRow]) {
    for row in rows {
        let _ = writeln!(
            out,
            "{} : ({}, {})",
            row.rank, row.entry.region, row.entry.value
        );
    }
}

/// Year-by-year table with gaps shown as `-`
pub fn format_year_grid(region: &str, grid: &[(i32, Option<f64>)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", region.bold());
    for (year, value) in grid {
        match value {
            Some(index) => {
                let _ = writeln!(out, "  {}: {}", year, index);
            }
            None => {
                let _ = writeln!(out, "  {}: -", year);
            }
        }
    }
    out
}
