//! End-to-end tests running HPI files through the whole pipeline
//!
//! Files are written to temporary locations so that reading, parsing,
//! annualizing, ranking and windowing are exercised together.

use hpi_processor::app::services::aggregator::annualize;
use hpi_processor::app::services::growth::calculate_trends;
use hpi_processor::app::services::period_ranking::{rank_quarter, rank_year};
use hpi_processor::app::services::range_finder::index_range;
use hpi_processor::app::services::record_parser::RecordParser;
use hpi_processor::app::services::window_filter::filter_years;
use hpi_processor::cli::args::{InputArgs, InputFormat};
use hpi_processor::cli::commands::{Dataset, load_dataset};
use hpi_processor::{HpiConfig, Resolution};
use std::io::Write;
use tempfile::Builder;

const STATE_FILE: &str = "state\tyr\tqtr\tindex_nsa
CA\t2010\t1\t100.0
CA\t2010\t2\t100.0
CA\t2010\t3\t.
CA\t2020\t1\t200.0
CA\t2020\t2\t200.0
TX\t2010\t1\t150.0
TX\t2010\t2\t150.0
TX\t2020\t1\t150.0
NV\t2010\t1\t120.0
NV\t2015\t1\t180.0
OH\t2010\t1\t.
";

const ZIP_FILE: &str = "five_zip year annual_change hpi
14623 2000 . 100.00
14623 2001 2.0 102.00
14623 2002 . .
02138 2000 . 150.00
02138 2001 10.0 165.00
";

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_state_file_through_growth_ranking() {
    let file = write_temp("_state.txt", STATE_FILE);
    let parser = RecordParser::new(HpiConfig::default());

    let result = parser.parse_quarterly_file(file.path()).unwrap();
    assert_eq!(result.stats.available, 9);
    assert_eq!(result.stats.unavailable, 2);
    assert!(!result.store.contains("OH"));

    let annual = annualize(&result.store);
    let regions: Vec<&str> = annual.regions().collect();
    assert_eq!(regions, vec!["CA", "TX", "NV"]);

    let ranking = calculate_trends(&annual, 2010, 2020).unwrap();
    let ranked: Vec<&str> = ranking.entries().iter().map(|e| e.region.as_str()).collect();
    assert_eq!(ranked, vec!["CA", "TX"]);
    assert!((ranking.entries()[0].value - 7.177).abs() < 1e-3);
    assert_eq!(ranking.entries()[1].value, 0.0);

    let view = ranking.view(10, "2010-2020 Compound Annual Growth Rate");
    assert_eq!(view.top.len(), 2);
    assert_eq!(view.bottom[0].rank, 1);
}

#[test]
fn test_state_file_ranges_and_period_rankings() {
    let file = write_temp("_state.txt", STATE_FILE);
    let parser = RecordParser::new(HpiConfig::default());
    let store = parser.parse_quarterly_file(file.path()).unwrap().store;

    let range = index_range(&store, "CA").unwrap();
    assert_eq!((range.low.year, range.low.quarter), (2010, 1));
    assert_eq!((range.high.year, range.high.quarter), (2020, 1));

    let quarter_ranking = rank_quarter(&store, 2010, 1);
    let regions: Vec<&str> = quarter_ranking
        .entries()
        .iter()
        .map(|e| e.region.as_str())
        .collect();
    assert_eq!(regions, vec!["TX", "NV", "CA"]);

    let year_ranking = rank_year(&annualize(&store), 2020);
    assert_eq!(year_ranking.entries()[0].region, "CA");
    assert_eq!(year_ranking.entries()[0].value, 200.0);
}

#[test]
fn test_zip_file_through_window_and_growth() {
    let file = write_temp("_ZIP5.txt", ZIP_FILE);
    let parser = RecordParser::new(HpiConfig::default());

    let result = parser.parse_annual_file(file.path()).unwrap();
    assert_eq!(result.stats.available, 4);
    assert_eq!(result.stats.unavailable, 1);

    let windowed = filter_years(&result.store, 2001, 2001).unwrap();
    assert_eq!(windowed.observation_count(), 2);

    let ranking = calculate_trends(&result.store, 2000, 2001).unwrap();
    assert_eq!(ranking.entries()[0].region, "02138");
    assert!((ranking.entries()[0].value - 10.0).abs() < 1e-9);
    assert!((ranking.entries()[1].value - 2.0).abs() < 1e-9);
}

#[test]
fn test_load_dataset_detects_layout_from_file_name() {
    let parser = RecordParser::new(HpiConfig::default());

    let state = write_temp("_state.txt", STATE_FILE);
    let input = InputArgs {
        file: state.path().to_path_buf(),
        format: InputFormat::Auto,
    };
    assert_eq!(input.resolution(), Resolution::Quarterly);
    match load_dataset(&input, &parser).unwrap() {
        Dataset::Quarterly(store) => assert_eq!(store.region_count(), 3),
        other => panic!("expected quarterly data, got {:?}", other),
    }

    let zip = write_temp("_ZIP5.txt", ZIP_FILE);
    let input = InputArgs {
        file: zip.path().to_path_buf(),
        format: InputFormat::Auto,
    };
    match load_dataset(&input, &parser).unwrap() {
        Dataset::Annual(store) => assert_eq!(store.region_count(), 2),
        other => panic!("expected annual data, got {:?}", other),
    }
}

#[test]
fn test_load_dataset_reports_missing_file() {
    let parser = RecordParser::new(HpiConfig::default());
    let input = InputArgs {
        file: "/nonexistent/HPI_AT_state.txt".into(),
        format: InputFormat::Auto,
    };

    let error = load_dataset(&input, &parser).unwrap_err();
    assert!(format!("{:#}", error).contains("Failed to load"));
}
