//! Conversion of split data lines into typed observations

use super::field_parsers::{
    get_required_field, parse_required_f64, parse_required_i32, parse_required_u8,
};
use crate::Result;
use crate::app::models::{AnnualObservation, Observation, QuarterObservation};
use crate::constants::fields;

/// An observation type that can be built from the fields of one data line
///
/// Callers have already checked the field count and the unavailable marker.
pub trait RecordSchema: Observation + Sized {
    fn from_fields(fields: &[&str]) -> Result<Self>;
}

impl RecordSchema for QuarterObservation {
    fn from_fields(line: &[&str]) -> Result<Self> {
        let region = get_required_field(line, fields::REGION, "region")?;
        let year = parse_required_i32(line, fields::YEAR, "year")?;
        let quarter = parse_required_u8(line, fields::QUARTER, "quarter")?;
        let index = parse_required_f64(line, fields::INDEX, "index")?;

        QuarterObservation::new(region, year, quarter, index)
    }
}

impl RecordSchema for AnnualObservation {
    fn from_fields(line: &[&str]) -> Result<Self> {
        let region = get_required_field(line, fields::REGION, "region")?;
        let year = parse_required_i32(line, fields::YEAR, "year")?;
        // Third column carries no meaning in annual files
        let index = parse_required_f64(line, fields::INDEX, "index")?;

        AnnualObservation::new(region, year, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_from_fields() {
        let observation = QuarterObservation::from_fields(&["CA", "1999", "4", "180.5"]).unwrap();

        assert_eq!(observation.region, "CA");
        assert_eq!(observation.year, 1999);
        assert_eq!(observation.quarter, 4);
        assert_eq!(observation.index, 180.5);
    }

    #[test]
    fn test_annual_ignores_third_field() {
        let observation = AnnualObservation::from_fields(&["14623", "2010", "7.25", "312.8"]).unwrap();

        assert_eq!(observation.region, "14623");
        assert_eq!(observation.year, 2010);
        assert_eq!(observation.index, 312.8);
    }

    #[test]
    fn test_out_of_range_quarter_is_rejected() {
        assert!(QuarterObservation::from_fields(&["CA", "1999", "7", "180.5"]).is_err());
    }
}
