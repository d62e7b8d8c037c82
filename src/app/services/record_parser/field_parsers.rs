//! Field parsing utilities for HPI data lines
//!
//! This module provides helper functions for pulling typed values out of a
//! line that has already been split on whitespace.

use crate::{Error, Result};

/// Get a required field value by position
pub fn get_required_field<'a>(
    fields: &[&'a str],
    position: usize,
    field_name: &str,
) -> Result<&'a str> {
    fields.get(position).copied().ok_or_else(|| {
        Error::data_validation(format!(
            "No value for required field '{}' (position {})",
            field_name, position
        ))
    })
}

/// Parse a required i32 field
pub fn parse_required_i32(fields: &[&str], position: usize, field_name: &str) -> Result<i32> {
    let value_str = get_required_field(fields, position, field_name)?;

    value_str.parse::<i32>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid integer format for {}: '{}' ({})",
            field_name, value_str, e
        ))
    })
}

/// Parse a required u8 field
pub fn parse_required_u8(fields: &[&str], position: usize, field_name: &str) -> Result<u8> {
    let value_str = get_required_field(fields, position, field_name)?;

    value_str.parse::<u8>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid integer format for {}: '{}' ({})",
            field_name, value_str, e
        ))
    })
}

/// Parse a required f64 field
pub fn parse_required_f64(fields: &[&str], position: usize, field_name: &str) -> Result<f64> {
    let value_str = get_required_field(fields, position, field_name)?;

    value_str.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid number format for {}: '{}' ({})",
            field_name, value_str, e
        ))
    })
}

/// Check whether the field at `position` holds the unavailable marker
pub fn is_unavailable(fields: &[&str], position: usize, marker: &str) -> bool {
    fields.get(position).is_some_and(|value| *value == marker)
}
