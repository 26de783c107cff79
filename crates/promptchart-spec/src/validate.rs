//! Structural validation of model-produced chart specifications.

use serde_json::Value;

use crate::json::describe;
use crate::types::{ChartType, ValidationResult};

/// Check an arbitrary JSON value against the chart specification shape.
///
/// Never fails: every problem becomes an entry in the returned error list.
/// Per-series problems are all reported, in index order, in a single pass.
pub fn validate(raw: &Value) -> ValidationResult {
    let Some(config) = raw.as_object() else {
        return ValidationResult::from_errors(vec!["Configuration must be an object".into()]);
    };

    let mut errors: Vec<String> = Vec::new();

    match config.get("series").and_then(Value::as_array) {
        None => errors.push("Configuration must contain a series array".into()),
        Some(series) if series.is_empty() => errors.push("Series array cannot be empty".into()),
        Some(series) => {
            for (index, item) in series.iter().enumerate() {
                validate_series(&mut errors, index, item);
            }
        }
    }

    ValidationResult::from_errors(errors)
}

fn validate_series(errors: &mut Vec<String>, index: usize, item: &Value) {
    let Some(series) = item.as_object() else {
        errors.push(format!("Series at index {index} must be an object"));
        return;
    };

    let series_type = series.get("type");
    let known = series_type
        .and_then(Value::as_str)
        .and_then(ChartType::from_series_type)
        .is_some();
    if !known {
        errors.push(format!(
            "Series at index {index} has invalid type: {}",
            describe(series_type)
        ));
    }

    match series.get("data").and_then(Value::as_array) {
        None => errors.push(format!("Series at index {index} must contain a data array")),
        Some(data) if data.is_empty() => {
            errors.push(format!("Series at index {index} has empty data array"))
        }
        Some(_) => {}
    }
}
