//! Data-point ceiling.

use serde_json::Value;

use crate::types::{ChartSpec, ValidationResult};

/// Ceiling used when the caller does not configure one.
pub const DEFAULT_MAX_DATA_POINTS: usize = 1000;

/// Sum of `data` lengths over all series.
///
/// Total over any JSON: a missing or malformed `series`, and series whose
/// `data` is not an array, contribute 0.
pub fn count_data_points(spec: &Value) -> usize {
    spec.get("series")
        .and_then(Value::as_array)
        .map(|series| {
            series
                .iter()
                .filter_map(|s| s.get("data").and_then(Value::as_array))
                .map(Vec::len)
                .sum()
        })
        .unwrap_or(0)
}

/// Reject a validated spec whose total point count exceeds `max_points`.
///
/// Taking a [`ChartSpec`] carries the precondition that `series` is a
/// well-formed, non-empty list.
pub fn check_bounds(spec: &ChartSpec, max_points: usize) -> ValidationResult {
    let total_points = count_data_points(spec.as_value());

    if total_points > max_points {
        return ValidationResult::from_errors(vec![format!(
            "Total data points ({total_points}) exceeds limit of {max_points}"
        )]);
    }

    ValidationResult::valid()
}
