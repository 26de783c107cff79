//! Chart category derivation.

use serde_json::Value;

use crate::json::is_truthy;
use crate::types::ChartType;

/// Derive the chart category from the first series.
///
/// Multi-series specs are assumed homogeneous. Returns `None` when there
/// is no first series or its `type` is outside line/bar/pie/scatter; the
/// caller treats that as "use a default", not as an error. A `line` series
/// with a truthy `areaStyle` is an area chart.
pub fn classify(spec: &Value) -> Option<ChartType> {
    let first = spec.get("series")?.as_array()?.first()?;

    match first.get("type")?.as_str()? {
        "line" if first.get("areaStyle").is_some_and(is_truthy) => Some(ChartType::Area),
        "line" => Some(ChartType::Line),
        "bar" => Some(ChartType::Bar),
        "pie" => Some(ChartType::Pie),
        "scatter" => Some(ChartType::Scatter),
        _ => None,
    }
}
