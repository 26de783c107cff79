//! Numeric summary of a finished chart specification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::json::is_truthy;

const DEFAULT_SERIES_NAME: &str = "Series";

/// One series flattened to plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub name: String,
    pub values: Vec<f64>,
    /// `itemStyle.color` as found, which may be a gradient object after
    /// the 3D bar transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    pub series: Vec<DataSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub data_type: String,
    pub total_points: usize,
    pub is_valid: bool,
}

fn series_name(series: &Value) -> String {
    match series.get("name") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(other @ Value::Number(_)) if is_truthy(other) => other.to_string(),
        _ => DEFAULT_SERIES_NAME.to_string(),
    }
}

fn point_value(point: &Value) -> f64 {
    match point {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::Object(fields) => fields.get("value").and_then(Value::as_f64).unwrap_or(0.0),
        _ => 0.0,
    }
}

fn label_text(label: &Value) -> String {
    match label {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Summarize every series. Returns `None` only when `series` is missing or
/// not an array.
pub fn extract_metadata(spec: &Value) -> Option<ExtractedData> {
    let series: Vec<DataSeries> = spec
        .get("series")?
        .as_array()?
        .iter()
        .map(|s| DataSeries {
            name: series_name(s),
            values: s
                .get("data")
                .and_then(Value::as_array)
                .map(|data| data.iter().map(point_value).collect())
                .unwrap_or_default(),
            color: s
                .get("itemStyle")
                .and_then(|style| style.get("color"))
                .filter(|c| !c.is_null())
                .cloned(),
        })
        .collect();

    let total_points = series.iter().map(|s| s.values.len()).sum();
    let labels = spec
        .get("xAxis")
        .and_then(|axis| axis.get("data"))
        .and_then(Value::as_array)
        .map(|data| data.iter().map(label_text).collect());

    Some(ExtractedData {
        series,
        labels,
        data_type: "numeric".to_string(),
        total_points,
        is_valid: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summarizes_bar_chart() {
        let data = extract_metadata(&json!({
            "xAxis": { "type": "category", "data": ["1月", "2月", "3月"] },
            "series": [{ "name": "销量", "type": "bar", "data": [100, 150, 200] }]
        }))
        .unwrap();
        assert_eq!(data.total_points, 3);
        assert_eq!(data.series.len(), 1);
        assert_eq!(data.series[0].name, "销量");
        assert_eq!(data.series[0].values, vec![100.0, 150.0, 200.0]);
        assert_eq!(
            data.labels,
            Some(vec!["1月".to_string(), "2月".to_string(), "3月".to_string()])
        );
        assert!(data.is_valid);
        assert_eq!(data.data_type, "numeric");
    }

    #[test]
    fn pie_objects_and_odd_points() {
        let data = extract_metadata(&json!({
            "series": [{
                "type": "pie",
                "data": [{ "value": 335, "name": "A" }, { "name": "B" }, "x", null, 2.5]
            }]
        }))
        .unwrap();
        assert_eq!(data.series[0].values, vec![335.0, 0.0, 0.0, 0.0, 2.5]);
        assert_eq!(data.series[0].name, "Series");
        assert!(data.labels.is_none());
    }

    #[test]
    fn name_fallbacks() {
        let data = extract_metadata(&json!({
            "series": [
                { "name": "", "data": [1] },
                { "name": 7, "data": [1] },
                { "name": null, "data": [1] },
                { "data": [1] }
            ]
        }))
        .unwrap();
        let names: Vec<_> = data.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Series", "7", "Series", "Series"]);
    }

    #[test]
    fn carries_item_color() {
        let data = extract_metadata(&json!({
            "series": [
                { "type": "bar", "data": [1], "itemStyle": { "color": "#ff0000" } },
                { "type": "bar", "data": [1] }
            ]
        }))
        .unwrap();
        assert_eq!(data.series[0].color, Some(json!("#ff0000")));
        assert_eq!(data.series[1].color, None);
    }

    #[test]
    fn missing_series_is_none() {
        assert!(extract_metadata(&json!({})).is_none());
        assert!(extract_metadata(&json!({ "series": 1 })).is_none());
        assert!(extract_metadata(&json!(null)).is_none());
    }

    #[test]
    fn non_object_series_contributes_nothing() {
        let data = extract_metadata(&json!({ "series": [1, { "data": [1, 2] }] })).unwrap();
        assert_eq!(data.series[0].values, Vec::<f64>::new());
        assert_eq!(data.total_points, 2);
    }

    #[test]
    fn serializes_camel_case() {
        let data = extract_metadata(&json!({ "series": [{ "type": "line", "data": [1] }] })).unwrap();
        let wire = serde_json::to_value(&data).unwrap();
        assert_eq!(wire["dataType"], "numeric");
        assert_eq!(wire["totalPoints"], 1);
        assert_eq!(wire["isValid"], true);
        assert!(wire.get("labels").is_none());
        assert!(wire["series"][0].get("color").is_none());
    }
}
