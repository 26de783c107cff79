use serde_json::{json, Value};

use super::merge_into;
use crate::types::ChartSpec;

const DEFAULT_BASE_RADIUS: f64 = 50.0;
const THICKNESS_RATIO: f64 = 0.15;

/// Read a radius component: a number, or a string such as `"60%"`.
fn radius_component(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}

/// Outer radius used to scale the shadow depth.
fn base_radius(radius: Option<&Value>) -> f64 {
    let outer = match radius {
        Some(Value::Array(pair)) if pair.len() == 2 => radius_component(&pair[1]),
        Some(other) => radius_component(other),
        None => None,
    };
    outer
        .filter(|r| r.is_finite())
        .unwrap_or(DEFAULT_BASE_RADIUS)
}

fn is_pair(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(pair)) if pair.len() == 2)
}

/// Border, shadow depth and outside labels on every `pie` series.
///
/// The shadow offset is scaled from the outer radius so larger pies get
/// a deeper edge. Non-pie series are left alone.
pub fn apply_3d_pie(spec: &ChartSpec) -> ChartSpec {
    let mut value = spec.as_value().clone();

    if let Some(series) = value.get_mut("series").and_then(Value::as_array_mut) {
        for item in series.iter_mut() {
            let Some(series) = item.as_object_mut() else {
                continue;
            };
            if series.get("type").and_then(Value::as_str) != Some("pie") {
                continue;
            }

            let thickness = base_radius(series.get("radius")) * THICKNESS_RATIO;

            if !is_pair(series.get("radius")) {
                series.insert("radius".into(), json!(["0%", "50%"]));
            }
            if series.get("center").is_none_or(Value::is_null) {
                series.insert("center".into(), json!(["50%", "45%"]));
            }

            merge_into(
                series,
                "itemStyle",
                json!({
                    "borderColor": "#fff",
                    "borderWidth": 2,
                    "shadowBlur": 10,
                    "shadowOffsetX": 0,
                    "shadowOffsetY": thickness,
                    "shadowColor": "rgba(0, 0, 0, 0.3)"
                }),
            );
            merge_into(
                series,
                "emphasis",
                json!({
                    "itemStyle": {
                        "shadowBlur": 20,
                        "shadowOffsetY": thickness * 1.5,
                        "shadowColor": "rgba(0, 0, 0, 0.5)"
                    },
                    "label": {
                        "show": true,
                        "fontSize": 16,
                        "fontWeight": "bold"
                    }
                }),
            );
            merge_into(series, "label", json!({ "show": true, "position": "outside" }));
            merge_into(
                series,
                "labelLine",
                json!({ "show": true, "length": 15, "length2": 10, "smooth": true }),
            );
        }
    }

    ChartSpec::from_transformed(value)
}
