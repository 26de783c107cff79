use serde_json::{json, Map, Value};

use super::{adjust_brightness, merge_into, take_object};
use crate::types::ChartSpec;

const DEFAULT_BAR_COLOR: &str = "#5470c6";

fn grid_margins() -> Value {
    json!({ "left": "5%", "right": "5%", "bottom": "5%", "top": "15%" })
}

/// Widen the grid margins. In a multi-grid array each object element only
/// gets the side margins, since `top`/`bottom` place the grids relative to
/// each other. Non-object elements are left as they are.
fn widen_grid(root: &mut Map<String, Value>) {
    if let Some(Value::Array(grids)) = root.get_mut("grid") {
        for grid in grids.iter_mut().filter_map(Value::as_object_mut) {
            grid.insert("left".into(), json!("5%"));
            grid.insert("right".into(), json!("5%"));
        }
        return;
    }
    merge_into(root, "grid", grid_margins());
}

/// Gradient, border and drop shadow on every `bar` series.
///
/// Non-bar series are left alone. When at least one bar was restyled the
/// top-level grid margins are widened to leave room for the shadows.
pub fn apply_3d_bar(spec: &ChartSpec) -> ChartSpec {
    let mut value = spec.as_value().clone();
    let mut touched = false;

    if let Some(series) = value.get_mut("series").and_then(Value::as_array_mut) {
        for item in series.iter_mut() {
            let Some(series) = item.as_object_mut() else {
                continue;
            };
            if series.get("type").and_then(Value::as_str) != Some("bar") {
                continue;
            }
            touched = true;

            let base = series
                .get("itemStyle")
                .and_then(|style| style.get("color"))
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_BAR_COLOR)
                .to_string();
            let dark = adjust_brightness(&base, -20);

            series.insert(
                "itemStyle".into(),
                json!({
                    "color": {
                        "type": "linear",
                        "x": 0, "y": 0, "x2": 0, "y2": 1,
                        "colorStops": [
                            { "offset": 0, "color": base },
                            { "offset": 1, "color": dark }
                        ]
                    },
                    "borderColor": base,
                    "borderWidth": 1,
                    "shadowBlur": 10,
                    "shadowOffsetX": 3,
                    "shadowOffsetY": 3,
                    "shadowColor": "rgba(0, 0, 0, 0.3)"
                }),
            );

            let mut emphasis = take_object(series, "emphasis");
            merge_into(
                &mut emphasis,
                "itemStyle",
                json!({
                    "shadowBlur": 20,
                    "shadowOffsetX": 5,
                    "shadowOffsetY": 5,
                    "shadowColor": "rgba(0, 0, 0, 0.5)"
                }),
            );
            series.insert("emphasis".into(), Value::Object(emphasis));

            series.insert("barWidth".into(), json!("60%"));
            series.insert("barGap".into(), json!("20%"));
        }
    }

    if touched {
        if let Some(root) = value.as_object_mut() {
            widen_grid(root);
        }
    }

    ChartSpec::from_transformed(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(raw: Value) -> ChartSpec {
        ChartSpec::parse(raw).unwrap()
    }

    #[test]
    fn default_color_gradient() {
        let out = apply_3d_bar(&spec(json!({
            "series": [{ "type": "bar", "data": [100, 150, 200] }]
        })));
        let style = &out.as_value()["series"][0]["itemStyle"];
        let stops = &style["color"]["colorStops"];
        assert_eq!(style["color"]["type"], "linear");
        assert_eq!(style["color"]["y2"], 1);
        assert_eq!(stops[0]["color"], "#5470c6");
        assert_eq!(stops[1]["color"], "#213d93");
        assert_eq!(style["borderColor"], "#5470c6");
        assert_eq!(style["borderWidth"], 1);
        assert_eq!(style["shadowBlur"], 10);
        assert_eq!(style["shadowOffsetX"], 3);
        assert_eq!(style["shadowColor"], "rgba(0, 0, 0, 0.3)");
    }

    #[test]
    fn uses_series_color_and_replaces_item_style() {
        let out = apply_3d_bar(&spec(json!({
            "series": [{
                "type": "bar",
                "data": [1],
                "itemStyle": { "color": "#000000", "opacity": 0.5 }
            }]
        })));
        let style = &out.as_value()["series"][0]["itemStyle"];
        assert_eq!(style["color"]["colorStops"][0]["color"], "#000000");
        assert_eq!(style["color"]["colorStops"][1]["color"], "#000000");
        assert!(style.get("opacity").is_none());
    }

    #[test]
    fn non_hex_color_is_used_for_both_stops() {
        let out = apply_3d_bar(&spec(json!({
            "series": [{ "type": "bar", "data": [1], "itemStyle": { "color": "red" } }]
        })));
        let stops = &out.as_value()["series"][0]["itemStyle"]["color"]["colorStops"];
        assert_eq!(stops[0]["color"], "red");
        assert_eq!(stops[1]["color"], "red");
    }

    #[test]
    fn emphasis_and_layout() {
        let out = apply_3d_bar(&spec(json!({
            "series": [{ "type": "bar", "data": [1], "emphasis": { "focus": "series" } }]
        })));
        let s = &out.as_value()["series"][0];
        assert_eq!(s["emphasis"]["focus"], "series");
        assert_eq!(s["emphasis"]["itemStyle"]["shadowBlur"], 20);
        assert_eq!(s["emphasis"]["itemStyle"]["shadowOffsetY"], 5);
        assert_eq!(s["emphasis"]["itemStyle"]["shadowColor"], "rgba(0, 0, 0, 0.5)");
        assert_eq!(s["barWidth"], "60%");
        assert_eq!(s["barGap"], "20%");
    }

    #[test]
    fn widens_grid_margins() {
        let out = apply_3d_bar(&spec(json!({
            "grid": { "containLabel": true, "left": "3%" },
            "series": [{ "type": "bar", "data": [1] }]
        })));
        assert_eq!(
            out.as_value()["grid"],
            json!({ "containLabel": true, "left": "5%", "right": "5%", "bottom": "5%", "top": "15%" })
        );
    }

    #[test]
    fn multi_grid_layout_is_kept() {
        let out = apply_3d_bar(&spec(json!({
            "grid": [{ "top": "5%" }, { "top": "55%", "height": "35%" }, "bogus"],
            "xAxis": [{ "gridIndex": 0 }, { "gridIndex": 1 }],
            "yAxis": [{ "gridIndex": 0 }, { "gridIndex": 1 }],
            "series": [
                { "type": "bar", "data": [1, 2] },
                { "type": "bar", "xAxisIndex": 1, "yAxisIndex": 1, "data": [3, 4] }
            ]
        })));
        let grid = &out.as_value()["grid"];
        let grids = grid.as_array().expect("grid stays an array");
        assert_eq!(grids.len(), 3);
        assert_eq!(grids[0], json!({ "top": "5%", "left": "5%", "right": "5%" }));
        assert_eq!(
            grids[1],
            json!({ "top": "55%", "height": "35%", "left": "5%", "right": "5%" })
        );
        assert_eq!(grids[2], "bogus");
        assert_eq!(out.as_value()["series"][1]["xAxisIndex"], 1);
    }

    #[test]
    fn other_series_untouched() {
        let input = spec(json!({
            "series": [
                { "type": "line", "data": [1, 2], "itemStyle": { "color": "#ff0000" } },
                { "type": "bar", "data": [3, 4] }
            ]
        }));
        let out = apply_3d_bar(&input);
        assert_eq!(out.as_value()["series"][0], input.as_value()["series"][0]);
        assert!(out.as_value()["series"][1]["itemStyle"]["color"].is_object());
    }

    #[test]
    fn no_bar_series_is_a_no_op() {
        let input = spec(json!({ "series": [{ "type": "pie", "data": [1] }] }));
        assert_eq!(apply_3d_bar(&input), input);
    }

    #[test]
    fn keeps_type_and_data() {
        let input = spec(json!({ "series": [{ "type": "bar", "name": "x", "data": [5, 6] }] }));
        let out = apply_3d_bar(&input);
        let s = &out.as_value()["series"][0];
        assert_eq!(s["type"], "bar");
        assert_eq!(s["name"], "x");
        assert_eq!(s["data"], json!([5, 6]));
    }
}
