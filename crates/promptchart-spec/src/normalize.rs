//! Structural defaults for renderer-ready specs.

use serde_json::{json, Value};

use crate::json::is_truthy;
use crate::types::ChartSpec;

fn default_grid() -> Value {
    json!({
        "left": "3%",
        "right": "4%",
        "bottom": "3%",
        "containLabel": true
    })
}

fn default_tooltip() -> Value {
    json!({
        "trigger": "axis",
        "axisPointer": { "type": "shadow" }
    })
}

/// Fill `animation`, `grid` and `tooltip` defaults.
///
/// Returns a new spec; the input is not modified. Caller-supplied `grid`
/// and `tooltip` sections are kept verbatim, and `animation` is `true`
/// unless explicitly `false`. Only top-level keys are touched, so
/// `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(spec: &ChartSpec) -> ChartSpec {
    let mut value = spec.as_value().clone();

    if let Some(root) = value.as_object_mut() {
        let animation = !matches!(root.get("animation"), Some(Value::Bool(false)));
        root.insert("animation".into(), Value::Bool(animation));

        if !root.get("grid").is_some_and(is_truthy) {
            root.insert("grid".into(), default_grid());
        }

        if !root.get("tooltip").is_some_and(is_truthy) {
            root.insert("tooltip".into(), default_tooltip());
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

    fn minimal() -> ChartSpec {
        spec(json!({ "series": [{ "type": "line", "data": [1, 2, 3] }] }))
    }

    #[test]
    fn fills_defaults_when_absent() {
        let out = normalize(&minimal());
        let v = out.as_value();
        assert_eq!(v["animation"], true);
        assert_eq!(v["grid"], default_grid());
        assert_eq!(v["tooltip"]["trigger"], "axis");
        assert_eq!(v["tooltip"]["axisPointer"]["type"], "shadow");
    }

    #[test]
    fn keeps_caller_sections_verbatim() {
        let input = spec(json!({
            "grid": { "top": "20%" },
            "tooltip": { "trigger": "item" },
            "series": [{ "type": "pie", "data": [{ "value": 1, "name": "a" }] }]
        }));
        let out = normalize(&input);
        assert_eq!(out.as_value()["grid"], json!({ "top": "20%" }));
        assert_eq!(out.as_value()["tooltip"], json!({ "trigger": "item" }));
    }

    #[test]
    fn animation_tri_state() {
        let off = spec(json!({ "animation": false, "series": [{ "type": "bar", "data": [1] }] }));
        assert_eq!(normalize(&off).as_value()["animation"], false);

        for other in [json!(true), json!("false"), json!(0), json!(null)] {
            let s = spec(json!({ "animation": other, "series": [{ "type": "bar", "data": [1] }] }));
            assert_eq!(normalize(&s).as_value()["animation"], true);
        }
    }

    #[test]
    fn null_sections_get_defaults() {
        let s = spec(json!({
            "grid": null,
            "tooltip": null,
            "series": [{ "type": "bar", "data": [1] }]
        }));
        let out = normalize(&s);
        assert_eq!(out.as_value()["grid"], default_grid());
        assert_eq!(out.as_value()["tooltip"], default_tooltip());
    }

    #[test]
    fn copies_other_fields_and_leaves_series_alone() {
        let input = spec(json!({
            "title": { "text": "Sales" },
            "xAxis": { "type": "category", "data": ["a", "b"] },
            "series": [{ "type": "bar", "data": [1, 2], "itemStyle": { "color": "#5470c6" } }]
        }));
        let out = normalize(&input);
        assert_eq!(out.as_value()["title"], input.as_value()["title"]);
        assert_eq!(out.as_value()["xAxis"], input.as_value()["xAxis"]);
        assert_eq!(out.as_value()["series"], input.as_value()["series"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = minimal();
        let before = input.clone();
        let _ = normalize(&input);
        assert_eq!(input, before);
        assert!(input.as_value().get("grid").is_none());
    }

    #[test]
    fn idempotent() {
        let samples = [
            minimal(),
            spec(json!({ "animation": false, "series": [{ "type": "bar", "data": [1] }] })),
            spec(json!({ "grid": { "left": 0 }, "series": [{ "type": "pie", "data": [1] }] })),
            spec(json!({ "tooltip": "", "series": [{ "type": "scatter", "data": [[1, 2]] }] })),
        ];
        for s in samples {
            let once = normalize(&s);
            let twice = normalize(&once);
            assert_eq!(once, twice);
        }
    }
}
