//! Pseudo-3D styling for bar and pie charts.
//!
//! Nothing here renders in three dimensions. The transforms rewrite series
//! styling (gradients, shadows, borders, layout) so a flat renderer gives a
//! depth impression. Each transform is pure and returns a new spec.

mod bar;
mod color;
mod mode;
mod pie;

pub use bar::apply_3d_bar;
pub use color::adjust_brightness;
pub use mode::{prompt_requests_3d, requested_mode, resolve_visual_mode, VisualMode, VisualParams};
pub use pie::apply_3d_pie;

use serde_json::{Map, Value};

use crate::types::ChartType;

/// Only bar and pie charts have a 3D treatment.
pub fn supports_3d(chart_type: ChartType) -> bool {
    matches!(chart_type, ChartType::Bar | ChartType::Pie)
}

/// Remove `parent[key]` as an object; a missing or non-object value
/// becomes an empty map.
fn take_object(parent: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match parent.remove(key) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Shallow-merge `patch` into `parent[key]`, creating the object if needed.
fn merge_into(parent: &mut Map<String, Value>, key: &str, patch: Value) {
    let mut target = take_object(parent, key);
    if let Value::Object(fields) = patch {
        target.extend(fields);
    }
    parent.insert(key.to_string(), Value::Object(target));
}
