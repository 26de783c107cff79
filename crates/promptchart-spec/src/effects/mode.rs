use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::supports_3d;
use crate::types::ChartType;

static THREE_D_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)3d|立体|三维|three[\s-]?dimensional").expect("3D keyword regex is valid")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualMode {
    #[default]
    #[serde(rename = "2D")]
    Flat,
    #[serde(rename = "3D")]
    ThreeD,
}

impl VisualMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualMode::Flat => "2D",
            VisualMode::ThreeD => "3D",
        }
    }

    pub fn is_3d(&self) -> bool {
        matches!(self, VisualMode::ThreeD)
    }
}

impl fmt::Display for VisualMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viewing parameters reported alongside a 3D chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualParams {
    pub viewing_angle: f64,
    pub depth: f64,
    pub shadow_intensity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilt_angle: Option<f64>,
}

impl VisualParams {
    /// Parameters for a chart category, or `None` when it has no 3D form.
    pub fn for_chart(chart_type: ChartType) -> Option<Self> {
        match chart_type {
            ChartType::Bar => Some(Self {
                viewing_angle: 30.0,
                depth: 20.0,
                shadow_intensity: 0.3,
                tilt_angle: None,
            }),
            ChartType::Pie => Some(Self {
                viewing_angle: 25.0,
                depth: 15.0,
                shadow_intensity: 0.3,
                tilt_angle: Some(25.0),
            }),
            _ => None,
        }
    }
}

/// Whether the user's prompt asks for a 3D look.
pub fn prompt_requests_3d(prompt: &str) -> bool {
    THREE_D_KEYWORDS.is_match(prompt)
}

/// Mode asked for before category checks.
///
/// A string `visualMode` declared by the model wins outright: `"3D"` (any
/// ASCII case) selects 3D and any other string selects 2D. When the model
/// declared nothing usable the prompt keywords decide.
pub fn requested_mode(declared: Option<&Value>, prompt: &str) -> VisualMode {
    match declared.and_then(Value::as_str) {
        Some(mode) if mode.eq_ignore_ascii_case("3d") => VisualMode::ThreeD,
        Some(_) => VisualMode::Flat,
        None if prompt_requests_3d(prompt) => VisualMode::ThreeD,
        None => VisualMode::Flat,
    }
}

/// Force 2D unless the classified category has a 3D treatment.
pub fn resolve_visual_mode(requested: VisualMode, chart_type: Option<ChartType>) -> VisualMode {
    match (requested, chart_type) {
        (VisualMode::ThreeD, Some(t)) if supports_3d(t) => VisualMode::ThreeD,
        _ => VisualMode::Flat,
    }
}
