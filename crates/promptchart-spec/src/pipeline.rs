//! The full post-model transform chain.

use serde_json::Value;

use crate::bounds::{check_bounds, count_data_points};
use crate::classify::classify;
use crate::effects::{apply_3d_bar, apply_3d_pie, requested_mode, resolve_visual_mode};
use crate::effects::{VisualMode, VisualParams};
use crate::metadata::{extract_metadata, ExtractedData};
use crate::normalize::normalize;
use crate::types::{ChartSpec, ChartType, ValidationResult};

/// Top-level field the model may use to declare a visual mode. It is not
/// an ECharts option and never reaches the returned config.
const VISUAL_MODE_FIELD: &str = "visualMode";

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub config: ChartSpec,
    pub chart_type: Option<ChartType>,
    pub visual_mode: VisualMode,
    pub visual_params: Option<VisualParams>,
    pub data_point_count: usize,
    pub extracted: Option<ExtractedData>,
}

impl PipelineOutput {
    pub fn series_count(&self) -> usize {
        self.config.series().len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Structural errors from the validator.
    Invalid(ValidationResult),
    /// The spec is well-formed but carries more points than allowed.
    TooManyPoints {
        result: ValidationResult,
        max_points: usize,
    },
}

/// Run a parsed model response through every stage.
///
/// `prompt` is the user's original text, consulted for 3D keywords when the
/// model did not declare a visual mode.
pub fn run(mut raw: Value, prompt: &str, max_points: usize) -> Result<PipelineOutput, PipelineError> {
    let declared = raw
        .as_object_mut()
        .and_then(|root| root.remove(VISUAL_MODE_FIELD));
    let requested = requested_mode(declared.as_ref(), prompt);

    let spec = ChartSpec::parse(raw).map_err(PipelineError::Invalid)?;

    let bounds = check_bounds(&spec, max_points);
    if !bounds.is_valid {
        return Err(PipelineError::TooManyPoints {
            result: bounds,
            max_points,
        });
    }

    let formatted = normalize(&spec);
    let chart_type = classify(formatted.as_value());
    let visual_mode = resolve_visual_mode(requested, chart_type);
    if requested != visual_mode {
        tracing::debug!(
            chart_type = chart_type.map(|t| t.as_str()),
            "3D requested for a chart without a 3D form, using 2D"
        );
    }

    let (config, visual_params) = match (visual_mode, chart_type) {
        (VisualMode::ThreeD, Some(ChartType::Bar)) => (
            apply_3d_bar(&formatted),
            VisualParams::for_chart(ChartType::Bar),
        ),
        (VisualMode::ThreeD, Some(ChartType::Pie)) => (
            apply_3d_pie(&formatted),
            VisualParams::for_chart(ChartType::Pie),
        ),
        _ => (formatted, None),
    };

    let data_point_count = count_data_points(config.as_value());
    let extracted = extract_metadata(config.as_value());

    Ok(PipelineOutput {
        config,
        chart_type,
        visual_mode,
        visual_params,
        data_point_count,
        extracted,
    })
}
