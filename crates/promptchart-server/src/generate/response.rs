//! Response envelope returned to callers.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use promptchart_common::{ChartError, ErrorKind};
use promptchart_spec::{ChartSpec, ChartType, PipelineOutput, VisualMode, VisualParams};

/// Chart category reported when the first series has no known category.
const FALLBACK_CHART_TYPE: ChartType = ChartType::Line;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    pub chart_type: ChartType,
    pub data_point_count: usize,
    pub series_count: usize,
    /// Always `false`; oversized specs are rejected rather than cut down.
    pub was_truncated: bool,
    pub generated_at: String,
    pub visual_mode: VisualMode,
    #[serde(rename = "visualMode3D", skip_serializing_if = "Option::is_none")]
    pub visual_mode_3d: Option<VisualParams>,
}

impl ChartMetadata {
    pub fn from_output(output: &PipelineOutput) -> Self {
        Self {
            chart_type: output.chart_type.unwrap_or(FALLBACK_CHART_TYPE),
            data_point_count: output.data_point_count,
            series_count: output
                .extracted
                .as_ref()
                .map(|data| data.series.len())
                .unwrap_or(0),
            was_truncated: false,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            visual_mode: output.visual_mode,
            visual_mode_3d: output.visual_params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessBody {
    pub success: bool,
    pub config: ChartSpec,
    pub metadata: ChartMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// `{success: true, config, metadata}` or `{success: false, error, message, details?}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Success(SuccessBody),
    Failure(FailureBody),
}

impl GenerateResponse {
    pub fn success(output: PipelineOutput) -> Self {
        let metadata = ChartMetadata::from_output(&output);
        GenerateResponse::Success(SuccessBody {
            success: true,
            config: output.config,
            metadata,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerateResponse::Success(_))
    }

    /// Failure category, or `None` on success.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            GenerateResponse::Success(_) => None,
            GenerateResponse::Failure(body) => Some(body.error),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.error_kind().map_or(200, |kind| kind.status_code())
    }
}

impl From<ChartError> for GenerateResponse {
    fn from(err: ChartError) -> Self {
        GenerateResponse::Failure(FailureBody {
            success: false,
            error: err.kind,
            message: err.message,
            details: err.details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_envelope_shape() {
        let response = GenerateResponse::from(
            ChartError::validation_failed("Generated chart configuration is invalid")
                .with_details("Series array cannot be empty"),
        );
        assert_eq!(response.status_code(), 400);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": false,
                "error": "validation_failed",
                "message": "Generated chart configuration is invalid",
                "details": "Series array cannot be empty"
            })
        );
    }

    #[test]
    fn failure_without_details_omits_field() {
        let response = GenerateResponse::from(ChartError::server_error("LLM returned empty response"));
        let wire = serde_json::to_value(&response).unwrap();
        assert!(wire.get("details").is_none());
        assert!(wire.get("config").is_none());
        assert_eq!(response.status_code(), 500);
    }

    #[test]
    fn success_envelope_shape() {
        let output = promptchart_spec::run(
            json!({ "series": [{ "type": "area", "data": [1, 2] }] }),
            "",
            1000,
        )
        .unwrap();
        let response = GenerateResponse::success(output);
        assert!(response.is_success());
        assert_eq!(response.status_code(), 200);

        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire["success"], true);
        assert_eq!(wire["metadata"]["chartType"], "line");
        assert_eq!(wire["metadata"]["dataPointCount"], 2);
        assert_eq!(wire["metadata"]["seriesCount"], 1);
        assert_eq!(wire["metadata"]["wasTruncated"], false);
        assert_eq!(wire["metadata"]["visualMode"], "2D");
        assert!(wire["metadata"].get("visualMode3D").is_none());
        assert!(wire["metadata"]["generatedAt"].as_str().unwrap().ends_with('Z'));
    }
}
