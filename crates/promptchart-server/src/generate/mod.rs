//! Chart generation request flow.

mod response;

pub use response::{ChartMetadata, FailureBody, GenerateResponse, SuccessBody};

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn, Instrument};

use promptchart_ai::{
    chart_generation_prompt, AiClient, AiError, CompletionOptions, SYSTEM_PROMPT_VERSION,
};
use promptchart_common::{new_correlation_id, ChartError};
use promptchart_config::PromptChartConfig;
use promptchart_spec::{PipelineError, PipelineOutput};

/// Shown when the model reports `no_data` without its own message.
pub const DEFAULT_NO_DATA_MESSAGE: &str = "无法从输入中提取数据，请提供包含数值的描述";

/// Incoming request body. Both fields stay untyped: a non-string `prompt`
/// is reported as a request error, and a non-string `sessionId` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Value,
    #[serde(default)]
    pub session_id: Value,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Value::String(prompt.into()),
            session_id: Value::Null,
        }
    }

    /// Client session id, when one was sent as a string.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_str()
    }
}

/// Tunables taken from [`PromptChartConfig`] at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub max_prompt_length: usize,
    pub max_data_points: usize,
    pub completion: CompletionOptions,
    pub timeout: Duration,
}

impl GeneratorSettings {
    pub fn from_config(config: &PromptChartConfig) -> Self {
        Self {
            max_prompt_length: config.limits.max_prompt_length,
            max_data_points: config.limits.max_data_points,
            completion: CompletionOptions {
                max_tokens: config.llm.max_tokens,
                temperature: config.llm.temperature,
            },
            timeout: Duration::from_secs(config.llm.timeout_secs),
        }
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::from_config(&PromptChartConfig::default())
    }
}

/// Stateless orchestrator: one LLM call per request, then the spec pipeline.
pub struct ChartGenerator {
    client: Arc<dyn AiClient>,
    settings: GeneratorSettings,
}

impl ChartGenerator {
    pub fn new(client: Arc<dyn AiClient>, config: &PromptChartConfig) -> Self {
        Self::with_settings(client, GeneratorSettings::from_config(config))
    }

    pub fn with_settings(client: Arc<dyn AiClient>, settings: GeneratorSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Handle one request and build its response envelope. Never fails;
    /// every error becomes a failure envelope.
    pub async fn generate(&self, request: &GenerateRequest) -> GenerateResponse {
        let request_id = new_correlation_id();
        let span = tracing::info_span!(
            "generate_chart",
            request_id = %request_id,
            session_id = request.session_id().unwrap_or("-"),
        );

        async {
            let started = Instant::now();
            match self.try_generate(&request.prompt).await {
                Ok(output) => {
                    info!(
                        chart_type = output.chart_type.map(|t| t.as_str()),
                        data_points = output.data_point_count,
                        series = output.series_count(),
                        visual_mode = %output.visual_mode,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "chart generated"
                    );
                    GenerateResponse::success(output)
                }
                Err(err) => {
                    warn!(
                        error = %err.kind,
                        message = %err.message,
                        details = err.details.as_deref().unwrap_or(""),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "chart generation failed"
                    );
                    GenerateResponse::from(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn try_generate(&self, prompt: &Value) -> Result<PipelineOutput, ChartError> {
        let prompt = self.check_prompt(prompt)?;
        let content = self.call_model(prompt).await?;
        let parsed = parse_model_output(&content)?;

        promptchart_spec::run(parsed, prompt, self.settings.max_data_points).map_err(|err| {
            match err {
                PipelineError::Invalid(result) => {
                    ChartError::validation_failed("Generated chart configuration is invalid")
                        .with_details(result.joined())
                }
                PipelineError::TooManyPoints { result, max_points } => {
                    ChartError::validation_failed(format!("数据点数量超过限制（最多{max_points}个）"))
                        .with_details(result.joined())
                }
            }
        })
    }

    /// Prompt preconditions, in order. The length limit counts characters
    /// and applies before trimming. Returns the trimmed prompt.
    fn check_prompt<'a>(&self, prompt: &'a Value) -> Result<&'a str, ChartError> {
        let raw = match prompt {
            Value::String(s) if !s.is_empty() => s.as_str(),
            _ => {
                return Err(ChartError::invalid_request(
                    "Prompt is required and must be a string",
                ))
            }
        };

        let max = self.settings.max_prompt_length;
        let length = raw.chars().count();
        debug!(prompt_chars = length, "prompt received");
        if length > max {
            return Err(ChartError::invalid_request(format!(
                "Prompt exceeds maximum length of {max} characters"
            )));
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ChartError::invalid_request("Prompt cannot be empty"));
        }
        Ok(trimmed)
    }

    async fn call_model(&self, prompt: &str) -> Result<String, ChartError> {
        let started = Instant::now();
        info!(
            model = self.client.model(),
            prompt_version = SYSTEM_PROMPT_VERSION,
            "calling LLM"
        );

        let call = self
            .client
            .complete(chart_generation_prompt(), prompt, &self.settings.completion);
        let result = match tokio::time::timeout(self.settings.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(AiError::Timeout),
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let completion = result.map_err(|err| {
            warn!(error = %err, elapsed_ms, "LLM call failed");
            ChartError::server_error("Failed to generate chart configuration")
                .with_details(err.to_string())
        })?;

        info!(
            elapsed_ms,
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            total_tokens = completion.usage.total_tokens(),
            "LLM responded"
        );

        if completion.content.is_empty() {
            return Err(ChartError::server_error("LLM returned empty response"));
        }
        Ok(completion.content)
    }
}

/// Parse the model's text. The `no_data` sentinel becomes a `no_data` error.
fn parse_model_output(content: &str) -> Result<Value, ChartError> {
    let parsed: Value = serde_json::from_str(content).map_err(|err| {
        warn!(error = %err, "LLM output is not valid JSON");
        debug!(raw = content, "raw LLM output");
        ChartError::server_error("Failed to parse chart configuration")
            .with_details("Invalid JSON response from LLM")
    })?;
    debug!(raw = content, "parsed LLM output");

    if parsed.get("error").and_then(Value::as_str) == Some("no_data") {
        let message = parsed
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_NO_DATA_MESSAGE);
        return Err(ChartError::no_data(message));
    }

    Ok(parsed)
}
