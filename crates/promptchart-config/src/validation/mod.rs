//! Full configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

mod helpers;


use crate::schema::PromptChartConfig;
use helpers::{validate_non_empty, validate_range, validate_range_f64};
use promptchart_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PromptChartConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // LLM provider
    let llm = &config.llm;
    validate_non_empty(&mut errors, "llm.base_url", &llm.base_url);
    validate_non_empty(&mut errors, "llm.model", &llm.model);
    validate_non_empty(&mut errors, "llm.api_key_env", &llm.api_key_env);
    if !(llm.base_url.starts_with("http://") || llm.base_url.starts_with("https://")) {
        errors.push(format!(
            "llm.base_url = {} must start with http:// or https://",
            llm.base_url
        ));
    }
    validate_range(&mut errors, "llm.max_tokens", llm.max_tokens, 256, 32000);
    validate_range_f64(&mut errors, "llm.temperature", llm.temperature, 0.0, 2.0);
    validate_range(&mut errors, "llm.timeout_secs", llm.timeout_secs, 1, 300);

    // Limits
    validate_range(
        &mut errors,
        "limits.max_prompt_length",
        config.limits.max_prompt_length,
        1,
        100_000,
    );
    validate_range(
        &mut errors,
        "limits.max_data_points",
        config.limits.max_data_points,
        1,
        1_000_000,
    );

    // Server
    validate_non_empty(&mut errors, "server.host", &config.server.host);
    if config.server.port == 0 {
        errors.push("server.port must not be 0".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
