//! LLM access for promptchart.
//!
//! Provides the [`AiClient`] capability the chart pipeline depends on
//! ("given a system prompt and a user prompt, return text or fail"), an
//! OpenAI-compatible chat-completions implementation, and the versioned
//! system prompt that asks the model for an ECharts option object.

pub mod openai;
pub mod prompts;

use async_trait::async_trait;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use prompts::{chart_generation_prompt, SYSTEM_PROMPT_VERSION};

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Run one non-streaming completion and return the full response text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &CompletionOptions,
    ) -> Result<Completion, AiError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}

/// Per-call sampling options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionOptions {
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Completion {
    /// Text of the first choice. Empty when the provider returned no content.
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 10,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn default_options_match_provider_defaults() {
        let options = CompletionOptions::default();
        assert_eq!(options.max_tokens, 4000);
        assert_eq!(options.temperature, 0.7);
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(AiError::Timeout.to_string(), "Timeout");
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::NetworkError("connection reset".into()).to_string(),
            "Network error: connection reset"
        );
    }
}
