//! LLM provider configuration types.

use serde::{Deserialize, Serialize};

/// Connection and sampling settings for the chat-completions provider.
///
/// The API key itself is never stored here; `api_key_env` names the
/// environment variable it is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    /// Output token cap (valid range: 256-32000).
    pub max_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Hard upper bound on one completion call (valid range: 1-300).
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dashscope.aliyuncs.com/compatible-mode/v1".into(),
            model: "qwen-max".into(),
            api_key_env: "DASHSCOPE_API_KEY".into(),
            max_tokens: 4000,
            temperature: 0.7,
            timeout_secs: 25,
        }
    }
}
