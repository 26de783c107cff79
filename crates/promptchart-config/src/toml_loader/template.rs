//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# promptchart configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[llm]
# Any OpenAI-compatible chat-completions endpoint.
# base_url = "https://dashscope.aliyuncs.com/compatible-mode/v1"
# model = "qwen-max"
# The API key is read from this environment variable, never from this file.
# api_key_env = "DASHSCOPE_API_KEY"
# max_tokens = 4000      # 256-32000
# temperature = 0.7      # 0.0-2.0
# timeout_secs = 25      # 1-300

[limits]
# max_prompt_length = 2000   # characters
# max_data_points = 1000     # across all series

[server]
# host = "127.0.0.1"
# port = 3000
# allowed_origins = ["http://localhost:3000", "http://127.0.0.1:3000"]

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
