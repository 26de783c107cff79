//! promptchart configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use promptchart_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    LimitsConfig, LlmConfig, LogLevel, LoggingConfig, PromptChartConfig, ServerConfig,
};

use std::path::Path;

use promptchart_common::ConfigError;

/// Load and validate the config.
///
/// With an explicit `path` the file must exist; otherwise `config.toml` is
/// loaded from the OS config directory, creating a default if none exists.
pub fn load_config(path: Option<&Path>) -> Result<PromptChartConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PromptChartConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
