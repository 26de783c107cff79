//! Configuration schema types for promptchart.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod limits;
mod llm;
mod server;
mod system;

pub use limits::*;
pub use llm::*;
pub use server::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration, built once at startup and passed into the
/// generator and the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptChartConfig {
    pub llm: LlmConfig,
    pub limits: LimitsConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}
