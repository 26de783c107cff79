//! Request and chart size limits.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum prompt length in characters (valid range: 1-100000).
    pub max_prompt_length: usize,
    /// Maximum total data points across all series (valid range: 1-1000000).
    pub max_data_points: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_prompt_length: 2000,
            max_data_points: 1000,
        }
    }
}
