pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ChartError, ConfigError, ErrorKind, PromptChartError};
pub use id::new_correlation_id;
pub use types::Color;

pub type Result<T> = std::result::Result<T, PromptChartError>;
