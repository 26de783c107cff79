//! Chart specification pipeline.
//!
//! Takes an untrusted, model-produced ECharts option object and turns it
//! into a renderer-ready configuration:
//!
//! raw JSON → [`validate`] → [`check_bounds`] → [`normalize`] →
//! [`classify`] → (3D requested and supported) [`effects`] →
//! [`extract_metadata`].
//!
//! Every stage is a pure function over request-owned values. [`run`]
//! chains them in order.

pub mod bounds;
pub mod classify;
pub mod effects;
pub mod metadata;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod validate;

mod json;

pub use bounds::{check_bounds, count_data_points, DEFAULT_MAX_DATA_POINTS};
pub use classify::classify;
pub use effects::{
    adjust_brightness, apply_3d_bar, apply_3d_pie, prompt_requests_3d, requested_mode,
    resolve_visual_mode, supports_3d, VisualMode, VisualParams,
};
pub use metadata::{extract_metadata, DataSeries, ExtractedData};
pub use normalize::normalize;
pub use pipeline::{run, PipelineError, PipelineOutput};
pub use types::{ChartSpec, ChartType, ValidationResult};
pub use validate::validate;
