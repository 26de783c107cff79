//! promptchart service: turns a natural-language request into a
//! renderer-ready ECharts option object.
//!
//! [`ChartGenerator`] owns the request flow (prompt checks, one LLM call,
//! the spec pipeline, the response envelope). [`routes`] exposes it over
//! HTTP and [`server::start_server`] binds the listener.

pub mod generate;
pub mod routes;
pub mod server;

pub use generate::{
    ChartGenerator, ChartMetadata, GenerateRequest, GenerateResponse, GeneratorSettings,
};
pub use server::{build_router, start_server};

#[cfg(test)]
pub(crate) mod test_support;
