//! OpenAI-compatible chat-completions client.
//!
//! Implements the `AiClient` trait against any endpoint that speaks the
//! `/chat/completions` protocol (DashScope compatible mode, OpenAI, vLLM).

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
