//! Chart generation endpoint

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use futures_util::FutureExt;
use serde_json::{json, Value};

use promptchart_common::ChartError;

use crate::generate::{ChartGenerator, GenerateRequest, GenerateResponse};

/// Shared state for chart routes
pub type GeneratorState = Arc<ChartGenerator>;

pub fn chart_routes(state: GeneratorState) -> Router {
    Router::new()
        .route("/api/generate-chart", post(generate_handler).get(api_docs))
        .with_state(state)
}

async fn generate_handler(State(generator): State<GeneratorState>, body: Bytes) -> Response {
    let outcome = AssertUnwindSafe(async {
        match serde_json::from_slice::<GenerateRequest>(&body) {
            Ok(request) => generator.generate(&request).await,
            Err(err) => {
                tracing::warn!(error = %err, "rejecting undecodable request body");
                GenerateResponse::from(
                    ChartError::invalid_request("Request body must be a JSON object")
                        .with_details(err.to_string()),
                )
            }
        }
    })
    .catch_unwind()
    .await;

    let response = outcome.unwrap_or_else(|panic| {
        let details = panic_message(panic.as_ref());
        tracing::error!(details = %details, "unexpected failure while generating chart");
        GenerateResponse::from(
            ChartError::server_error("An unexpected error occurred").with_details(details),
        )
    });

    let status =
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response)).into_response()
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown error".to_string()
    }
}

async fn api_docs() -> Json<Value> {
    Json(json!({
        "message": "promptchart API - Generate Chart Endpoint",
        "method": "POST",
        "endpoint": "/api/generate-chart",
        "documentation": "Send a POST request with { prompt: string, sessionId?: string }",
        "example": {
            "prompt": "比较北京和上海的销售额：北京是120、130、150，上海是100、140、160"
        }
    }))
}
