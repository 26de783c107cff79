use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use promptchart_common::{PromptChartError, Result};
use promptchart_config::ServerConfig;

use crate::routes::{chart_routes, health_routes, GeneratorState};

const MAX_BODY_SIZE_64KB: usize = 64 * 1024;

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// All routes with body limit and CORS applied.
pub fn build_router(generator: GeneratorState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(chart_routes(generator))
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE_64KB))
        .layer(cors_layer(config))
}

pub async fn start_server(config: &ServerConfig, generator: GeneratorState) -> Result<()> {
    let app = build_router(generator, config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| PromptChartError::Server(format!("Invalid address: {e}")))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting promptchart server on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
