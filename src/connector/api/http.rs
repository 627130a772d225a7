//! HTTP surface for the analysis use case
//!
//! - GET  /                 - Service info
//! - GET  /health           - Health check
//! - POST /analyze-message  - Analyze a message (alias: POST /api/v1/detect)
//!
//! Preflight `OPTIONS` requests are answered by the CORS layer with
//! permissive headers and an empty body.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::{debug, info, Level};

use crate::domain::{AnalysisRequest, ErrorBody};

use super::container::Container;
use super::controller::{HealthController, HealthReport, ServiceInfo, ANALYZE_PATH, DETECT_PATH, HEALTH_PATH};

/// Create the router with all endpoints.
pub fn create_router(container: Arc<Container>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]);

    Router::new()
        .route("/", get(info_handler))
        .route(HEALTH_PATH, get(health_handler))
        .route(ANALYZE_PATH, post(analyze_handler))
        .route(DETECT_PATH, post(analyze_handler))
        // Hard errors are already reported by the gateway adapter.
        .layer(TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(Level::DEBUG)))
        .layer(cors)
        .with_state(container)
}

/// Run the HTTP server until the process is stopped.
pub async fn serve(addr: SocketAddr, container: Arc<Container>) -> Result<()> {
    let app = create_router(container);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);
    info!("Analyze endpoint: POST {}", ANALYZE_PATH);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn info_handler(State(container): State<Arc<Container>>) -> Json<ServiceInfo> {
    Json(HealthController::new(&container).info())
}

async fn health_handler(State(container): State<Arc<Container>>) -> Json<HealthReport> {
    Json(HealthController::new(&container).health())
}

/// The body is decoded leniently: a missing or malformed body is a request
/// without a message, which the use case answers with a fallback result.
async fn analyze_handler(State(container): State<Arc<Container>>, body: Bytes) -> Response {
    let request = AnalysisRequest::from_json_bytes(&body);

    match container.analyze_use_case().execute(&request).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => {
            debug!("Answering analyze-message with 500: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(e.to_string()))).into_response()
        }
    }
}
