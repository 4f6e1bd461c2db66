//! API routes.
//!
//! - `POST /api/arxiv` - forward a topic search to arXiv
//! - `GET /api/health` - health check

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::models::{QueryRequest, ResultSet};
use crate::source::ArxivClient;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upstream client, shared by all requests
    pub arxiv: Arc<ArxivClient>,
}

impl AppState {
    /// Create application state around an upstream client
    pub fn new(arxiv: ArxivClient) -> Self {
        Self {
            arxiv: Arc::new(arxiv),
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/arxiv", post(fetch_papers))
        .route("/api/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/arxiv - forward a topic search to arXiv
///
/// Success is always 200 with a (possibly empty) result list. Any upstream
/// failure collapses to a single generic 500; the cause is logged, not
/// returned.
async fn fetch_papers(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> impl IntoResponse {
    match state.arxiv.fetch(&request.topic, request.max_results).await {
        Ok(entries) => (StatusCode::OK, Json(ResultSet::new(entries))).into_response(),
        Err(e) => {
            error!("Error fetching data from arXiv: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": "Failed to fetch data from arXiv" })),
            )
                .into_response()
        }
    }
}
