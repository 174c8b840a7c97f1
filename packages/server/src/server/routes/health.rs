use axum::{extract::Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    analyzer: String,
    items: usize,
    started_at: DateTime<Utc>,
}

/// Health check endpoint
///
/// Nothing here can degrade at runtime: the analyzer and catalog are built
/// before the listener is bound, so a response at all means healthy.
pub async fn health_handler(Extension(state): Extension<AxumAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        analyzer: state.pricing.analyzer_name().to_string(),
        items: state.pricing.catalog().len(),
        started_at: state.started_at,
    })
}
