//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::pricing::PricingService;
use crate::kernel::create_pricing_service;
use crate::server::routes::{analyze_handler, health_handler, prices_handler};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub pricing: Arc<PricingService>,
    pub started_at: DateTime<Utc>,
}

impl AxumAppState {
    pub fn new(pricing: PricingService) -> Self {
        Self {
            pricing: Arc::new(pricing),
            started_at: Utc::now(),
        }
    }
}

/// Build the Axum application router from configuration.
pub fn build_app(config: &Config) -> Router {
    let pricing = create_pricing_service(config);
    build_router(AxumAppState::new(pricing), config.max_body_bytes)
}

/// Build the router around an existing state.
pub fn build_router(state: AxumAppState, max_body_bytes: usize) -> Router {
    // CORS configuration - any origin, method and header, credentials allowed.
    // Mirrors the request origin, since a literal `*` cannot carry credentials.
    let cors = CorsLayer::very_permissive();

    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/prices", get(prices_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
