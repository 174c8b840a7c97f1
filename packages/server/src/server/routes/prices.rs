use axum::{extract::Extension, Json};

use crate::domains::pricing::CatalogEntry;
use crate::server::app::AxumAppState;

/// Fair-price table with aliases, in catalog order
pub async fn prices_handler(Extension(state): Extension<AxumAppState>) -> Json<Vec<CatalogEntry>> {
    Json(state.pricing.catalog().entries().to_vec())
}
