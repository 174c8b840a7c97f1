//! Utterance analysis endpoint.
//!
//! POST /analyze  {"text": "onion 15 rupees"}
//!
//! Both outcomes are 200: callers branch on the presence of `error`.

use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use text_analysis::AnalysisError;

use crate::domains::pricing::{Assessment, PricingError};
use crate::server::app::AxumAppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Assessment(Assessment),
    Error { error: String },
}

impl AnalyzeResponse {
    fn error(message: impl Into<String>) -> Self {
        AnalyzeResponse::Error {
            error: message.into(),
        }
    }
}

pub async fn analyze_handler(
    Extension(state): Extension<AxumAppState>,
    Json(request): Json<AnalyzeRequest>,
) -> (StatusCode, Json<AnalyzeResponse>) {
    match state.pricing.analyze(&request.text) {
        Ok(assessment) => (StatusCode::OK, Json(AnalyzeResponse::Assessment(assessment))),
        Err(PricingError::Evaluation(e)) => {
            (StatusCode::OK, Json(AnalyzeResponse::error(e.to_string())))
        }
        Err(PricingError::Analysis(e)) => {
            tracing::warn!(error = %e, "Text analysis failed");
            let status = match e {
                AnalysisError::InputTooLong { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                AnalysisError::ModelLoad(_) => StatusCode::SERVICE_UNAVAILABLE,
            };
            (status, Json(AnalyzeResponse::error(e.to_string())))
        }
    }
}
