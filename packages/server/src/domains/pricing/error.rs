use text_analysis::AnalysisError;
use thiserror::Error;

use super::models::Item;

/// Message returned to callers when an utterance cannot be evaluated
pub const MISSING_ITEM_OR_PRICE: &str = "Could not find item or price";

/// Catalog construction errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No fair price for item: {0}")]
    MissingItem(Item),

    #[error("Item listed more than once: {0}")]
    DuplicateItem(Item),

    #[error("Fair price must be positive for {item}, got {price}")]
    InvalidPrice { item: Item, price: i64 },
}

/// Evaluation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Could not find item or price")]
    MissingItemOrPrice,
}

/// Errors from analyzing one utterance end to end
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Text analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
