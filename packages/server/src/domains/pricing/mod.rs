//! Pricing domain: fair-price catalog, utterance extraction and verdicts.
//!
//! Flow for one utterance:
//! text → [`PriceExtractor`] → [`Extraction`] → [`evaluate`] → [`Assessment`]
//!
//! [`PricingService`] wires the pieces together and is what the HTTP layer
//! and the CLI hold on to.

pub mod data;
pub mod error;
pub mod evaluator;
pub mod extractor;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use data::{CatalogEntry, PriceCatalog};
pub use error::{CatalogError, EvaluationError, PricingError};
pub use evaluator::{evaluate, ZeroPricePolicy};
pub use extractor::PriceExtractor;
pub use models::{Assessment, Color, Extraction, Item, Status, Verdict};
pub use service::PricingService;
