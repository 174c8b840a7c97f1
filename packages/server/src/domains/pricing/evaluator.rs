//! Verdict computation.
//!
//! Given fair price F and spoken price p:
//! - p <= F          → GOOD (green)
//! - F < p <= 1.2 F  → OK (orange)
//! - p > 1.2 F       → HIGH (red)
//!
//! The suggested counter-offer is always F.

use super::data::PriceCatalog;
use super::error::EvaluationError;
use super::models::{Assessment, Extraction, Status, Verdict};

/// Upper bound of the OK band, as a multiple of the fair price
pub const OK_BAND_MULTIPLIER: f64 = 1.2;

/// What a spoken price of exactly zero means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPricePolicy {
    /// Zero is indistinguishable from "no price heard"
    #[default]
    TreatAsMissing,
    /// Zero is a real (free) price
    Accept,
}

/// Classify `price` against `fair_price`.
pub fn classify(price: i64, fair_price: i64) -> Verdict {
    let status = if price <= fair_price {
        Status::Good
    } else if price as f64 <= fair_price as f64 * OK_BAND_MULTIPLIER {
        Status::Ok
    } else {
        Status::High
    };

    Verdict {
        status,
        color: status.color(),
        suggested_counter: fair_price,
    }
}

/// Turn an extraction into an assessment, or report that data is missing.
pub fn evaluate(
    extraction: &Extraction,
    catalog: &PriceCatalog,
    policy: ZeroPricePolicy,
) -> Result<Assessment, EvaluationError> {
    let (item, price) = match (extraction.item, extraction.price) {
        (Some(item), Some(price)) => (item, price),
        _ => return Err(EvaluationError::MissingItemOrPrice),
    };

    if price == 0 && policy == ZeroPricePolicy::TreatAsMissing {
        return Err(EvaluationError::MissingItemOrPrice);
    }

    let fair_price = catalog.fair_price(item);
    Ok(Assessment::new(item, price, fair_price, classify(price, fair_price)))
}
