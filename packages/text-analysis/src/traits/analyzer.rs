//! Analyzer trait for tokenizing utterances.
//!
//! Keeps the contract narrow on purpose: callers get a token sequence where
//! each token carries its surface form, a numeral-likeness flag and a lemma.
//! Anything richer a backing library produces (tags, parses, entities) stays
//! on the implementation side.

use crate::error::Result;
use crate::types::token::Token;

/// Splits text into annotated tokens.
///
/// Implementations must be cheap to share: one instance is built at startup
/// and used concurrently by every request.
pub trait Analyzer: Send + Sync {
    /// Short identifier reported by health checks and logs.
    fn name(&self) -> &'static str;

    /// Analyze `text` into tokens, in input order.
    fn analyze(&self, text: &str) -> Result<Vec<Token>>;
}
