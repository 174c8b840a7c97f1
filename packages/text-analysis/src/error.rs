//! Typed errors for the text analysis library.

use thiserror::Error;

/// Errors that can occur while analyzing text.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input exceeds the analyzer's configured limit
    #[error("input too long: {len} characters (max {max})")]
    InputTooLong { len: usize, max: usize },

    /// Backing model or word list could not be loaded
    #[error("failed to load analysis model: {0}")]
    ModelLoad(String),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
