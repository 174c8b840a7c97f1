//! Test doubles for the [`Analyzer`] trait.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{AnalysisError, Result};
use crate::traits::analyzer::Analyzer;
use crate::types::token::Token;

/// Analyzer that ignores its input and returns canned tokens.
///
/// # Example
///
/// ```rust
/// use text_analysis::{Analyzer, FixedAnalyzer, Token};
///
/// let analyzer = FixedAnalyzer::new(vec![Token::word("aloo"), Token::numeral("22")]);
/// let tokens = analyzer.analyze("anything at all").unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(analyzer.call_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct FixedAnalyzer {
    tokens: Vec<Token>,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl FixedAnalyzer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    /// An analyzer whose every call fails with a model load error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Number of times `analyze` was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Analyzer for FixedAnalyzer {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn analyze(&self, _text: &str) -> Result<Vec<Token>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(AnalysisError::ModelLoad(message.clone())),
            None => Ok(self.tokens.clone()),
        }
    }
}
