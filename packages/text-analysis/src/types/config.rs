//! Configuration types for analyzers.

use serde::{Deserialize, Serialize};

/// Configuration for [`RuleBasedAnalyzer`](crate::RuleBasedAnalyzer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum input length in characters.
    ///
    /// Utterances are a handful of words; anything far longer is rejected
    /// instead of tokenized. Default: 4096.
    pub max_input_chars: usize,

    /// Split a numeral glued to a known unit ("15kg", "20rs") into two tokens.
    ///
    /// Default: true.
    pub split_units: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 4096,
            split_units: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = max;
        self
    }
}
