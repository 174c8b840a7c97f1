//! Kernel module - server infrastructure and dependencies.

pub mod pricing_service;

pub use pricing_service::{create_analyzer, create_pricing_service};

// Re-export from text analysis library for easy access
pub use text_analysis::{AnalysisError, Analyzer, AnalyzerConfig, RuleBasedAnalyzer, Token};
