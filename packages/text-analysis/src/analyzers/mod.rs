//! Analyzer implementations.

pub mod rule_based;

pub use rule_based::RuleBasedAnalyzer;
