//! Text Analysis Library
//!
//! Turns a short market utterance ("onion 15 rupees", "aloo 22", "टमाटर 25")
//! into a sequence of annotated tokens. Consumers only ever see three fields
//! per token: the surface text, whether it looks like a number, and a lemma.
//!
//! # Usage
//!
//! ```rust
//! use text_analysis::{Analyzer, RuleBasedAnalyzer};
//!
//! let analyzer = RuleBasedAnalyzer::new();
//! let tokens = analyzer.analyze("2 onions for ₹15").unwrap();
//!
//! assert!(tokens[0].like_num);
//! assert_eq!(tokens[1].lemma, "onion");
//! assert_eq!(tokens[4].text, "15");
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The [`Analyzer`] abstraction
//! - [`types`] - [`Token`] and analyzer configuration
//! - [`analyzers`] - In-process analyzer implementations
//! - [`numerals`] - Numeral-likeness detection
//! - [`lemma`] - Rule-based lemmatization
//! - [`testing`] - Test doubles

pub mod analyzers;
pub mod error;
pub mod lemma;
pub mod numerals;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use analyzers::RuleBasedAnalyzer;
pub use error::{AnalysisError, Result};
pub use lemma::Lemmatizer;
pub use numerals::like_num;
pub use testing::FixedAnalyzer;
pub use traits::analyzer::Analyzer;
pub use types::{config::AnalyzerConfig, token::Token};
