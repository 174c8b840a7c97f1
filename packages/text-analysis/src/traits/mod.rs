//! Core trait abstractions for text analysis.

pub mod analyzer;
