//! Item and price extraction from analyzed tokens.

use std::sync::Arc;

use text_analysis::numerals::parse_integer;
use text_analysis::{AnalysisError, Analyzer, Token};

use super::data::PriceCatalog;
use super::models::Extraction;

/// Reads the first item and the first integer price out of an utterance.
#[derive(Clone)]
pub struct PriceExtractor {
    analyzer: Arc<dyn Analyzer>,
    catalog: Arc<PriceCatalog>,
}

impl PriceExtractor {
    pub fn new(analyzer: Arc<dyn Analyzer>, catalog: Arc<PriceCatalog>) -> Self {
        Self { analyzer, catalog }
    }

    pub fn analyzer_name(&self) -> &'static str {
        self.analyzer.name()
    }

    /// Extract from already lower-cased text.
    pub fn extract(&self, text: &str) -> Result<Extraction, AnalysisError> {
        let tokens = self.analyzer.analyze(text)?;
        Ok(extract_from_tokens(&tokens, &self.catalog))
    }
}

/// Single left-to-right pass over the tokens.
///
/// The first numeral-like token that parses as an integer is the price; a
/// numeral-like token that does not parse ("15.5", "fifteen") is skipped and
/// the scan continues. The first token whose lemma is a catalog alias is the
/// item. Later prices and items are ignored.
pub fn extract_from_tokens(tokens: &[Token], catalog: &PriceCatalog) -> Extraction {
    let mut extraction = Extraction::default();

    for token in tokens {
        if token.like_num && extraction.price.is_none() {
            match parse_integer(&token.text) {
                Some(price) => extraction.price = Some(price),
                None => {
                    tracing::debug!(token = %token.text, "skipping unparseable numeral");
                    extraction.skipped_numerals.push(token.text.clone());
                }
            }
        }

        if extraction.item.is_none() {
            extraction.item = catalog.resolve(&token.lemma);
        }

        if extraction.is_complete() {
            break;
        }
    }

    extraction
}
