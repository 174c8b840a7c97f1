use std::sync::Arc;

use text_analysis::Analyzer;

use super::data::PriceCatalog;
use super::error::PricingError;
use super::evaluator::{evaluate, ZeroPricePolicy};
use super::extractor::PriceExtractor;
use super::models::Assessment;

/// Stateless entry point for judging an utterance.
///
/// Cheap to clone; every clone shares the same analyzer and catalog.
#[derive(Clone)]
pub struct PricingService {
    extractor: PriceExtractor,
    catalog: Arc<PriceCatalog>,
    zero_price_policy: ZeroPricePolicy,
}

impl PricingService {
    pub fn new(
        analyzer: Arc<dyn Analyzer>,
        catalog: Arc<PriceCatalog>,
        zero_price_policy: ZeroPricePolicy,
    ) -> Self {
        Self {
            extractor: PriceExtractor::new(analyzer, catalog.clone()),
            catalog,
            zero_price_policy,
        }
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn analyzer_name(&self) -> &'static str {
        self.extractor.analyzer_name()
    }

    /// Judge one utterance.
    pub fn analyze(&self, text: &str) -> Result<Assessment, PricingError> {
        let text = text.to_lowercase();
        let extraction = self.extractor.extract(&text)?;

        if !extraction.skipped_numerals.is_empty() {
            tracing::debug!(
                skipped = ?extraction.skipped_numerals,
                "numeral-like tokens did not parse as integers"
            );
        }

        let assessment = evaluate(&extraction, &self.catalog, self.zero_price_policy)?;

        tracing::debug!(
            item = %assessment.item,
            spoken_price = assessment.spoken_price,
            fair_price = assessment.fair_price,
            status = %assessment.status,
            "utterance assessed"
        );

        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::pricing::error::EvaluationError;
    use crate::domains::pricing::models::{Item, Status};
    use text_analysis::{AnalyzerConfig, RuleBasedAnalyzer};

    fn service() -> PricingService {
        PricingService::new(
            Arc::new(RuleBasedAnalyzer::new()),
            Arc::new(PriceCatalog::standard()),
            ZeroPricePolicy::default(),
        )
    }

    #[test]
    fn test_lowercases_input() {
        let assessment = service().analyze("ONION 15 Rupees").unwrap();
        assert_eq!(assessment.item, Item::Onion);
        assert_eq!(assessment.status, Status::Good);
    }

    #[test]
    fn test_missing_data_is_an_evaluation_error() {
        let err = service().analyze("banana 10").unwrap_err();
        assert!(matches!(
            err,
            PricingError::Evaluation(EvaluationError::MissingItemOrPrice)
        ));
        assert_eq!(err.to_string(), "Could not find item or price");
    }

    #[test]
    fn test_analysis_errors_are_distinct() {
        let service = PricingService::new(
            Arc::new(RuleBasedAnalyzer::with_config(
                AnalyzerConfig::default().with_max_input_chars(4),
            )),
            Arc::new(PriceCatalog::standard()),
            ZeroPricePolicy::default(),
        );

        assert!(matches!(
            service.analyze("onion 15"),
            Err(PricingError::Analysis(_))
        ));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let service = service();
        let first = service.analyze("aloo 22").unwrap();
        let second = service.analyze("aloo 22").unwrap();
        assert_eq!(first, second);
    }
}
