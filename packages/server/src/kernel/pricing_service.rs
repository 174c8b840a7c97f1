//! Construction of the shared pricing service.
//!
//! Everything built here happens once, before the listener is bound, and is
//! then shared read-only by all requests.

use std::sync::Arc;

use text_analysis::{Analyzer, AnalyzerConfig, RuleBasedAnalyzer};

use crate::config::Config;
use crate::domains::pricing::{PriceCatalog, PricingService};

/// Build the analyzer described by `config`.
pub fn create_analyzer(config: &Config) -> Arc<dyn Analyzer> {
    let analyzer_config = AnalyzerConfig::default().with_max_input_chars(config.max_input_chars);
    let analyzer = RuleBasedAnalyzer::with_config(analyzer_config);

    tracing::info!(
        analyzer = analyzer.name(),
        max_input_chars = config.max_input_chars,
        "Analyzer ready"
    );

    Arc::new(analyzer)
}

/// Build the pricing service with the standard catalog.
pub fn create_pricing_service(config: &Config) -> PricingService {
    let catalog = Arc::new(PriceCatalog::standard());
    tracing::info!(items = catalog.len(), "Price catalog loaded");

    PricingService::new(create_analyzer(config), catalog, config.zero_price_policy)
}
