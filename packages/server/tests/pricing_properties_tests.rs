//! Behavioral properties of the pricing service, independent of HTTP.

use std::sync::Arc;

use proptest::prelude::*;
use server_core::domains::pricing::{
    Assessment, EvaluationError, Item, PriceCatalog, PricingError, PricingService, Status,
    ZeroPricePolicy,
};
use text_analysis::{like_num, FixedAnalyzer, Lemmatizer, RuleBasedAnalyzer, Token};

fn service() -> PricingService {
    PricingService::new(
        Arc::new(RuleBasedAnalyzer::new()),
        Arc::new(PriceCatalog::standard()),
        ZeroPricePolicy::default(),
    )
}

fn is_missing(result: Result<Assessment, PricingError>) -> bool {
    matches!(
        result,
        Err(PricingError::Evaluation(EvaluationError::MissingItemOrPrice))
    )
}

#[test]
fn examples_from_the_market() {
    let service = service();

    let onion = service.analyze("onion 15 rupees").unwrap();
    assert_eq!((onion.item, onion.spoken_price, onion.fair_price), (Item::Onion, 15, 20));
    assert_eq!(onion.status, Status::Good);
    assert_eq!(onion.suggested_counter, 20);

    let aloo = service.analyze("aloo 22").unwrap();
    assert_eq!((aloo.item, aloo.spoken_price, aloo.fair_price), (Item::Potato, 22, 18));
    assert_eq!(aloo.status, Status::High);
    assert_eq!(aloo.suggested_counter, 18);

    let tamata = service.analyze("tamata 25").unwrap();
    assert_eq!((tamata.item, tamata.spoken_price), (Item::Tomato, 25));
    assert_eq!(tamata.status, Status::Good);

    assert!(is_missing(service.analyze("banana 10")));
    assert!(is_missing(service.analyze("onion")));
}

#[test]
fn boundary_prices() {
    let service = service();

    assert_eq!(service.analyze("onion 20").unwrap().status, Status::Good);
    assert_eq!(service.analyze("onion 24").unwrap().status, Status::Ok);
    assert_eq!(service.analyze("onion 25").unwrap().status, Status::High);
    assert_eq!(service.analyze("tomato 30").unwrap().status, Status::Ok);
    assert_eq!(service.analyze("tomato 31").unwrap().status, Status::High);
}

#[test]
fn parse_failures_do_not_hide_later_prices() {
    let service = service();

    let assessment = service.analyze("onion fifteen, no, 18").unwrap();
    assert_eq!(assessment.spoken_price, 18);

    assert!(is_missing(service.analyze("onion 15.5")));
}

#[test]
fn analyzer_can_be_swapped() {
    let analyzer = FixedAnalyzer::new(vec![
        Token::new("pyaaz", false, "kanda"),
        Token::numeral("40"),
    ]);
    let service = PricingService::new(
        Arc::new(analyzer),
        Arc::new(PriceCatalog::standard()),
        ZeroPricePolicy::default(),
    );

    let assessment = service.analyze("whatever the input").unwrap();
    assert_eq!(assessment.item, Item::Onion);
    assert_eq!(assessment.status, Status::High);
    assert_eq!(service.analyzer_name(), "fixed");
}

fn alias_strategy() -> impl Strategy<Value = (&'static str, Item)> {
    prop_oneof![
        Just(("onion", Item::Onion)),
        Just(("onions", Item::Onion)),
        Just(("ullipaya", Item::Onion)),
        Just(("ulli", Item::Onion)),
        Just(("kanda", Item::Onion)),
        Just(("potato", Item::Potato)),
        Just(("potatoes", Item::Potato)),
        Just(("aloo", Item::Potato)),
        Just(("bangaladumpa", Item::Potato)),
        Just(("tomato", Item::Tomato)),
        Just(("tomatoes", Item::Tomato)),
        Just(("tamata", Item::Tomato)),
    ]
}

proptest! {
    #[test]
    fn alias_and_price_are_extracted(
        (alias, item) in alias_strategy(),
        price in 1i64..100_000,
        price_first in any::<bool>(),
    ) {
        let text = if price_first {
            format!("{} rupees for {}", price, alias)
        } else {
            format!("{} {}", alias, price)
        };

        let assessment = service().analyze(&text).unwrap();
        prop_assert_eq!(assessment.item, item);
        prop_assert_eq!(assessment.spoken_price, price);
    }

    #[test]
    fn text_without_alias_or_numeral_is_missing(words in prop::collection::vec("[a-z]{5,8}", 0..6)) {
        let catalog = PriceCatalog::standard();
        let lemmatizer = Lemmatizer::new();
        prop_assume!(words.iter().all(|w| catalog.resolve(&lemmatizer.lemmatize(w)).is_none()));
        prop_assume!(words.iter().all(|w| !like_num(w)));

        prop_assert!(is_missing(service().analyze(&words.join(" "))));
    }
}
