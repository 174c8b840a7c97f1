use super::item::Item;

/// What could be read out of one utterance.
///
/// Both fields are independent: an utterance may name an item without a
/// price, a price without an item, both, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// First token (by position) whose lemma is a known alias
    pub item: Option<Item>,
    /// First numeral-like token that parsed as an integer
    pub price: Option<i64>,
    /// Numeral-like tokens before the price that failed to parse
    pub skipped_numerals: Vec<String>,
}

impl Extraction {
    pub fn is_complete(&self) -> bool {
        self.item.is_some() && self.price.is_some()
    }
}
