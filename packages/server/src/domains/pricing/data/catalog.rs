//! Fair-price catalog and alias table.
//!
//! Built once at startup and shared read-only. Every item has exactly one
//! fair price and one alias set; an alias resolves to the first item that
//! registered it.

use std::collections::HashMap;

use serde::Serialize;

use crate::domains::pricing::error::CatalogError;
use crate::domains::pricing::models::Item;

/// Fair mandi prices and the words people use for each item.
const STANDARD: &[(Item, i64, &[&str])] = &[
    (
        Item::Onion,
        20,
        &[
            "onion", "onions", "ullipaya", "ulli", "kanda",
            "प्याज", "ఉల్లిపాయ", "ఉల్లిపాయలు", "ఉల్లిపాయల",
        ],
    ),
    (
        Item::Potato,
        18,
        &["potato", "potatoes", "aloo", "bangaladumpa", "आलू"],
    ),
    (
        Item::Tomato,
        25,
        &["tomato", "tomatoes", "tamata", "टमाटर"],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub item: Item,
    pub fair_price: i64,
    pub aliases: Vec<String>,
}

impl CatalogEntry {
    pub fn new(item: Item, fair_price: i64, aliases: &[&str]) -> Self {
        Self {
            item,
            fair_price,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PriceCatalog {
    /// Indexed by [`Item::index`]
    entries: Vec<CatalogEntry>,
    alias_index: HashMap<String, Item>,
}

impl PriceCatalog {
    /// The built-in catalog
    pub fn standard() -> Self {
        let entries = STANDARD
            .iter()
            .map(|(item, price, aliases)| CatalogEntry::new(*item, *price, aliases))
            .collect();

        Self::from_entries(entries)
            .expect("Standard catalog lists every item once with a positive price")
    }

    /// Build a catalog, checking that every item appears exactly once.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut slots: Vec<Option<CatalogEntry>> = vec![None; Item::ALL.len()];

        for entry in entries {
            if entry.fair_price <= 0 {
                return Err(CatalogError::InvalidPrice {
                    item: entry.item,
                    price: entry.fair_price,
                });
            }
            let slot = &mut slots[entry.item.index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateItem(entry.item));
            }
            *slot = Some(entry);
        }

        let entries = slots
            .into_iter()
            .zip(Item::ALL)
            .map(|(slot, item)| slot.ok_or(CatalogError::MissingItem(item)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut alias_index = HashMap::new();
        for entry in &entries {
            for alias in &entry.aliases {
                alias_index.entry(alias.clone()).or_insert(entry.item);
            }
        }

        Ok(Self {
            entries,
            alias_index,
        })
    }

    pub fn fair_price(&self, item: Item) -> i64 {
        self.entries[item.index()].fair_price
    }

    /// Item a word (usually a lemma) stands for, if any.
    pub fn resolve(&self, word: &str) -> Option<Item> {
        self.alias_index.get(word).copied()
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fair_prices() {
        let catalog = PriceCatalog::standard();
        assert_eq!(catalog.fair_price(Item::Onion), 20);
        assert_eq!(catalog.fair_price(Item::Potato), 18);
        assert_eq!(catalog.fair_price(Item::Tomato), 25);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_resolves_regional_aliases() {
        let catalog = PriceCatalog::standard();
        assert_eq!(catalog.resolve("kanda"), Some(Item::Onion));
        assert_eq!(catalog.resolve("ulli"), Some(Item::Onion));
        assert_eq!(catalog.resolve("aloo"), Some(Item::Potato));
        assert_eq!(catalog.resolve("bangaladumpa"), Some(Item::Potato));
        assert_eq!(catalog.resolve("tamata"), Some(Item::Tomato));
        assert_eq!(catalog.resolve("टमाटर"), Some(Item::Tomato));
        assert_eq!(catalog.resolve("banana"), None);
        assert_eq!(catalog.resolve("Onion"), None);
    }

    #[test]
    fn test_first_registration_wins() {
        let catalog = PriceCatalog::from_entries(vec![
            CatalogEntry::new(Item::Onion, 20, &["onion", "sabzi"]),
            CatalogEntry::new(Item::Potato, 18, &["potato", "sabzi"]),
            CatalogEntry::new(Item::Tomato, 25, &["tomato"]),
        ])
        .unwrap();

        assert_eq!(catalog.resolve("sabzi"), Some(Item::Onion));
    }

    #[test]
    fn test_entries_are_kept_in_item_order() {
        let catalog = PriceCatalog::from_entries(vec![
            CatalogEntry::new(Item::Tomato, 25, &["tomato"]),
            CatalogEntry::new(Item::Onion, 20, &["onion"]),
            CatalogEntry::new(Item::Potato, 18, &["potato"]),
        ])
        .unwrap();

        let items: Vec<Item> = catalog.entries().iter().map(|e| e.item).collect();
        assert_eq!(items, Item::ALL.to_vec());
    }

    #[test]
    fn test_rejects_incomplete_catalog() {
        let err = PriceCatalog::from_entries(vec![
            CatalogEntry::new(Item::Onion, 20, &["onion"]),
            CatalogEntry::new(Item::Tomato, 25, &["tomato"]),
        ])
        .unwrap_err();

        assert_eq!(err, CatalogError::MissingItem(Item::Potato));
    }

    #[test]
    fn test_rejects_duplicate_and_non_positive_prices() {
        let duplicate = PriceCatalog::from_entries(vec![
            CatalogEntry::new(Item::Onion, 20, &["onion"]),
            CatalogEntry::new(Item::Onion, 21, &["kanda"]),
        ])
        .unwrap_err();
        assert_eq!(duplicate, CatalogError::DuplicateItem(Item::Onion));

        let free = PriceCatalog::from_entries(vec![CatalogEntry::new(Item::Potato, 0, &[])])
            .unwrap_err();
        assert_eq!(
            free,
            CatalogError::InvalidPrice {
                item: Item::Potato,
                price: 0
            }
        );
    }
}
