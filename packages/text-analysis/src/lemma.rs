//! Rule-based lemmatization.
//!
//! Only inflection that matters for matching item names is handled: English
//! noun plurals. Words outside ASCII (Devanagari, Telugu, ...) and words the
//! rules do not recognize are returned unchanged.

use std::collections::HashMap;

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("halves", "half"),
    ("knives", "knife"),
    ("shoes", "shoe"),
    ("toes", "toe"),
    ("does", "do"),
    ("goes", "go"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("was", "be"),
    ("is", "be"),
    ("are", "be"),
    ("has", "have"),
];

/// Suffixes after which a plural `-es` is dropped whole.
const SIBILANT_ES: &[&str] = &["ses", "xes", "zes", "ches", "shes"];

/// Endings that look plural but are not.
const KEEP_S: &[&str] = &["ss", "us", "is"];

/// Plural rules apply to words at least this long.
const MIN_RULE_LEN: usize = 4;

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        let exceptions = IRREGULAR
            .iter()
            .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
            .collect();
        Self { exceptions }
    }

    /// Add an irregular form (builder pattern).
    pub fn with_exception(mut self, form: &str, lemma: &str) -> Self {
        self.exceptions.insert(form.to_string(), lemma.to_string());
        self
    }

    /// Base form of `word`.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }

        if word.len() < MIN_RULE_LEN || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if word.len() > MIN_RULE_LEN {
                return format!("{}y", stem);
            }
        }

        if let Some(stem) = word.strip_suffix("oes") {
            return format!("{}o", stem);
        }

        if SIBILANT_ES.iter().any(|suffix| word.ends_with(suffix)) {
            return word[..word.len() - 2].to_string();
        }

        if word.ends_with('s') && !KEEP_S.iter().any(|suffix| word.ends_with(suffix)) {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }
}
