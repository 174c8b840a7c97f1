use serde::{Deserialize, Serialize};

/// A single analyzed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the input
    pub text: String,
    /// Whether the token looks like a number (not necessarily parseable)
    pub like_num: bool,
    /// Normalized base form used for dictionary matching
    pub lemma: String,
}

impl Token {
    pub fn new(text: impl Into<String>, like_num: bool, lemma: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            like_num,
            lemma: lemma.into(),
        }
    }

    /// A plain word whose lemma is its own surface form.
    pub fn word(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            like_num: false,
        }
    }

    /// A numeral-like token whose lemma is its own surface form.
    pub fn numeral(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            lemma: text.clone(),
            text,
            like_num: true,
        }
    }
}
