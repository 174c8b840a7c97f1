//! In-process rule-based analyzer.
//!
//! Tokenization works chunk by chunk on whitespace-separated text:
//! 1. Leading currency signs, brackets and quotes become their own tokens
//! 2. Trailing punctuation (including the danda and the `/-` price marker),
//!    a currency sign after a digit ("20₹") and a possessive `'s` become
//!    their own tokens
//! 3. A hyphen between digits ("17-18") is split out
//! 4. A number glued to a unit ("15kg", "20rs") or a currency abbreviation
//!    glued to a number ("rs15", "rs20/kg") is split apart

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AnalysisError, Result};
use crate::lemma::Lemmatizer;
use crate::numerals::{digit_value, like_num};
use crate::traits::analyzer::Analyzer;
use crate::types::{config::AnalyzerConfig, token::Token};

const CURRENCY_CHARS: &[char] = &['₹', '$', '€', '£'];

const PREFIX_CHARS: &[char] = &['(', '[', '{', '"', '\'', '“', '‘', '«'];

const SUFFIX_CHARS: &[char] = &[
    '.', ',', '!', '?', ';', ':', ')', ']', '}', '"', '\'', '”', '’', '»', '।', '…',
];

/// Price marker written after amounts ("15/-").
const PRICE_MARKER: &str = "/-";

const POSSESSIVES: &[&str] = &["'s", "’s"];

lazy_static! {
    static ref NUMBER_UNIT_REGEX: Regex =
        Regex::new(r"^(\d[\d,.]*)(kgs?|gms?|g|rs|rupees?|inr|/kg)$").unwrap();

    static ref CURRENCY_NUMBER_REGEX: Regex =
        Regex::new(r"^(rs\.?|inr)(\d[\d,.]*)(kgs?|gms?|g|/kg)?$").unwrap();
}

fn is_digit(c: char) -> bool {
    digit_value(c).is_some()
}

/// Byte offset of the first `-` with a digit on both sides.
fn digit_hyphen(core: &str) -> Option<usize> {
    let chars: Vec<(usize, char)> = core.char_indices().collect();
    chars.windows(3).find_map(|w| match w {
        [(_, before), (pos, '-'), (_, after)] if is_digit(*before) && is_digit(*after) => {
            Some(*pos)
        }
        _ => None,
    })
}

/// Default analyzer: deterministic tokenization, numeral detection and
/// plural lemmatization, with no external model.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnalyzer {
    config: AnalyzerConfig,
    lemmatizer: Lemmatizer,
}

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            lemmatizer: Lemmatizer::new(),
        }
    }

    /// Split text into surface forms without annotating them.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        for chunk in text.split_whitespace() {
            self.split_chunk(chunk, &mut pieces);
        }
        pieces
    }

    fn split_chunk(&self, chunk: &str, out: &mut Vec<String>) {
        let mut rest = chunk;

        while let Some(c) = rest.chars().next() {
            let is_prefix = PREFIX_CHARS.contains(&c) || CURRENCY_CHARS.contains(&c);
            if !is_prefix || rest.len() == c.len_utf8() {
                break;
            }
            out.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        }

        let mut suffixes = Vec::new();
        loop {
            if rest.len() > PRICE_MARKER.len() {
                if let Some(stripped) = rest.strip_suffix(PRICE_MARKER) {
                    suffixes.push(PRICE_MARKER.to_string());
                    rest = stripped;
                    continue;
                }
            }

            let possessive = POSSESSIVES.iter().find_map(|clitic| {
                rest.strip_suffix(clitic)
                    .filter(|stripped| !stripped.is_empty())
                    .map(|stripped| (stripped, *clitic))
            });
            if let Some((stripped, clitic)) = possessive {
                suffixes.push(clitic.to_string());
                rest = stripped;
                continue;
            }

            let Some(c) = rest.chars().next_back() else {
                break;
            };
            let head = &rest[..rest.len() - c.len_utf8()];
            let peel = if SUFFIX_CHARS.contains(&c) {
                !head.is_empty()
            } else if CURRENCY_CHARS.contains(&c) {
                head.chars().next_back().is_some_and(is_digit)
            } else {
                false
            };
            if !peel {
                break;
            }
            suffixes.push(c.to_string());
            rest = head;
        }

        if !rest.is_empty() {
            self.split_core(rest, out);
        }

        out.extend(suffixes.into_iter().rev());
    }

    fn split_core(&self, core: &str, out: &mut Vec<String>) {
        if let Some(pos) = digit_hyphen(core) {
            self.split_core(&core[..pos], out);
            out.push("-".to_string());
            self.split_core(&core[pos + 1..], out);
            return;
        }

        if self.config.split_units {
            if let Some(caps) = NUMBER_UNIT_REGEX.captures(core) {
                out.push(caps[1].to_string());
                out.push(caps[2].to_string());
                return;
            }
            if let Some(caps) = CURRENCY_NUMBER_REGEX.captures(core) {
                out.extend(
                    caps.iter()
                        .skip(1)
                        .flatten()
                        .map(|m| m.as_str().to_string()),
                );
                return;
            }
        }
        out.push(core.to_string());
    }

    fn annotate(&self, text: String) -> Token {
        if like_num(&text) {
            Token::numeral(text)
        } else {
            let lemma = self.lemmatizer.lemmatize(&text);
            Token::new(text, false, lemma)
        }
    }
}

impl Analyzer for RuleBasedAnalyzer {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let len = text.chars().count();
        if len > self.config.max_input_chars {
            return Err(AnalysisError::InputTooLong {
                len,
                max: self.config.max_input_chars,
            });
        }

        let tokens: Vec<Token> = self
            .split(text)
            .into_iter()
            .map(|piece| self.annotate(piece))
            .collect();

        tracing::trace!(count = tokens.len(), "analyzed utterance");
        Ok(tokens)
    }
}
