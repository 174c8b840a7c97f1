//! Numeral detection and integer parsing.
//!
//! `like_num` answers "does this token look like a number?", which is a
//! looser question than "does it parse as an integer?". Decimals ("15.5"),
//! grouped digits ("1,000"), fractions ("1/2"), ordinals ("15th") and number
//! words ("fifteen") all look like numbers but only plain digit runs parse.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FRACTION_REGEX: Regex = Regex::new(r"^\d+/\d+$").unwrap();

    static ref NUMBER_WORDS: HashSet<&'static str> = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
        "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
        "seventeen", "eighteen", "nineteen", "twenty", "thirty", "forty", "fifty",
        "sixty", "seventy", "eighty", "ninety", "hundred", "thousand", "lakh", "lakhs",
        "crore", "crores", "million", "billion", "trillion",
    ]
    .into_iter()
    .collect();

    static ref ORDINAL_WORDS: HashSet<&'static str> = [
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth",
        "ninth", "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth",
        "fifteenth", "sixteenth", "seventeenth", "eighteenth", "nineteenth",
        "twentieth", "thirtieth", "fortieth", "fiftieth", "sixtieth", "seventieth",
        "eightieth", "ninetieth", "hundredth", "thousandth", "millionth", "billionth",
        "trillionth",
    ]
    .into_iter()
    .collect();
}

/// Zero code points of the decimal digit blocks accepted besides ASCII.
const NATIVE_DIGIT_ZEROS: &[u32] = &[
    0x0966, // Devanagari
    0x09E6, // Bengali
    0x0A66, // Gurmukhi
    0x0AE6, // Gujarati
    0x0B66, // Oriya
    0x0BE6, // Tamil
    0x0C66, // Telugu
    0x0CE6, // Kannada
    0x0D66, // Malayalam
];

/// Decimal value of `c` if it is an ASCII or Indic-script digit.
pub fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    let code = c as u32;
    NATIVE_DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|&zero| code - zero)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| digit_value(c).is_some())
}

/// Whether `text` looks like a number.
///
/// Mirrors the usual English tokenizer heuristic: an optional leading sign,
/// then digits with `,`/`.` separators removed, a simple fraction, a number
/// word, an ordinal word, or digits with an ordinal suffix.
pub fn like_num(text: &str) -> bool {
    let text = text
        .strip_prefix(['+', '-', '±', '~'])
        .unwrap_or(text);

    let stripped: String = text.chars().filter(|c| !matches!(c, ',' | '.')).collect();
    if is_digits(&stripped) {
        return true;
    }

    if FRACTION_REGEX.is_match(&stripped) {
        return true;
    }

    let lower = stripped.to_lowercase();
    if NUMBER_WORDS.contains(lower.as_str()) || ORDINAL_WORDS.contains(lower.as_str()) {
        return true;
    }

    ["st", "nd", "rd", "th"]
        .iter()
        .any(|suffix| lower.strip_suffix(suffix).is_some_and(is_digits))
}

/// Parse an integer the strict way: optional surrounding whitespace, an
/// optional sign, then digits with single underscores allowed between them.
///
/// Returns `None` for anything else, including values that overflow `i64`.
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }

    let mut value: i64 = 0;
    let mut prev_underscore = false;
    for c in digits.chars() {
        if c == '_' {
            if prev_underscore {
                return None;
            }
            prev_underscore = true;
            continue;
        }
        prev_underscore = false;
        let d = digit_value(c)? as i64;
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(d)?
        } else {
            value.checked_add(d)?
        };
    }

    Some(value)
}
