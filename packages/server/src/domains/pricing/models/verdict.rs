use serde::{Deserialize, Serialize};

use super::item::Item;

/// How a spoken price compares to the fair price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Good,
    Ok,
    High,
}

impl Status {
    /// Display color shown next to the status
    pub fn color(&self) -> Color {
        match self {
            Status::Good => Color::Green,
            Status::Ok => Color::Orange,
            Status::High => Color::Red,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Good => write!(f, "GOOD"),
            Status::Ok => write!(f, "OK"),
            Status::High => write!(f, "HIGH"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Green,
    Orange,
    Red,
}

/// Classification plus what to offer back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub status: Status,
    pub color: Color,
    pub suggested_counter: i64,
}

/// A fully evaluated utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub item: Item,
    pub spoken_price: i64,
    pub fair_price: i64,
    pub status: Status,
    pub color: Color,
    pub suggested_counter: i64,
}

impl Assessment {
    pub fn new(item: Item, spoken_price: i64, fair_price: i64, verdict: Verdict) -> Self {
        Self {
            item,
            spoken_price,
            fair_price,
            status: verdict.status,
            color: verdict.color,
            suggested_counter: verdict.suggested_counter,
        }
    }
}
