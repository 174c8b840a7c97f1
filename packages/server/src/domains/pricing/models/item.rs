use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Canonical produce item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Onion,
    Potato,
    Tomato,
}

impl Item {
    /// Every item, in catalog order
    pub const ALL: [Item; 3] = [Item::Onion, Item::Potato, Item::Tomato];

    pub fn as_str(&self) -> &'static str {
        match self {
            Item::Onion => "onion",
            Item::Potato => "potato",
            Item::Tomato => "tomato",
        }
    }

    /// Position in [`Item::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Item::Onion => 0,
            Item::Potato => 1,
            Item::Tomato => 2,
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Item {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "onion" => Ok(Item::Onion),
            "potato" => Ok(Item::Potato),
            "tomato" => Ok(Item::Tomato),
            _ => Err(anyhow::anyhow!("Invalid item: {}", s)),
        }
    }
}
