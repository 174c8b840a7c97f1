pub mod extraction;
pub mod item;
pub mod verdict;

pub use extraction::Extraction;
pub use item::Item;
pub use verdict::{Assessment, Color, Status, Verdict};
