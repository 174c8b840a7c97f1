// HTTP routes
pub mod analyze;
pub mod health;
pub mod prices;

pub use analyze::*;
pub use health::*;
pub use prices::*;
