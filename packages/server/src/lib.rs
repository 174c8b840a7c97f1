// Mandi Fair Price - API Core
//
// This crate judges spoken market prices ("onion 15 rupees") against a fixed
// fair-price table and suggests a counter-offer.
// Domain logic lives in domains/pricing; text analysis comes from the
// text-analysis package.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
