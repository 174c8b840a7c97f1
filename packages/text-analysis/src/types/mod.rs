//! Data types shared by analyzers and their consumers.

pub mod config;
pub mod token;
