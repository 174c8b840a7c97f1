// Business domains
pub mod pricing;
