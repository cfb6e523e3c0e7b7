//! Core business logic - framework-agnostic catalog, valuation, checkout,
//! and seeding operations. Nothing in this module knows about HTTP.

/// Read-only catalog queries against the relational store
pub mod catalog;
/// Checkout hand-off summary for the confirmation screen
pub mod checkout;
/// Catalog seeding from the config.toml product list
pub mod seed;
/// Pure EMI valuation under the enforced 0% interest policy
pub mod valuation;
