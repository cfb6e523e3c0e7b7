//! Seed catalog loading from config.toml
//!
//! This module provides functionality to load the storefront catalog from a
//! TOML configuration file. The products defined in config.toml (with their
//! variants and EMI plan tables) are used to seed the database on first run.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of products to seed, each with variants and plans
    pub products: Vec<ProductConfig>,
}

/// Configuration for a single product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductConfig {
    /// Display name of the product
    pub name: String,
    /// URL-safe unique slug
    pub slug: String,
    /// Manufacturer brand
    pub brand: String,
    /// Marketing description
    pub description: Option<String>,
    /// Maximum retail price in whole rupees
    pub mrp: i64,
    /// Selling price in whole rupees (the financed principal)
    pub price: i64,
    /// Hero image URL
    pub image_url: Option<String>,
    /// Color/storage variants
    #[serde(default)]
    pub variants: Vec<VariantConfig>,
    /// Stored EMI plans
    #[serde(default)]
    pub plans: Vec<PlanConfig>,
}

/// Configuration for a single product variant
#[derive(Debug, Deserialize, Clone)]
pub struct VariantConfig {
    /// Color name
    pub color: String,
    /// Storage capacity label
    pub storage: String,
    /// Variant image URL
    pub image_url: Option<String>,
}

/// Configuration for a single stored EMI plan
#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    /// Repayment period in months
    pub tenure: i32,
    /// Stored monthly payment (legacy figure, overridden at valuation time)
    pub monthly_payment: i64,
    /// Stored annual interest rate (legacy figure, overridden to 0%)
    pub interest_rate: f64,
    /// Cashback in rupees credited on completion
    pub cashback: i64,
    /// Stored total payment (legacy figure, overridden at valuation time)
    pub total_payment: i64,
    /// Whether this plan is preselected for the buyer
    #[serde(default)]
    pub recommended: bool,
    /// Marketing label
    pub tag: Option<String>,
}

/// Loads the seed catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the seed catalog from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
