//! Unified error types for `SmartEMI`.
//!
//! Every fallible operation in the crate returns [`Result`]. Validation
//! failures in the valuation core fail fast with a definite variant rather
//! than letting `NaN`/`Infinity` or partial results escape.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// A plan's tenure is zero or negative, so no monthly payment exists
    #[error("Invalid tenure: {tenure} (must be a positive number of months)")]
    InvalidTenure {
        /// The offending tenure value
        tenure: i32,
    },

    /// A product price (or MRP) is negative
    #[error("Invalid price: {price} (must be non-negative)")]
    InvalidPrice {
        /// The offending amount in rupees
        price: i64,
    },

    /// No product exists for the requested slug
    #[error("Product not found: {slug}")]
    ProductNotFound {
        /// The slug that was looked up
        slug: String,
    },

    /// The product has no EMI plan with the requested tenure
    #[error("No EMI plan with tenure of {tenure} months")]
    PlanNotFound {
        /// The tenure that was looked up
        tenure: i32,
    },

    /// Underlying store failure - connectivity, query, or schema errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error reading configuration or binding the listener
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable is missing or malformed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
