//! Shared test utilities for `SmartEMI`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults. The domain has no
//! runtime write path, so these helpers insert rows directly through the
//! entity `ActiveModel`s, the same way the seeder does.

use crate::{entities, errors::Result};
use sea_orm::{DatabaseConnection, Set, prelude::*};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `mrp`: 109999
/// * `price`: 99999
/// * timestamps: now
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    slug: &str,
) -> Result<entities::product::Model> {
    let now = chrono::Utc::now().naive_utc();
    create_custom_product(db, name, slug, 109_999, 99_999, now).await
}

/// Creates a test product with custom pricing and creation timestamp.
/// Use this when a test depends on ordering or specific amounts.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    slug: &str,
    mrp: i64,
    price: i64,
    created_at: chrono::NaiveDateTime,
) -> Result<entities::product::Model> {
    entities::product::ActiveModel {
        name: Set(name.to_string()),
        slug: Set(slug.to_string()),
        brand: Set("TestBrand".to_string()),
        description: Set(None),
        mrp: Set(mrp),
        price: Set(price),
        image_url: Set(None),
        created_at: Set(created_at),
        updated_at: Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a stored EMI plan row for a product.
///
/// The stored payment figures are deliberately nonsense (the valuation core
/// must never read them): `monthly_payment` 99999, `interest_rate` 11.5,
/// `total_payment` 7777777.
pub async fn create_test_plan(
    db: &DatabaseConnection,
    product_id: i64,
    tenure: i32,
    cashback: i64,
    recommended: bool,
) -> Result<entities::emi_plan::Model> {
    entities::emi_plan::ActiveModel {
        product_id: Set(product_id),
        tenure: Set(tenure),
        monthly_payment: Set(99_999),
        interest_rate: Set(11.5),
        cashback: Set(cashback),
        total_payment: Set(7_777_777),
        recommended: Set(recommended),
        tag: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a color/storage variant for a product.
pub async fn create_test_variant(
    db: &DatabaseConnection,
    product_id: i64,
    color: &str,
    storage: &str,
) -> Result<entities::variant::Model> {
    entities::variant::ActiveModel {
        product_id: Set(product_id),
        color: Set(color.to_string()),
        storage: Set(storage.to_string()),
        image_url: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Sets up a complete test environment with one product.
/// Returns (db, product) for common test scenarios.
pub async fn setup_with_product() -> Result<(DatabaseConnection, entities::product::Model)> {
    let db = setup_test_db().await?;
    let product = create_test_product(&db, "Test Phone", "test-phone").await?;
    Ok((db, product))
}
