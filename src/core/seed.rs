//! Catalog seeding - populates the store from the config.toml catalog.
//!
//! Seeding is the only write path in the whole system. It runs once at
//! startup and is a no-op when any product already exists, so restarting the
//! server never duplicates the catalog.

use crate::{
    config::catalog,
    entities::{Product, emi_plan, product, variant},
    errors::Result,
};
use sea_orm::{PaginatorTrait, Set, prelude::*};
use tracing::info;

/// Seeds products, variants, and EMI plans from the parsed catalog config.
///
/// Returns the number of products inserted: 0 when the catalog was already
/// seeded (any existing product row skips the whole run).
///
/// # Errors
/// Returns an error if any insert or the existence check fails.
pub async fn seed_catalog(db: &DatabaseConnection, config: &catalog::Config) -> Result<usize> {
    let existing = Product::find().count(db).await?;
    if existing > 0 {
        info!(existing, "Catalog already seeded, skipping");
        return Ok(0);
    }

    let now = chrono::Utc::now().naive_utc();

    for product_config in &config.products {
        let inserted = product::ActiveModel {
            name: Set(product_config.name.clone()),
            slug: Set(product_config.slug.clone()),
            brand: Set(product_config.brand.clone()),
            description: Set(product_config.description.clone()),
            mrp: Set(product_config.mrp),
            price: Set(product_config.price),
            image_url: Set(product_config.image_url.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for variant_config in &product_config.variants {
            variant::ActiveModel {
                product_id: Set(inserted.id),
                color: Set(variant_config.color.clone()),
                storage: Set(variant_config.storage.clone()),
                image_url: Set(variant_config.image_url.clone()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        for plan_config in &product_config.plans {
            emi_plan::ActiveModel {
                product_id: Set(inserted.id),
                tenure: Set(plan_config.tenure),
                monthly_payment: Set(plan_config.monthly_payment),
                interest_rate: Set(plan_config.interest_rate),
                cashback: Set(plan_config.cashback),
                total_payment: Set(plan_config.total_payment),
                recommended: Set(plan_config.recommended),
                tag: Set(plan_config.tag.clone()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        info!(slug = %inserted.slug, "Seeded product");
    }

    Ok(config.products.len())
}
