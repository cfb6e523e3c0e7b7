//! Catalog read operations - the storefront's view of the relational store.
//!
//! These are the only data-access paths the storefront uses: unfiltered reads
//! of products, variants, and stored EMI plans. There is no mutation API here
//! (rows are created only by seeding) and no caching or retry; a failed query
//! surfaces as [`crate::errors::Error::Database`] for the caller to handle.

use crate::{
    entities::{EmiPlan, Product, Variant, emi_plan, product, variant},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};

/// Retrieves every product in the catalog, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_desc(product::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a product by its storefront slug, returning `None` if unknown.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Slug.eq(slug))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the stored EMI plans for a product, tenure ascending.
///
/// The returned rows are raw: callers display them only after running them
/// through [`crate::core::valuation::derive_plans`].
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_plans_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<emi_plan::Model>> {
    EmiPlan::find()
        .filter(emi_plan::Column::ProductId.eq(product_id))
        .order_by_asc(emi_plan::Column::Tenure)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the color/storage variants for a product. Order is not
/// significant to the storefront.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_variants_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<variant::Model>> {
    Variant::find()
        .filter(variant::Column::ProductId.eq(product_id))
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{
        create_test_plan, create_test_product, create_test_variant, setup_test_db,
        setup_with_product,
    };

    #[tokio::test]
    async fn test_get_product_by_slug() -> Result<()> {
        let (db, product) = setup_with_product().await?;

        let found = get_product_by_slug(&db, &product.slug).await?;
        assert_eq!(found.unwrap().id, product.id);

        let missing = get_product_by_slug(&db, "no-such-phone").await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_products_newest_first() -> Result<()> {
        let db = setup_test_db().await?;

        let older = create_test_product(&db, "Old Phone", "old-phone").await?;
        // Force a distinct, later creation timestamp on the second product
        let newer = crate::test_utils::create_custom_product(
            &db,
            "New Phone",
            "new-phone",
            109_999,
            99_999,
            older.created_at + chrono::Duration::seconds(5),
        )
        .await?;

        let products = get_all_products(&db).await?;
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, newer.id);
        assert_eq!(products[1].id, older.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_plans_sorted_by_tenure_ascending() -> Result<()> {
        let (db, product) = setup_with_product().await?;

        // Insert out of order on purpose
        create_test_plan(&db, product.id, 24, 7500, true).await?;
        create_test_plan(&db, product.id, 6, 2000, false).await?;
        create_test_plan(&db, product.id, 12, 5000, false).await?;

        let plans = get_plans_for_product(&db, product.id).await?;
        assert_eq!(
            plans.iter().map(|p| p.tenure).collect::<Vec<_>>(),
            vec![6, 12, 24]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_plans_scoped_to_product() -> Result<()> {
        let db = setup_test_db().await?;
        let phone_a = create_test_product(&db, "Phone A", "phone-a").await?;
        let phone_b = create_test_product(&db, "Phone B", "phone-b").await?;

        create_test_plan(&db, phone_a.id, 12, 5000, true).await?;
        create_test_plan(&db, phone_b.id, 24, 8000, true).await?;

        let plans = get_plans_for_product(&db, phone_a.id).await?;
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].product_id, phone_a.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_variants_for_product() -> Result<()> {
        let (db, product) = setup_with_product().await?;

        create_test_variant(&db, product.id, "Deep Blue", "256GB").await?;
        create_test_variant(&db, product.id, "Silver", "256GB").await?;

        let variants = get_variants_for_product(&db, product.id).await?;
        assert_eq!(variants.len(), 2);
        assert!(variants.iter().all(|v| v.product_id == product.id));

        let none = get_variants_for_product(&db, product.id + 999).await?;
        assert!(none.is_empty());
        Ok(())
    }
}
