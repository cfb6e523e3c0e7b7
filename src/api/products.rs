//! Product and EMI plan endpoints.
//!
//! The product detail and EMI routes return **derived** plans: the 0%
//! interest policy is applied server-side in one place, so no client ever
//! sees the stored legacy payment figures.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::{AppState, Data},
    core::{catalog, checkout, valuation},
    entities::{product, variant},
    errors::{Error, Result},
};

/// Routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:slug", get(get_product))
        .route("/products/:slug/emi", get(get_product_emi))
        .route("/products/:slug/checkout", get(get_checkout_summary))
}

/// A product with its variants and derived plans, as the product page needs it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    /// The product row itself, flattened into the object
    #[serde(flatten)]
    pub product: product::Model,
    /// Color/storage variants
    pub variants: Vec<variant::Model>,
    /// Plans derived under the 0% policy, tenure ascending
    pub emi_plans: Vec<valuation::EffectivePlan>,
}

/// The minimal product reference returned by the EMI endpoint.
#[derive(Debug, Serialize)]
pub struct ProductRef {
    /// Display name
    pub name: String,
    /// Storefront slug
    pub slug: String,
}

/// Payload of `GET /api/products/:slug/emi`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiPlansPayload {
    /// The product the plans belong to
    pub product: ProductRef,
    /// Derived plans, tenure ascending
    pub emi_plans: Vec<valuation::EffectivePlan>,
}

/// Query parameters for the checkout summary endpoint.
#[derive(Debug, Deserialize)]
pub struct CheckoutParams {
    /// Tenure (months) of the selected plan
    pub tenure: i32,
}

async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Data<Vec<product::Model>>>> {
    let products = catalog::get_all_products(&state.db).await?;
    Ok(Json(Data { data: products }))
}

async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Data<ProductDetail>>> {
    let product = catalog::get_product_by_slug(&state.db, &slug)
        .await?
        .ok_or(Error::ProductNotFound { slug })?;

    let variants = catalog::get_variants_for_product(&state.db, product.id).await?;
    let plans = catalog::get_plans_for_product(&state.db, product.id).await?;
    let emi_plans = valuation::derive_plans(&plans, product.price, product.mrp)?;

    Ok(Json(Data {
        data: ProductDetail {
            product,
            variants,
            emi_plans,
        },
    }))
}

async fn get_product_emi(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Data<EmiPlansPayload>>> {
    let product = catalog::get_product_by_slug(&state.db, &slug)
        .await?
        .ok_or(Error::ProductNotFound { slug })?;

    let plans = catalog::get_plans_for_product(&state.db, product.id).await?;
    let emi_plans = valuation::derive_plans(&plans, product.price, product.mrp)?;

    Ok(Json(Data {
        data: EmiPlansPayload {
            product: ProductRef {
                name: product.name,
                slug: product.slug,
            },
            emi_plans,
        },
    }))
}

async fn get_checkout_summary(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<CheckoutParams>,
) -> Result<Json<Data<checkout::CheckoutSummary>>> {
    let product = catalog::get_product_by_slug(&state.db, &slug)
        .await?
        .ok_or(Error::ProductNotFound { slug })?;

    let plans = catalog::get_plans_for_product(&state.db, product.id).await?;
    let summary = checkout::build_checkout_summary(&product, &plans, params.tenure)?;

    Ok(Json(Data { data: summary }))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::api::router;
    use crate::test_utils::{
        create_test_plan, create_test_product, create_test_variant, setup_test_db,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sea_orm::DatabaseConnection;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(db: DatabaseConnection, uri: &str) -> (StatusCode, Value) {
        let response = router(db)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    async fn seed_iphone(db: &DatabaseConnection) -> crate::errors::Result<()> {
        let product = crate::test_utils::create_custom_product(
            db,
            "Apple iPhone 17 Pro",
            "iphone-17-pro",
            159_900,
            149_900,
            chrono::Utc::now().naive_utc(),
        )
        .await?;
        create_test_variant(db, product.id, "Deep Blue", "256GB").await?;
        create_test_plan(db, product.id, 6, 2000, false).await?;
        create_test_plan(db, product.id, 24, 7500, true).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_list_products() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        create_test_product(&db, "Test Phone", "test-phone").await?;

        let (status, json) = get_json(db, "/api/products").await;
        assert_eq!(status, StatusCode::OK);

        let products = json["data"].as_array().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0]["slug"], "test-phone");
        // camelCase field names on the wire
        assert!(products[0].get("imageUrl").is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_returns_derived_plans() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        seed_iphone(&db).await?;

        let (status, json) = get_json(db, "/api/products/iphone-17-pro").await;
        assert_eq!(status, StatusCode::OK);

        let data = &json["data"];
        assert_eq!(data["name"], "Apple iPhone 17 Pro");
        assert_eq!(data["variants"].as_array().unwrap().len(), 1);

        let plans = data["emiPlans"].as_array().unwrap();
        assert_eq!(plans.len(), 2);
        // Tenure ascending, derived figures (stored nonsense never leaks)
        assert_eq!(plans[0]["tenure"], 6);
        assert_eq!(plans[1]["tenure"], 24);
        assert_eq!(plans[1]["monthlyPayment"], 6246);
        assert_eq!(plans[1]["totalPayment"], 149_900);
        assert_eq!(plans[1]["effectiveCost"], 142_400);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_unknown_slug_is_404() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;

        let (status, json) = get_json(db, "/api/products/no-such-phone").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Product not found: no-such-phone");
        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_emi() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        seed_iphone(&db).await?;

        let (status, json) = get_json(db, "/api/products/iphone-17-pro/emi").await;
        assert_eq!(status, StatusCode::OK);

        let data = &json["data"];
        assert_eq!(data["product"]["slug"], "iphone-17-pro");
        let plans = data["emiPlans"].as_array().unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[1]["recommended"], true);
        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_summary() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        seed_iphone(&db).await?;

        let (status, json) =
            get_json(db, "/api/products/iphone-17-pro/checkout?tenure=24").await;
        assert_eq!(status, StatusCode::OK);

        let data = &json["data"];
        assert_eq!(data["productName"], "Apple iPhone 17 Pro");
        assert_eq!(data["monthlyPayment"], 6246);
        assert_eq!(data["totalPayment"], 149_900);
        assert_eq!(data["interest"], 0);
        assert_eq!(data["netSavings"], 17_500);
        assert_eq!(data["schedulePreview"].as_array().unwrap().len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_unknown_tenure_is_404() -> crate::errors::Result<()> {
        let db = setup_test_db().await?;
        seed_iphone(&db).await?;

        let (status, json) =
            get_json(db, "/api/products/iphone-17-pro/checkout?tenure=18").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "No EMI plan with tenure of 18 months");
        Ok(())
    }
}
