//! Product entity - Represents a phone listed in the storefront catalog.
//!
//! Each product carries the two amounts the storefront works with: `mrp`, the
//! sticker price used only for the displayed savings figure, and `price`, the
//! financed principal every EMI plan is derived from. Rows are created by the
//! seed process and never mutated by storefront logic.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Apple iPhone 17 Pro")
    pub name: String,
    /// URL-safe unique identifier used by the storefront routes
    #[sea_orm(unique)]
    pub slug: String,
    /// Manufacturer brand (e.g., "Apple", "Samsung")
    pub brand: String,
    /// Marketing description shown on the product page
    pub description: Option<String>,
    /// Maximum retail price in whole rupees, used only for savings display
    pub mrp: i64,
    /// Selling price in whole rupees - the principal financed by EMI plans
    pub price: i64,
    /// Hero image URL, if any
    pub image_url: Option<String>,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product has many color/storage variants
    #[sea_orm(has_many = "super::variant::Entity")]
    Variants,
    /// One product has many EMI plans
    #[sea_orm(has_many = "super::emi_plan::Entity")]
    EmiPlans,
}

impl Related<super::variant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Variants.def()
    }
}

impl Related<super::emi_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmiPlans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
