//! EMI plan entity - A stored financing plan attached to a product.
//!
//! The stored `monthly_payment`, `interest_rate`, and `total_payment` columns
//! are legacy figures from before the 0% interest policy. The valuation core
//! ignores them and recomputes every displayed number from the product price;
//! they are kept only because the seed data still carries them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// EMI plan database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "emi_plans")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the plan
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the product this plan finances
    pub product_id: i64,
    /// Repayment period in months; unique per product in practice
    pub tenure: i32,
    /// Stored monthly payment in rupees - overridden by the valuation core
    pub monthly_payment: i64,
    /// Stored annual interest rate - overridden to 0% by the valuation core
    pub interest_rate: f64,
    /// Cashback in rupees credited on plan completion
    pub cashback: i64,
    /// Stored total payment in rupees - overridden by the valuation core
    pub total_payment: i64,
    /// Whether this is the plan preselected for the buyer
    pub recommended: bool,
    /// Marketing label (e.g., "Best Value", "Lowest EMI"), if any
    pub tag: Option<String>,
}

/// Defines relationships between EmiPlan and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each plan belongs to exactly one product
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
