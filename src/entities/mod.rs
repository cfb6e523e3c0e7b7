//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod emi_plan;
pub mod product;
pub mod variant;

// Re-export specific types to avoid conflicts
pub use emi_plan::{Column as EmiPlanColumn, Entity as EmiPlan, Model as EmiPlanModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use variant::{Column as VariantColumn, Entity as Variant, Model as VariantModel};
