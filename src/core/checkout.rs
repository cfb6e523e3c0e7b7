//! Checkout hand-off - the flat record the confirmation screen receives.
//!
//! Confirmation is purely a display step: no order row is ever persisted.
//! The summary bundles the derived plan figures with the product name and a
//! short schedule preview so the confirmation screen needs no further lookups.

use crate::{
    core::valuation::{self, AmortizationRow},
    entities::{emi_plan, product},
    errors::{Error, Result},
};
use serde::Serialize;

/// How many upcoming installments the confirmation screen previews.
const SCHEDULE_PREVIEW_MONTHS: i32 = 3;

/// Everything the confirmation screen displays, derived at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    /// Display name of the product being financed
    pub product_name: String,
    /// Slug of the product, for the back-link
    pub product_slug: String,
    /// Repayment period in months
    pub tenure: i32,
    /// Derived monthly payment in rupees
    pub monthly_payment: i64,
    /// Total payable over the tenure - exactly the product price
    pub total_payment: i64,
    /// Cashback credited on completion
    pub cashback: i64,
    /// Interest charged - always 0 under the enforced policy
    pub interest: i64,
    /// `total_payment - cashback`
    pub effective_cost: i64,
    /// Sticker discount (floored at 0) plus cashback
    pub net_savings: i64,
    /// The first few installments, for the "upcoming payments" card
    pub schedule_preview: Vec<AmortizationRow>,
}

/// Builds the confirmation summary for the plan with the requested tenure.
///
/// # Errors
/// * [`Error::PlanNotFound`] if the product has no plan with that tenure.
/// * Whatever [`valuation::derive_plan`] returns for an invalid row.
pub fn build_checkout_summary(
    product: &product::Model,
    plans: &[emi_plan::Model],
    tenure: i32,
) -> Result<CheckoutSummary> {
    let plan = plans
        .iter()
        .find(|p| p.tenure == tenure)
        .ok_or(Error::PlanNotFound { tenure })?;

    let derived = valuation::derive_plan(plan, product.price, product.mrp)?;
    let schedule_preview = valuation::amortization_preview(&derived, SCHEDULE_PREVIEW_MONTHS).collect();

    Ok(CheckoutSummary {
        product_name: product.name.clone(),
        product_slug: product.slug.clone(),
        tenure: derived.tenure,
        monthly_payment: derived.monthly_payment,
        total_payment: derived.total_payment,
        cashback: derived.cashback,
        interest: 0,
        effective_cost: derived.effective_cost,
        net_savings: valuation::net_savings(product.mrp, product.price, derived.cashback),
        schedule_preview,
    })
}
