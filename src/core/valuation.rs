//! EMI valuation business logic - the 0% interest policy in one place.
//!
//! Stored plan rows carry legacy `monthly_payment` / `interest_rate` /
//! `total_payment` figures from before the storefront moved to buyer-financed
//! 0% EMI. Every surface used to re-derive the displayed numbers with its own
//! copy of the arithmetic; this module centralizes the policy so it is
//! expressed exactly once. All functions here are pure and synchronous:
//! given the same plan row and product pricing they always produce the same
//! output, with no hidden state and no side effects.

use crate::{
    entities::emi_plan,
    errors::{Error, Result},
};
use serde::Serialize;

/// A plan as actually shown to the buyer, derived fresh from the product
/// price on every read. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectivePlan {
    /// Identifier of the underlying stored plan row
    pub id: i64,
    /// Repayment period in months
    pub tenure: i32,
    /// Monthly payment in rupees: `price / tenure`, rounded half-up
    pub monthly_payment: i64,
    /// Total paid over the tenure - always exactly the product price
    pub total_payment: i64,
    /// Cashback in rupees credited on completion
    pub cashback: i64,
    /// `total_payment - cashback`; may go negative if cashback exceeds price
    pub effective_cost: i64,
    /// `mrp - effective_cost`, the per-plan savings figure
    pub savings_vs_mrp: i64,
    /// Whether this plan is preselected for the buyer
    pub recommended: bool,
    /// Marketing label carried through from the stored row
    pub tag: Option<String>,
}

/// One row of an amortization schedule under the 0% policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    /// 1-based month number
    pub month: i32,
    /// EMI due this month
    pub emi_amount: i64,
    /// Principal repaid this month (equals the EMI at 0% interest)
    pub principal_portion: i64,
    /// Interest paid this month - always 0 under the enforced policy
    pub interest_portion: i64,
    /// Balance outstanding after this month's payment, floored at 0
    pub remaining_balance: i64,
}

/// Integer division rounding half-up; both operands must be non-negative
/// and the divisor positive (guaranteed by [`derive_plan`]'s validation).
const fn round_half_up_div(dividend: i64, divisor: i64) -> i64 {
    (dividend + divisor / 2) / divisor
}

/// Derives the displayed plan from a stored row and the product pricing.
///
/// The stored `monthly_payment`, `interest_rate`, and `total_payment` fields
/// are ignored: the monthly payment is recomputed as `price / tenure` rounded
/// half-up to the nearest rupee, and the total is the price itself, so the
/// result never includes interest.
///
/// # Errors
/// * [`Error::InvalidTenure`] if the stored tenure is zero or negative, which
///   would otherwise make the division undefined.
/// * [`Error::InvalidPrice`] if `price` or `mrp` is negative.
pub fn derive_plan(plan: &emi_plan::Model, price: i64, mrp: i64) -> Result<EffectivePlan> {
    if plan.tenure <= 0 {
        return Err(Error::InvalidTenure {
            tenure: plan.tenure,
        });
    }
    if price < 0 {
        return Err(Error::InvalidPrice { price });
    }
    if mrp < 0 {
        return Err(Error::InvalidPrice { price: mrp });
    }

    let monthly_payment = round_half_up_div(price, i64::from(plan.tenure));
    let total_payment = price;
    let effective_cost = total_payment - plan.cashback;

    Ok(EffectivePlan {
        id: plan.id,
        tenure: plan.tenure,
        monthly_payment,
        total_payment,
        cashback: plan.cashback,
        effective_cost,
        savings_vs_mrp: mrp - effective_cost,
        recommended: plan.recommended,
        tag: plan.tag.clone(),
    })
}

/// Derives every plan in a slice, preserving the input order.
///
/// The repository returns plans tenure-ascending, so the output keeps that
/// ordering. Fails on the first invalid row; no partial results.
pub fn derive_plans(plans: &[emi_plan::Model], price: i64, mrp: i64) -> Result<Vec<EffectivePlan>> {
    plans.iter().map(|p| derive_plan(p, price, mrp)).collect()
}

/// Picks the plan preselected for the buyer: the first plan flagged
/// `recommended`, or `None` when no plan carries the flag.
///
/// When no plan is recommended the storefront shows no default selection
/// rather than silently promoting the shortest tenure.
pub fn select_default_plan(plans: &[EffectivePlan]) -> Option<&EffectivePlan> {
    plans.iter().find(|p| p.recommended)
}

/// Net savings figure for a selected plan's summary: the sticker discount
/// (floored at zero, in case `price` exceeds `mrp`) plus the plan's cashback.
pub fn net_savings(mrp: i64, price: i64, cashback: i64) -> i64 {
    (mrp - price).max(0) + cashback
}

/// Builds a lazy amortization schedule of at most `months` rows for a derived
/// plan. The sequence is finite (`min(months, tenure)` rows), restartable via
/// `Clone`, and allocation-free.
///
/// The remaining balance decreases by the monthly payment each row and is
/// floored at 0, which absorbs the rounding drift on the final row when
/// `monthly_payment * tenure` does not exactly equal the price.
pub fn amortization_preview(plan: &EffectivePlan, months: i32) -> AmortizationPreview {
    AmortizationPreview {
        monthly_payment: plan.monthly_payment,
        remaining_balance: plan.total_payment,
        next_month: 1,
        last_month: months.min(plan.tenure).max(0),
    }
}

/// Iterator over [`AmortizationRow`]s produced by [`amortization_preview`].
#[derive(Debug, Clone)]
pub struct AmortizationPreview {
    monthly_payment: i64,
    remaining_balance: i64,
    next_month: i32,
    last_month: i32,
}

impl Iterator for AmortizationPreview {
    type Item = AmortizationRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_month > self.last_month {
            return None;
        }
        let month = self.next_month;
        self.next_month += 1;
        self.remaining_balance = (self.remaining_balance - self.monthly_payment).max(0);

        Some(AmortizationRow {
            month,
            emi_amount: self.monthly_payment,
            principal_portion: self.monthly_payment,
            interest_portion: 0,
            remaining_balance: self.remaining_balance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_month - self.next_month + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AmortizationPreview {}
