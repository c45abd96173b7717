//! Combined federal and New York totals.

use rust_decimal::Decimal;
use serde::Serialize;

use ten40_core::Facts;
use ten40_policy::Policy;

use crate::error::EngineError;
use crate::federal::compute_federal_total_tax;
use crate::ny::compute_ny_total_tax;
use crate::verify::Verifier;

/// Total tax for one return across every jurisdiction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaxTotals {
    pub federal: Decimal,
    pub ny: Decimal,
    pub total: Decimal,
}

/// Run both pipelines and sum them. A supplied verifier is applied to
/// each pipeline's checked lines.
pub fn compute_all_taxes(
    facts: &Facts,
    policy: &Policy,
    verifier: Option<&Verifier>,
) -> Result<TaxTotals, EngineError> {
    let federal = compute_federal_total_tax(facts, policy, verifier)?;
    let ny = compute_ny_total_tax(facts, policy, verifier)?;
    let total = federal + ny;
    tracing::debug!(%federal, %ny, %total, "computed totals");
    Ok(TaxTotals { federal, ny, total })
}
