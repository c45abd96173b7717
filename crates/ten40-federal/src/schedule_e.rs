//! # Schedule E
//!
//! Supplemental income from partnerships. Part II only: nonpassive
//! income, allowed losses, and the section 179 deduction, all sourced
//! from K-1 statements.

use rust_decimal::Decimal;

use ten40_core::{round_to_dollars, FactError, Tag, TagIndex};

/// Nonpassive income derived from K-1 components: ordinary business
/// income plus guaranteed payments, unrounded.
pub fn nonpassive_income_from_k1_components(
    index: &TagIndex<'_>,
) -> Result<Decimal, FactError> {
    let ordinary = index.total(&Tag::MctmtBaseOrdinaryIncome)?;
    let guaranteed = index.total(&Tag::MctmtBaseGuaranteedPayments)?;
    Ok(ordinary + guaranteed)
}

/// Line 29a column (k): total nonpassive income.
///
/// Directly-tagged nonpassive income plus the K-1 component derivation,
/// rounded once at the end.
pub fn line_29a_total_nonpassive_income(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    let total = index.total(&Tag::ScheduleENonpassiveIncome)?
        + nonpassive_income_from_k1_components(index)?;
    Ok(round_to_dollars(total))
}

/// Line 29b column (i): total nonpassive loss allowed.
pub fn line_29b_total_nonpassive_loss_allowed(
    index: &TagIndex<'_>,
) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(
        index.total(&Tag::ScheduleELine29bNonpassiveLossAllowed)?,
    ))
}

/// Line 29b column (j): total section 179 deduction.
pub fn line_29b_total_section_179_deduction(
    index: &TagIndex<'_>,
) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(index.total(&Tag::Section179Deduction)?))
}

/// Line 30: total income, line 29a column (k).
pub fn line_30_total_income(line_29a_nonpassive_income: Decimal) -> Decimal {
    round_to_dollars(line_29a_nonpassive_income)
}

/// Line 31: total losses and deductions, reported as a negative amount.
pub fn line_31_total_losses(
    line_29b_nonpassive_loss_allowed: Decimal,
    line_29b_section_179_deduction: Decimal,
) -> Decimal {
    -round_to_dollars(line_29b_nonpassive_loss_allowed + line_29b_section_179_deduction)
}

/// Line 32: total partnership income, line 30 plus line 31.
pub fn line_32_total_partnership_income(
    line_30_total_income: Decimal,
    line_31_total_losses: Decimal,
) -> Decimal {
    line_30_total_income + line_31_total_losses
}
