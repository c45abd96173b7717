//! # Form 1040
//!
//! The main return. Lines 1z through 24, with the tax-on-taxable-income
//! step delegated to [`crate::worksheets`].
//!
//! Three lines accept return-copy overrides when the matching fact is
//! present and nonzero: line 11 (AGI), line 12 (itemized deductions in
//! place of the standard deduction), and line 16 (tax as filed). The
//! orchestration layer decides which path to take; the functions here
//! stay pure.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ten40_core::{round_to_dollars, FactError, Tag, TagIndex};

/// Line 1z: total wages. W-2 box 1 amounts are rounded per W-2 before
/// summing, matching how employers report them.
pub fn line_1z_wages(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    index.total_rounding_each(&Tag::Form1040Line1zWages)
}

/// Line 3a: qualified dividends.
pub fn line_3a_qualified_dividends(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(
        index.total(&Tag::Form1040Line3aQualifiedDividends)?,
    ))
}

/// Line 5b: taxable pensions and annuities.
pub fn line_5b_pensions_annuities(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(index.total(&Tag::Form1040Line5bPensions)?))
}

/// Line 9: total income. Lines 4b and 6b are not carried by this
/// engine and contribute nothing.
pub fn line_9_total_income(
    line_1z_wages: Decimal,
    line_2b_taxable_interest: Decimal,
    line_3b_ordinary_dividends: Decimal,
    line_5b_pensions_annuities: Decimal,
    line_7_capital_gain_loss: Decimal,
    line_8_additional_income: Decimal,
) -> Decimal {
    round_to_dollars(
        line_1z_wages
            + line_2b_taxable_interest
            + line_3b_ordinary_dividends
            + line_5b_pensions_annuities
            + line_7_capital_gain_loss
            + line_8_additional_income,
    )
}

/// Line 11: adjusted gross income, line 9 less line 10.
pub fn line_11_adjusted_gross_income(
    line_9_total_income: Decimal,
    line_10_adjustments_to_income: Decimal,
) -> Decimal {
    line_9_total_income - line_10_adjustments_to_income
}

/// Line 12: standard deduction, or a rounded itemized override when the
/// return filed Schedule A instead.
pub fn line_12_standard_deduction(
    standard_deduction: Decimal,
    deduction_override: Option<Decimal>,
) -> Decimal {
    match deduction_override {
        Some(amount) => round_to_dollars(amount),
        None => standard_deduction,
    }
}

/// Line 13: qualified business income deduction. Directly-reported QBI
/// plus 20% of section 199A REIT dividends.
pub fn line_13_qbi_deduction(
    qbi_direct: Decimal,
    section_199a_dividends: Decimal,
) -> Decimal {
    qbi_direct + round_to_dollars(section_199a_dividends * dec!(0.20))
}

/// Line 14: total deductions, line 12 plus line 13.
pub fn line_14_total_deductions(
    line_12_standard_deduction: Decimal,
    line_13_qbi_deduction: Decimal,
) -> Decimal {
    line_12_standard_deduction + line_13_qbi_deduction
}

/// Line 15: taxable income, line 11 less line 14.
pub fn line_15_taxable_income(
    line_11_adjusted_gross_income: Decimal,
    line_14_total_deductions: Decimal,
) -> Decimal {
    line_11_adjusted_gross_income - line_14_total_deductions
}

/// Line 16: tax, whatever the worksheet (or override) produced.
pub fn line_16_tax(line_16_tax_from_worksheet: Decimal) -> Decimal {
    line_16_tax_from_worksheet
}

/// Line 18: line 16 plus Schedule 2 line 3 (not carried, zero here).
pub fn line_18_tax_and_amounts(
    line_16_tax: Decimal,
    line_17_schedule_2_line_3: Decimal,
) -> Decimal {
    line_16_tax + line_17_schedule_2_line_3
}

/// Line 21: total credits, child tax credit plus Schedule 3 line 8.
pub fn line_21_total_credits(
    line_19_child_tax_credit: Decimal,
    line_20_schedule_3_line_8: Decimal,
) -> Decimal {
    line_19_child_tax_credit + line_20_schedule_3_line_8
}

/// Line 22: tax after credits, line 18 less line 21.
pub fn line_22_tax_after_credits(
    line_18_tax_and_amounts: Decimal,
    line_21_total_credits: Decimal,
) -> Decimal {
    line_18_tax_and_amounts - line_21_total_credits
}

/// Line 23: other taxes from Schedule 2 line 21.
pub fn line_23_other_taxes(schedule_2_line_21_total_other_taxes: Decimal) -> Decimal {
    schedule_2_line_21_total_other_taxes
}

/// Line 24: total tax, line 22 plus line 23.
pub fn line_24_total_tax(
    line_22_tax_after_credits: Decimal,
    line_23_other_taxes: Decimal,
) -> Decimal {
    line_22_tax_after_credits + line_23_other_taxes
}
