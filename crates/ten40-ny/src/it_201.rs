//! # Form IT-201
//!
//! The New York State resident income tax return, lines 17 through 62.
//! The return starts from federal total income, applies New York
//! additions and subtractions, then computes New York State tax, New
//! York City tax, and the MCTMT before totaling everything on line 62.
//!
//! Lines this engine has no inputs for (line 20 state bond interest,
//! lines 25-27 and 29-31 subtractions, lines 40/42/45/48/50/51/55-57
//! and 59-60) are treated as zero, which is how the simplified chain
//! below collapses several multi-line sums to passthroughs.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use ten40_core::round_to_dollars;
use ten40_policy::{MctmtRates, PolicyError, RateSchedule};

/// One eligible fund on the line 28 worksheet: the fund's total
/// ordinary dividends and the fund key used to look up its U.S.
/// government obligation percentage.
#[derive(Clone, Debug, PartialEq)]
pub struct GovBondFundItem {
    pub fund: String,
    pub amount: Decimal,
}

/// Line 17: total federal income, Form 1040 line 9.
pub fn line_17_total_federal_income(federal_form_1040_line_9_total_income: Decimal) -> Decimal {
    federal_form_1040_line_9_total_income
}

/// Line 18: total federal adjustments to income, Schedule 1 line 26.
pub fn line_18_federal_adjustments(
    federal_schedule_1_line_26_adjustments_to_income: Decimal,
) -> Decimal {
    federal_schedule_1_line_26_adjustments_to_income
}

/// Line 19: federal adjusted gross income, line 17 less line 18.
pub fn line_19_federal_agi(
    line_17_total_federal_income: Decimal,
    line_18_federal_adjustments: Decimal,
) -> Decimal {
    line_17_total_federal_income - line_18_federal_adjustments
}

/// Line 23: other New York additions, IT-225 line 9.
pub fn line_23_other_additions(it225_line_9_total_additions: Decimal) -> Decimal {
    it225_line_9_total_additions
}

/// Line 24: New York total income. Line 20 is zero for this return.
pub fn line_24_ny_total_income(
    line_19_federal_agi: Decimal,
    line_21_public_employee_414h: Decimal,
    line_22_ny_529_distributions: Decimal,
    line_23_other_additions: Decimal,
) -> Decimal {
    line_19_federal_agi
        + line_21_public_employee_414h
        + line_22_ny_529_distributions
        + line_23_other_additions
}

/// Line 28: interest income on U.S. government bonds. Each fund's
/// ordinary dividends count only in proportion to the fund's published
/// U.S. government obligation percentage.
pub fn line_28_us_gov_bond_interest(
    items: &[GovBondFundItem],
    percentages: &BTreeMap<String, Decimal>,
) -> Result<Decimal, PolicyError> {
    let mut total = Decimal::ZERO;
    for item in items {
        let percentage = percentages
            .get(&item.fund)
            .copied()
            .ok_or_else(|| PolicyError::UnknownFund(item.fund.clone()))?;
        total += item.amount * percentage;
    }
    Ok(round_to_dollars(total))
}

/// Line 32: New York total subtractions. Lines 25-27 and 29-31 are
/// zero for this return, leaving line 28 alone.
pub fn line_32_ny_total_subtractions(line_28_us_gov_bond_interest: Decimal) -> Decimal {
    line_28_us_gov_bond_interest
}

/// Line 33: New York adjusted gross income, line 24 less line 32.
pub fn line_33_ny_adjusted_gross_income(
    line_24_ny_total_income: Decimal,
    line_32_ny_total_subtractions: Decimal,
) -> Decimal {
    line_24_ny_total_income - line_32_ny_total_subtractions
}

/// Line 35: New York taxable income before exemptions, line 33 less the
/// line 34 deduction.
pub fn line_35_ny_taxable_income_before_exemptions(
    line_33_ny_adjusted_gross_income: Decimal,
    line_34_standard_deduction: Decimal,
) -> Decimal {
    line_33_ny_adjusted_gross_income - line_34_standard_deduction
}

/// Line 36: dependent exemptions, the dependent count times the
/// per-dependent exemption amount.
pub fn line_36_dependent_exemptions(
    dependents_count: Decimal,
    exemption_amount: Decimal,
) -> Decimal {
    dependents_count * exemption_amount
}

/// Line 38: New York taxable income, line 35 less line 36.
pub fn line_38_ny_taxable_income(
    line_35_ny_taxable_income_before_exemptions: Decimal,
    line_36_dependent_exemptions: Decimal,
) -> Decimal {
    line_35_ny_taxable_income_before_exemptions - line_36_dependent_exemptions
}

/// Statement 2 (Tax Computation Worksheet 4) line 3: New York State tax
/// on line 38 from the rate schedule, with negative income clamped to
/// zero first.
pub fn statement_2_line_3_tax_from_rate_schedule(
    line_38_ny_taxable_income: Decimal,
    schedule: &RateSchedule,
) -> Result<Decimal, PolicyError> {
    schedule.tax("NYS", line_38_ny_taxable_income.max(Decimal::ZERO))
}

/// Line 39: New York State tax on the line 38 amount, Statement 2
/// line 10 (line 3 plus the line 4 and line 9 worksheet constants).
pub fn line_39_nys_tax_on_line_38(
    worksheet_line_3_tax_from_rate_schedule: Decimal,
    worksheet_line_4_recapture_base_amount: Decimal,
    worksheet_line_9_incremental_benefit_addback: Decimal,
) -> Decimal {
    worksheet_line_3_tax_from_rate_schedule
        + worksheet_line_4_recapture_base_amount
        + worksheet_line_9_incremental_benefit_addback
}

/// Line 41: resident credit, IT-112-R line 34.
pub fn line_41_resident_credit(it112r_line_34_resident_credit: Decimal) -> Decimal {
    it112r_line_34_resident_credit
}

/// Line 43: total New York State nonrefundable credits. Lines 40 and 42
/// are zero for this return.
pub fn line_43_nys_credits_total(line_41_resident_credit: Decimal) -> Decimal {
    line_41_resident_credit
}

/// Line 44: New York State tax after credits, line 39 less line 43.
pub fn line_44_ny_state_tax_after_credits(
    line_39_nys_tax_on_line_38: Decimal,
    line_43_nys_credits_total: Decimal,
) -> Decimal {
    line_39_nys_tax_on_line_38 - line_43_nys_credits_total
}

/// Line 46: total New York State taxes. Line 45 is zero for this
/// return.
pub fn line_46_total_ny_state_taxes(line_44_ny_state_tax_after_credits: Decimal) -> Decimal {
    line_44_ny_state_tax_after_credits
}

/// Line 47: New York City taxable income. Equal to line 38 for a
/// full-year city resident.
pub fn line_47_nyc_taxable_income(line_38_ny_taxable_income: Decimal) -> Decimal {
    line_38_ny_taxable_income
}

/// Line 47a: New York City resident tax on line 47 from the city rate
/// schedule, with negative income clamped to zero first.
pub fn line_47a_nyc_resident_tax(
    line_47_nyc_taxable_income: Decimal,
    schedule: &RateSchedule,
) -> Result<Decimal, PolicyError> {
    schedule.tax("NYC", line_47_nyc_taxable_income.max(Decimal::ZERO))
}

/// Line 49: city tax after the household credit. Line 48 is zero for
/// this return.
pub fn line_49_nyc_tax_after_household_credit(line_47a_nyc_resident_tax: Decimal) -> Decimal {
    line_47a_nyc_resident_tax
}

/// Line 52: city tax before credits. Lines 50 and 51 are zero for this
/// return.
pub fn line_52_nyc_tax_before_credits(line_49_nyc_tax_after_household_credit: Decimal) -> Decimal {
    line_49_nyc_tax_after_household_credit
}

/// Line 53: New York City nonrefundable credits, IT-201-ATT line 10.
pub fn line_53_nyc_nonrefundable_credits(
    it201_att_line_10_total_nyc_nonrefundable_credits: Decimal,
) -> Decimal {
    it201_att_line_10_total_nyc_nonrefundable_credits
}

/// Line 54: city tax after credits, line 52 less line 53.
pub fn line_54_nyc_tax_after_credits(
    line_52_nyc_tax_before_credits: Decimal,
    line_53_nyc_nonrefundable_credits: Decimal,
) -> Decimal {
    line_52_nyc_tax_before_credits - line_53_nyc_nonrefundable_credits
}

/// Line 54a: MCTMT net earnings base for Zone 1, IT-2105.9
/// Worksheet 4a line 1.
pub fn line_54a_mctmt_net_earnings_zone_1(
    it2105_9_worksheet_4a_line_1_net_earnings_zone_1: Decimal,
) -> Decimal {
    it2105_9_worksheet_4a_line_1_net_earnings_zone_1
}

/// Line 54c: MCTMT for Zone 1, line 54a times the Zone 1 rate.
pub fn line_54c_mctmt_zone_1(
    line_54a_mctmt_net_earnings_zone_1: Decimal,
    rates: &MctmtRates,
) -> Decimal {
    round_to_dollars(line_54a_mctmt_net_earnings_zone_1 * rates.zone_1)
}

/// Line 54e: total MCTMT. Line 54d (Zone 2) is zero for this return.
pub fn line_54e_mctmt_total(line_54c_mctmt_zone_1: Decimal) -> Decimal {
    line_54c_mctmt_zone_1
}

/// Line 58: total New York City taxes and MCTMT. The Yonkers lines 55
/// through 57 are zero for this return.
pub fn line_58_total_nyc_yonkers_mctmt(
    line_54_nyc_tax_after_credits: Decimal,
    line_54e_mctmt_total: Decimal,
) -> Decimal {
    line_54_nyc_tax_after_credits + line_54e_mctmt_total
}

/// Line 61: total taxes, line 46 plus line 58. Lines 59 and 60 are zero
/// for this return.
pub fn line_61_total_taxes(
    line_46_total_ny_state_taxes: Decimal,
    line_58_total_nyc_yonkers_mctmt: Decimal,
) -> Decimal {
    line_46_total_ny_state_taxes + line_58_total_nyc_yonkers_mctmt
}

/// Line 62: total taxes carried to the payments section.
pub fn line_62_total_taxes(line_61_total_taxes: Decimal) -> Decimal {
    line_61_total_taxes
}

/// Line 71: other refundable credits, IT-201-ATT line 18.
pub fn line_71_other_refundable_credits(
    it201_att_line_18_total_other_refundable_credits: Decimal,
) -> Decimal {
    it201_att_line_18_total_other_refundable_credits
}
