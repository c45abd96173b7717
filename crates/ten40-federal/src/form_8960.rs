//! # Form 8960
//!
//! Net Investment Income Tax. Lines 3, 6, 7, and 10 have no inputs in
//! this engine and default to zero through [`InvestmentIncome`].

use rust_decimal::Decimal;

use ten40_core::{round_to_dollars, FactError, Tag, TagIndex};
use ten40_policy::{NetInvestmentIncomeTax, StateLocalTaxDeduction};

/// Components of Form 8960 line 8. Fields not produced by any earlier
/// form stay at their zero default.
#[derive(Clone, Debug, Default)]
pub struct InvestmentIncome {
    pub line_1_taxable_interest: Decimal,
    pub line_2_ordinary_dividends: Decimal,
    pub line_3_annuities: Decimal,
    pub line_4c_net_income_from_rentals: Decimal,
    pub line_5d_net_gain_loss_disposition: Decimal,
    pub line_6_adjustments_cfc_pfic: Decimal,
    pub line_7_other_modifications: Decimal,
}

/// Line 1: taxable interest, Schedule B line 1.
pub fn line_1_taxable_interest(taxable_interest: Decimal) -> Decimal {
    taxable_interest
}

/// Line 2: ordinary dividends, Schedule B line 6.
pub fn line_2_ordinary_dividends(ordinary_dividends: Decimal) -> Decimal {
    ordinary_dividends
}

/// Line 4a: rental real estate, royalties, and partnership income,
/// Schedule E line 32.
pub fn line_4a_rental_real_estate_royalties_partnerships(
    schedule_e_line_32_total_partnership_income: Decimal,
) -> Decimal {
    schedule_e_line_32_total_partnership_income
}

/// Line 4b: adjustment removing non-section 1411 trade or business
/// income included on line 4a, so only passive income remains on 4c.
///
/// Negative when the nonpassive activity netted income.
pub fn line_4b_adjustment_nonsection_1411(
    nonpassive_income: Decimal,
    nonpassive_losses_allowed: Decimal,
    section_179_deduction: Decimal,
    additional_nonpassive_deductions: Decimal,
) -> Decimal {
    let total_deductions =
        nonpassive_losses_allowed + section_179_deduction + additional_nonpassive_deductions;
    let net_nonpassive = nonpassive_income - total_deductions;
    -round_to_dollars(net_nonpassive)
}

/// Line 4c: net rental and partnership income, line 4a plus line 4b.
pub fn line_4c_net_income_from_rentals(
    line_4a_rental_real_estate_royalties_partnerships: Decimal,
    line_4b_adjustment_nonsection_1411: Decimal,
) -> Decimal {
    line_4a_rental_real_estate_royalties_partnerships + line_4b_adjustment_nonsection_1411
}

/// Line 5a: net gain or loss from dispositions, Schedule D line 16.
pub fn line_5a_net_gain_loss_disposition(schedule_d_line_16_net_capital_gain: Decimal) -> Decimal {
    schedule_d_line_16_net_capital_gain
}

/// Line 5d: combined disposition gain, lines 5a through 5c. Lines 5b
/// and 5c have no inputs here and contribute zero.
pub fn line_5d_net_gain_loss_disposition(
    line_5a_net_gain_loss_disposition: Decimal,
    line_5b_gain_not_subject_to_niit: Decimal,
    line_5c_adjustment_disposition_partnership_interest: Decimal,
) -> Decimal {
    line_5a_net_gain_loss_disposition
        + line_5b_gain_not_subject_to_niit
        + line_5c_adjustment_disposition_partnership_interest
}

/// Line 8: total investment income.
pub fn line_8_total_investment_income(income: &InvestmentIncome) -> Decimal {
    income.line_1_taxable_interest
        + income.line_2_ordinary_dividends
        + income.line_3_annuities
        + income.line_4c_net_income_from_rentals
        + income.line_5d_net_gain_loss_disposition
        + income.line_6_adjustments_cfc_pfic
        + income.line_7_other_modifications
}

/// Line 9a: investment interest expense.
pub fn line_9a_investment_interest_expense(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(
        index.total(&Tag::Form8960Line9aInvestmentInterestExpense)?,
    ))
}

/// Line 9b: state, local, and foreign income tax allocable to
/// investment income, capped by the SALT deduction limit.
pub fn line_9b_state_local_foreign_income_tax(
    index: &TagIndex<'_>,
    policy: &StateLocalTaxDeduction,
) -> Result<Decimal, FactError> {
    let total = index.total(&Tag::Form8960Line9bStateLocalForeignIncomeTax)?;
    Ok(round_to_dollars(total.min(policy.cap)))
}

/// Line 9c: miscellaneous investment expenses.
pub fn line_9c_misc_investment_expenses(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(
        index.total(&Tag::Form8960Line9cMiscInvestmentExpenses)?,
    ))
}

/// Line 9d: total investment expenses, lines 9a through 9c.
pub fn line_9d_total_investment_expenses(
    line_9a_investment_interest_expense: Decimal,
    line_9b_state_local_foreign_income_tax: Decimal,
    line_9c_misc_investment_expenses: Decimal,
) -> Decimal {
    line_9a_investment_interest_expense
        + line_9b_state_local_foreign_income_tax
        + line_9c_misc_investment_expenses
}

/// Line 11: total deductions and modifications, line 9d plus line 10.
pub fn line_11_total_deductions_and_modifications(
    line_9d_total_investment_expenses: Decimal,
    line_10_additional_modifications: Decimal,
) -> Decimal {
    line_9d_total_investment_expenses + line_10_additional_modifications
}

/// Line 12: net investment income, line 8 less line 11.
pub fn line_12_net_investment_income(
    line_8_total_investment_income: Decimal,
    line_11_total_deductions_and_modifications: Decimal,
) -> Decimal {
    line_8_total_investment_income - line_11_total_deductions_and_modifications
}

/// Line 13: modified adjusted gross income, Form 1040 line 11.
pub fn line_13_modified_adjusted_gross_income(
    form_1040_line_11_adjusted_gross_income: Decimal,
) -> Decimal {
    form_1040_line_11_adjusted_gross_income
}

/// Line 15: modified AGI over the filing threshold, floored at zero.
pub fn line_15_modified_agi_over_threshold(
    line_13_modified_adjusted_gross_income: Decimal,
    policy: &NetInvestmentIncomeTax,
) -> Decimal {
    (line_13_modified_adjusted_gross_income - policy.threshold).max(Decimal::ZERO)
}

/// Line 16: smaller of net investment income or excess modified AGI.
pub fn line_16_smaller_of_line_12_or_15(
    line_12_net_investment_income: Decimal,
    line_15_modified_agi_over_threshold: Decimal,
) -> Decimal {
    line_12_net_investment_income.min(line_15_modified_agi_over_threshold)
}

/// Line 17: net investment income tax, line 16 times the NIIT rate.
pub fn line_17_net_investment_income_tax(
    line_16_smaller_of_line_12_or_15: Decimal,
    policy: &NetInvestmentIncomeTax,
) -> Decimal {
    round_to_dollars(line_16_smaller_of_line_12_or_15 * policy.rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use ten40_core::{FactItem, Facts, RawAmount};

    fn fact(amount: Decimal, tag: Tag) -> FactItem {
        FactItem {
            amount: RawAmount::Number(amount),
            tags: vec![tag],
            path: String::new(),
            explanation: String::new(),
        }
    }

    fn niit_policy() -> NetInvestmentIncomeTax {
        NetInvestmentIncomeTax {
            rate: dec!(0.038),
            threshold: dec!(250000),
        }
    }

    // ---- line 4b ----

    #[test]
    fn test_line_4b_negates_net_nonpassive_income() {
        // -(241001 - (0 + 1500 + 500)) = -239001
        assert_eq!(
            line_4b_adjustment_nonsection_1411(dec!(241001), dec!(0), dec!(1500), dec!(500)),
            dec!(-239001)
        );
    }

    #[test]
    fn test_line_4b_positive_when_deductions_exceed_income() {
        assert_eq!(
            line_4b_adjustment_nonsection_1411(dec!(1000), dec!(0), dec!(3000), dec!(0)),
            dec!(2000)
        );
    }

    // ---- line 8 ----

    #[test]
    fn test_line_8_sums_populated_components() {
        let income = InvestmentIncome {
            line_1_taxable_interest: dec!(301),
            line_2_ordinary_dividends: dec!(1234),
            line_4c_net_income_from_rentals: dec!(2000),
            line_5d_net_gain_loss_disposition: dec!(112002),
            ..InvestmentIncome::default()
        };
        assert_eq!(line_8_total_investment_income(&income), dec!(115537));
    }

    // ---- line 9 ----

    #[test]
    fn test_line_9b_applies_salt_cap() {
        let facts = Facts::from_items(vec![fact(
            dec!(45000),
            Tag::Form8960Line9bStateLocalForeignIncomeTax,
        )]);
        let index = facts.index();
        let policy = StateLocalTaxDeduction { cap: dec!(10000) };
        assert_eq!(
            line_9b_state_local_foreign_income_tax(&index, &policy).unwrap(),
            dec!(10000)
        );
    }

    #[test]
    fn test_line_9b_below_cap_passes_through() {
        let facts = Facts::from_items(vec![fact(
            dec!(4000.49),
            Tag::Form8960Line9bStateLocalForeignIncomeTax,
        )]);
        let index = facts.index();
        let policy = StateLocalTaxDeduction { cap: dec!(10000) };
        assert_eq!(
            line_9b_state_local_foreign_income_tax(&index, &policy).unwrap(),
            dec!(4000)
        );
    }

    // ---- lines 12 through 17 ----

    #[test]
    fn test_line_15_floors_at_zero() {
        assert_eq!(line_15_modified_agi_over_threshold(dec!(100000), &niit_policy()), dec!(0));
        assert_eq!(
            line_15_modified_agi_over_threshold(dec!(400000), &niit_policy()),
            dec!(150000)
        );
    }

    #[test]
    fn test_line_17_taxes_smaller_amount() {
        let line_12 = line_12_net_investment_income(dec!(115537), dec!(2000));
        let line_15 = line_15_modified_agi_over_threshold(dec!(400000), &niit_policy());
        let line_16 = line_16_smaller_of_line_12_or_15(line_12, line_15);
        assert_eq!(line_16, dec!(113537));
        // 113537 * 0.038 = 4314.406 -> 4314
        assert_eq!(line_17_net_investment_income_tax(line_16, &niit_policy()), dec!(4314));
    }
}
