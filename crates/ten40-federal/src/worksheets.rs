//! # Form 1040 Worksheets
//!
//! The Qualified Dividends and Capital Gain Tax Worksheet from the Form
//! 1040 instructions. Ordinary income is taxed through the Tax
//! Computation Worksheet; preferential income fills the 0%, 15%, and
//! 20% brackets in order.

use rust_decimal::Decimal;

use ten40_core::round_to_dollars;
use ten40_policy::{CapitalGains, PolicyError, TaxComputationWorksheet};

fn lines_3_to_5(
    line_1_taxable_income: Decimal,
    line_2_qualified_dividends: Decimal,
    schedule_d_line_15: Decimal,
    schedule_d_line_16: Decimal,
) -> (Decimal, Decimal, Decimal) {
    let mut line_3 = Decimal::ZERO;
    if schedule_d_line_15 > Decimal::ZERO && schedule_d_line_16 > Decimal::ZERO {
        line_3 = schedule_d_line_15.min(schedule_d_line_16);
    }
    let line_4 = line_2_qualified_dividends + line_3;
    let line_5 = (line_1_taxable_income - line_4).max(Decimal::ZERO);
    (line_3, line_4, line_5)
}

/// Worksheet line 22: Tax Computation Worksheet tax on line 5, the
/// ordinary-rate portion of taxable income.
pub fn line_22_tax_on_line_5(
    line_1_taxable_income: Decimal,
    line_2_qualified_dividends: Decimal,
    schedule_d_line_15: Decimal,
    schedule_d_line_16: Decimal,
    worksheet: &TaxComputationWorksheet,
) -> Result<Decimal, PolicyError> {
    let (_, _, line_5) = lines_3_to_5(
        line_1_taxable_income,
        line_2_qualified_dividends,
        schedule_d_line_15,
        schedule_d_line_16,
    );
    worksheet.tax(line_5)
}

/// Worksheet line 24: Tax Computation Worksheet tax on all of line 1.
pub fn line_24_tax_on_line_1(
    line_1_taxable_income: Decimal,
    worksheet: &TaxComputationWorksheet,
) -> Result<Decimal, PolicyError> {
    worksheet.tax(line_1_taxable_income)
}

/// Worksheet line 25: tax on all taxable income, the smaller of the
/// split computation (line 23) and ordinary rates on everything
/// (line 24).
pub fn line_25_tax_on_all_income(
    line_1_taxable_income: Decimal,
    line_2_qualified_dividends: Decimal,
    schedule_d_line_15: Decimal,
    schedule_d_line_16: Decimal,
    worksheet: &TaxComputationWorksheet,
    capital_gains: &CapitalGains,
) -> Result<Decimal, PolicyError> {
    let (_, line_4, line_5) = lines_3_to_5(
        line_1_taxable_income,
        line_2_qualified_dividends,
        schedule_d_line_15,
        schedule_d_line_16,
    );
    let line_22_tax_on_line_5 = line_22_tax_on_line_5(
        line_1_taxable_income,
        line_2_qualified_dividends,
        schedule_d_line_15,
        schedule_d_line_16,
        worksheet,
    )?;
    let line_24_tax_on_line_1 = line_24_tax_on_line_1(line_1_taxable_income, worksheet)?;

    // Lines 6 through 9 fill the 0% bracket.
    let line_7 = line_1_taxable_income.min(capital_gains.zero_rate_threshold);
    let line_8 = line_5.min(line_7);
    let line_9 = line_7 - line_8;

    let line_10 = line_1_taxable_income.min(line_4);
    let line_12 = line_10 - line_9;

    // Lines 13 through 18 fill the 15% bracket.
    let line_14 = line_1_taxable_income.min(capital_gains.twenty_rate_threshold);
    let line_15 = line_5 + line_9;
    let line_16 = (line_14 - line_15).max(Decimal::ZERO);
    let line_17 = line_12.min(line_16);
    let line_18 = round_to_dollars(line_17 * capital_gains.rate_15);

    // Lines 19 through 21 tax the remainder at 20%.
    let line_19 = line_9 + line_17;
    let line_20 = line_10 - line_19;
    let line_21 = round_to_dollars(line_20 * capital_gains.rate_20);

    let line_23 = round_to_dollars(line_18 + line_21 + line_22_tax_on_line_5);
    Ok(line_23.min(line_24_tax_on_line_1))
}
