//! # Schedule 1
//!
//! Additional income (Part I) and adjustments to income (Part II).

use rust_decimal::Decimal;

use ten40_core::{round_to_dollars, FactError, Tag, TagIndex};

/// Line 5: rental real estate and partnership income, Schedule E line 32.
pub fn line_5_rental_real_estate_income(
    schedule_e_line_32_total_partnership_income: Decimal,
) -> Decimal {
    schedule_e_line_32_total_partnership_income
}

/// Line 10: total additional income.
pub fn line_10_additional_income(
    line_5_rental_real_estate_income: Decimal,
    other_additional_income: Decimal,
) -> Decimal {
    round_to_dollars(line_5_rental_real_estate_income + other_additional_income)
}

/// Line 15: deductible half of self-employment tax.
pub fn line_15_deductible_self_employment_tax(
    schedule_se_line_12_self_employment_tax: Decimal,
) -> Decimal {
    round_to_dollars(schedule_se_line_12_self_employment_tax / Decimal::TWO)
}

/// Line 16: self-employed SEP, SIMPLE, and qualified plan contributions.
pub fn line_16_self_employed_retirement_contributions(
    index: &TagIndex<'_>,
) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(
        index.total(&Tag::Schedule1Line16SelfEmployedRetirement)?,
    ))
}

/// Line 17: self-employed health insurance deduction.
pub fn line_17_self_employed_health_insurance(
    index: &TagIndex<'_>,
) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(
        index.total(&Tag::Schedule1Line17SelfEmployedHealthInsurance)?,
    ))
}

/// Line 26: total adjustments to income.
pub fn line_26_adjustments_to_income(
    line_15_deductible_self_employment_tax: Decimal,
    line_16_self_employed_retirement_contributions: Decimal,
    line_17_self_employed_health_insurance: Decimal,
    other_adjustments: Decimal,
) -> Decimal {
    round_to_dollars(
        line_15_deductible_self_employment_tax
            + line_16_self_employed_retirement_contributions
            + line_17_self_employed_health_insurance
            + other_adjustments,
    )
}
