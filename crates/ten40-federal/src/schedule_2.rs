//! # Schedule 2
//!
//! Additional taxes, Part II. Only self-employment tax, Additional
//! Medicare Tax, and net investment income tax are produced by earlier
//! forms; the remaining components of line 21 default to zero through
//! [`OtherTaxes`].

use rust_decimal::Decimal;

/// Components of Schedule 2 line 21, one field per Part II line.
#[derive(Clone, Debug, Default)]
pub struct OtherTaxes {
    pub line_4_self_employment_tax: Decimal,
    pub line_7_additional_ss_medicare_tax: Decimal,
    pub line_8_ira_tax: Decimal,
    pub line_9_household_employment_tax: Decimal,
    pub line_10_homebuyer_credit_repayment: Decimal,
    pub line_11_additional_medicare_tax: Decimal,
    pub line_12_net_investment_income_tax: Decimal,
    pub line_13_uncollected_ss_medicare_rrta: Decimal,
    pub line_14_installment_interest: Decimal,
    pub line_15_deferred_gain_interest: Decimal,
    pub line_16_low_income_housing_recapture: Decimal,
    pub line_18_recapture_net_epe: Decimal,
    pub line_19_section_965_installment: Decimal,
}

/// Line 12: net investment income tax from Form 8960 line 17.
pub fn line_12_net_investment_income_tax(
    form_8960_line_17_net_investment_income_tax: Decimal,
) -> Decimal {
    form_8960_line_17_net_investment_income_tax
}

/// Line 21: total other taxes, the sum of lines 4 through 19.
pub fn line_21_other_taxes(taxes: &OtherTaxes) -> Decimal {
    taxes.line_4_self_employment_tax
        + taxes.line_7_additional_ss_medicare_tax
        + taxes.line_8_ira_tax
        + taxes.line_9_household_employment_tax
        + taxes.line_10_homebuyer_credit_repayment
        + taxes.line_11_additional_medicare_tax
        + taxes.line_12_net_investment_income_tax
        + taxes.line_13_uncollected_ss_medicare_rrta
        + taxes.line_14_installment_interest
        + taxes.line_15_deferred_gain_interest
        + taxes.line_16_low_income_housing_recapture
        + taxes.line_18_recapture_net_epe
        + taxes.line_19_section_965_installment
}
