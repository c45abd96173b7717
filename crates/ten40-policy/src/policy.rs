//! # Policy
//!
//! The complete parameter set for one tax year and filing status. Every
//! section is required; a policy file missing a section or a field fails
//! to load with the field named in the error.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::schedule::{RateSchedule, TaxComputationWorksheet};

/// Schedule SE parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct SelfEmploymentTax {
    /// Portion of self-employment profit subject to tax, 0.9235 on the
    /// 2024 form.
    pub earnings_factor: Decimal,
    /// Ceiling on earnings subject to the social security portion.
    pub social_security_wage_base: Decimal,
    pub social_security_rate: Decimal,
    pub medicare_rate: Decimal,
}

/// Form 8959 parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct AdditionalMedicareTax {
    pub rate: Decimal,
    /// Filing-status threshold shared by the wage and self-employment
    /// parts of the form.
    pub threshold: Decimal,
}

/// Form 8960 parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct NetInvestmentIncomeTax {
    pub rate: Decimal,
    /// Modified AGI threshold for the filing status.
    pub threshold: Decimal,
}

/// Cap on the state and local income tax allocable to investment income
/// on Form 8960 line 9b, and on the SALT portion of itemized deductions.
#[derive(Clone, Debug, Deserialize)]
pub struct StateLocalTaxDeduction {
    pub cap: Decimal,
}

/// Qualified Dividends and Capital Gain Tax Worksheet parameters.
#[derive(Clone, Debug, Deserialize)]
pub struct CapitalGains {
    /// Top of the 0% preferential bracket for the filing status.
    pub zero_rate_threshold: Decimal,
    /// Top of the 15% preferential bracket for the filing status.
    pub twenty_rate_threshold: Decimal,
    pub rate_15: Decimal,
    pub rate_20: Decimal,
}

/// Form 6781 split of section 1256 contract gains.
#[derive(Clone, Debug, Deserialize)]
pub struct Section1256 {
    pub short_term_rate: Decimal,
    pub long_term_rate: Decimal,
}

/// MCTMT rate by zone. Only zone 1 is carried.
#[derive(Clone, Debug, Deserialize)]
pub struct MctmtRates {
    pub zone_1: Decimal,
}

/// MCTMT net earnings parameters for IT-2105.9 worksheet 4a.
#[derive(Clone, Debug, Deserialize)]
pub struct MctmtEarnings {
    /// Portion of the earnings base counted as net earnings, mirroring
    /// the Schedule SE factor.
    pub earnings_factor: Decimal,
}

/// IT-219 line 10 income factor interpolation bounds.
#[derive(Clone, Debug, Deserialize)]
pub struct It219IncomeFactor {
    pub lower_threshold: Decimal,
    pub upper_threshold: Decimal,
    /// Factor at or below the lower threshold.
    pub lower_factor: Decimal,
    /// Factor at or above the upper threshold.
    pub upper_factor: Decimal,
}

/// Constants for IT-201 statement 2, tax computation worksheet 4.
#[derive(Clone, Debug, Deserialize)]
pub struct TaxComputationWorksheet4 {
    pub recapture_base_amount: Decimal,
    pub incremental_benefit_addback: Decimal,
}

/// All parameters for one tax year and filing status.
#[derive(Clone, Debug, Deserialize)]
pub struct Policy {
    pub self_employment_tax: SelfEmploymentTax,
    pub additional_medicare_tax: AdditionalMedicareTax,
    pub net_investment_income_tax: NetInvestmentIncomeTax,
    pub state_local_tax_deduction: StateLocalTaxDeduction,
    pub standard_deduction: Decimal,
    pub tax_computation_worksheet: TaxComputationWorksheet,
    pub capital_gains: CapitalGains,
    pub section_1256: Section1256,
    pub ny_nys_tax_rate_schedule: RateSchedule,
    pub nyc_resident_tax_rate_schedule: RateSchedule,
    pub ny_standard_deduction: Decimal,
    pub ny_dependent_exemption_amount: Decimal,
    pub ny_mctmt_rates: MctmtRates,
    pub ny_mctmt: MctmtEarnings,
    /// Exempt-interest percentage by fund name, keyed the way the fund
    /// appears in the bond interest tag suffix.
    pub ny_us_gov_bond_interest_percentages: BTreeMap<String, Decimal>,
    pub ny_it219_income_factor: It219IncomeFactor,
    pub ny_tax_computation_worksheet_4: TaxComputationWorksheet4,
}
