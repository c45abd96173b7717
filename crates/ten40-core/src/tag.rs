//! # Tag Vocabulary
//!
//! The closed set of tags that route input amounts onto form lines. A tag
//! names the form line (or form-line family) that consumes the amount, in
//! snake_case: `form_1040_line_1z_wages`, `schedule_b_interest`, and so on.
//!
//! The vocabulary is closed on purpose. Input files are produced by hand
//! or by upstream extraction, and a misspelled tag must fail the load
//! rather than silently leave income off the return. The one open family
//! is U.S. government bond fund interest, where the fund name is part of
//! the tag: `ny_it_201_line_28_us_gov_bond_interest_items_<fund>`.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FactError;

/// Tag prefix for the per-fund U.S. government bond interest family.
pub const US_GOV_BOND_FUND_PREFIX: &str = "ny_it_201_line_28_us_gov_bond_interest_items_";

/// A recognized input tag.
///
/// Parsing accepts exactly the strings this enum renders; anything else is
/// a [`FactError::UnknownTag`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    // -- Federal Form 1040 direct lines and overrides --
    /// Wages from W-2 box 1; summed rounding each item.
    Form1040Line1zWages,
    /// Qualified dividends entering the capital gain worksheet.
    Form1040Line3aQualifiedDividends,
    /// Taxable pensions and annuities.
    Form1040Line5bPensions,
    /// Override for adjusted gross income; nonzero replaces the computed value.
    Form1040Line11AdjustedGrossIncome,
    /// Itemized deduction items; any present switch line 12 off the standard deduction.
    Form1040Line12Deductions,
    /// Qualified business income deduction taken directly.
    Form1040Line13QbiDeduction,
    /// Override for tax on taxable income; nonzero replaces the worksheet result.
    Form1040Line16Tax,
    /// Child tax credit.
    Form1040Line19ChildTaxCredit,
    /// Section 199A dividends from 1099-DIV box 5; contributes 20% to the QBI deduction.
    Form1099DivBox5Section199aDividends,
    /// Foreign tax credit claimed on Schedule 3 via Form 1116.
    Form1116ForeignTaxesPaid,
    /// Medicare wages from W-2 box 5, the Form 8959 wage base.
    W2Box5MedicareWages,

    // -- Schedule B --
    /// Taxable interest.
    ScheduleBInterest,
    /// Ordinary dividends.
    ScheduleBOrdinaryDividends,

    // -- Schedule D and investment gains --
    /// Short-term proceeds reported on line 1a.
    ScheduleDLine1aProceeds,
    /// Short-term cost basis reported on line 1a.
    ScheduleDLine1aCostBasis,
    /// Short-term gain adjustments reported on line 1a.
    ScheduleDLine1aAdjustments,
    /// Section 1061 carried-interest recharacterization; shifts short-term to long-term.
    ScheduleDSection1061Adjustment,
    /// Short-term capital gains passed through on K-1s.
    ScheduleDK1ShortTermGains,
    /// Long-term capital gains passed through on K-1s.
    ScheduleDK1LongTermGains,
    /// Section 1231 gains treated as long-term capital gain.
    Section1231Gains,
    /// Section 1256 contract gains subject to 40/60 treatment on Form 6781.
    Section1256Contracts,

    // -- Schedule E and K-1 pass-through --
    /// Nonpassive income from partnerships outside the MCTMT base tags.
    ScheduleENonpassiveIncome,
    /// Nonpassive losses allowed on line 29b column (i).
    ScheduleELine29bNonpassiveLossAllowed,
    /// Self-employment earnings from K-1 box 14a.
    ScheduleSeK1Box14aSelfEmploymentEarnings,
    /// Section 179 deduction from K-1 box 12.
    Section179Deduction,

    // -- Schedule 1 adjustments --
    /// Self-employed retirement plan contributions.
    Schedule1Line16SelfEmployedRetirement,
    /// Self-employed health insurance premiums.
    Schedule1Line17SelfEmployedHealthInsurance,

    // -- Form 8960 --
    /// Extra deductions excluded from net investment income on line 4b.
    Form8960Line4bAdditionalNonpassiveDeductions,
    /// Investment interest expense.
    Form8960Line9aInvestmentInterestExpense,
    /// State and local income tax allocable to investment income; capped by policy.
    Form8960Line9bStateLocalForeignIncomeTax,
    /// Miscellaneous investment expenses.
    Form8960Line9cMiscInvestmentExpenses,

    // -- MCTMT earnings bases --
    /// Ordinary business income subject to the MCTMT.
    MctmtBaseOrdinaryIncome,
    /// Guaranteed payments for services subject to the MCTMT.
    MctmtBaseGuaranteedPayments,

    // -- New York --
    /// Number of dependents claimed for the IT-201 exemption.
    NyDependentsCount,
    /// Public employee 414(h) retirement contributions added back on line 21.
    NyIt201Line21PublicEmployee414h,
    /// Nonqualified 529 distributions added back on line 22.
    NyIt201Line22Ny529Distributions,
    /// Other New York additions reported on IT-201-ATT line 12.
    NyIt201AttLine12Amount,
    /// New York addition modifications on IT-225 line 5a.
    NyIt225Line5aAddition,
    /// New York addition modifications on IT-225 line 5b.
    NyIt225Line5bAddition,
    /// Income taxed by another state, for the IT-112-R resident credit.
    NyIt112RLine22OtherStateIncome,
    /// Tax paid to another state, for the IT-112-R resident credit.
    NyIt112RLine24OtherStateTax,
    /// Beneficiary share of the NYC unincorporated business tax credit.
    NyIt219Line7UbtCredit,

    /// Interest from a named U.S. government bond fund; the exempt portion
    /// is the fund's policy percentage.
    UsGovBondFund(String),
}

impl Tag {
    /// Tag for interest from a named U.S. government bond fund.
    pub fn us_gov_bond_fund(fund: impl Into<String>) -> Tag {
        Tag::UsGovBondFund(fund.into())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Form1040Line1zWages => "form_1040_line_1z_wages",
            Tag::Form1040Line3aQualifiedDividends => "form_1040_line_3a_qualified_dividends",
            Tag::Form1040Line5bPensions => "form_1040_line_5b_pensions",
            Tag::Form1040Line11AdjustedGrossIncome => "form_1040_line_11_adjusted_gross_income",
            Tag::Form1040Line12Deductions => "form_1040_line_12_deductions",
            Tag::Form1040Line13QbiDeduction => "form_1040_line_13_qbi_deduction",
            Tag::Form1040Line16Tax => "form_1040_line_16_tax",
            Tag::Form1040Line19ChildTaxCredit => "form_1040_line_19_child_tax_credit",
            Tag::Form1099DivBox5Section199aDividends => {
                "form_1099_div_box_5_section_199a_dividends"
            }
            Tag::Form1116ForeignTaxesPaid => "form_1116_foreign_taxes_paid",
            Tag::W2Box5MedicareWages => "w2_box_5_medicare_wages",
            Tag::ScheduleBInterest => "schedule_b_interest",
            Tag::ScheduleBOrdinaryDividends => "schedule_b_ordinary_dividends",
            Tag::ScheduleDLine1aProceeds => "schedule_d_line_1a_proceeds",
            Tag::ScheduleDLine1aCostBasis => "schedule_d_line_1a_cost_basis",
            Tag::ScheduleDLine1aAdjustments => "schedule_d_line_1a_adjustments",
            Tag::ScheduleDSection1061Adjustment => "schedule_d_section_1061_adjustment",
            Tag::ScheduleDK1ShortTermGains => "schedule_d_k1_short_term_gains",
            Tag::ScheduleDK1LongTermGains => "schedule_d_k1_long_term_gains",
            Tag::Section1231Gains => "section_1231_gains",
            Tag::Section1256Contracts => "section_1256_contracts",
            Tag::ScheduleENonpassiveIncome => "schedule_e_nonpassive_income",
            Tag::ScheduleELine29bNonpassiveLossAllowed => {
                "schedule_e_line_29b_nonpassive_loss_allowed"
            }
            Tag::ScheduleSeK1Box14aSelfEmploymentEarnings => {
                "schedule_se_k1_box_14a_self_employment_earnings"
            }
            Tag::Section179Deduction => "section_179_deduction",
            Tag::Schedule1Line16SelfEmployedRetirement => {
                "schedule_1_line_16_self_employed_retirement"
            }
            Tag::Schedule1Line17SelfEmployedHealthInsurance => {
                "schedule_1_line_17_self_employed_health_insurance"
            }
            Tag::Form8960Line4bAdditionalNonpassiveDeductions => {
                "form_8960_line_4b_additional_nonpassive_deductions"
            }
            Tag::Form8960Line9aInvestmentInterestExpense => {
                "form_8960_line_9a_investment_interest_expense"
            }
            Tag::Form8960Line9bStateLocalForeignIncomeTax => {
                "form_8960_line_9b_state_local_foreign_income_tax"
            }
            Tag::Form8960Line9cMiscInvestmentExpenses => {
                "form_8960_line_9c_misc_investment_expenses"
            }
            Tag::MctmtBaseOrdinaryIncome => "mctmt_base_ordinary_income",
            Tag::MctmtBaseGuaranteedPayments => "mctmt_base_guaranteed_payments",
            Tag::NyDependentsCount => "ny_dependents_count",
            Tag::NyIt201Line21PublicEmployee414h => "ny_it_201_line_21_public_employee_414h",
            Tag::NyIt201Line22Ny529Distributions => "ny_it_201_line_22_ny_529_distributions",
            Tag::NyIt201AttLine12Amount => "ny_it_201_att_line_12_amount",
            Tag::NyIt225Line5aAddition => "ny_it_225_line_5a_addition",
            Tag::NyIt225Line5bAddition => "ny_it_225_line_5b_addition",
            Tag::NyIt112RLine22OtherStateIncome => "ny_it_112_r_line_22_other_state_income",
            Tag::NyIt112RLine24OtherStateTax => "ny_it_112_r_line_24_other_state_tax",
            Tag::NyIt219Line7UbtCredit => "ny_it_219_line_7_ubt_credit",
            Tag::UsGovBondFund(fund) => {
                return write!(f, "{US_GOV_BOND_FUND_PREFIX}{fund}");
            }
        };
        f.write_str(name)
    }
}

impl FromStr for Tag {
    type Err = FactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "form_1040_line_1z_wages" => Tag::Form1040Line1zWages,
            "form_1040_line_3a_qualified_dividends" => Tag::Form1040Line3aQualifiedDividends,
            "form_1040_line_5b_pensions" => Tag::Form1040Line5bPensions,
            "form_1040_line_11_adjusted_gross_income" => Tag::Form1040Line11AdjustedGrossIncome,
            "form_1040_line_12_deductions" => Tag::Form1040Line12Deductions,
            "form_1040_line_13_qbi_deduction" => Tag::Form1040Line13QbiDeduction,
            "form_1040_line_16_tax" => Tag::Form1040Line16Tax,
            "form_1040_line_19_child_tax_credit" => Tag::Form1040Line19ChildTaxCredit,
            "form_1099_div_box_5_section_199a_dividends" => {
                Tag::Form1099DivBox5Section199aDividends
            }
            "form_1116_foreign_taxes_paid" => Tag::Form1116ForeignTaxesPaid,
            "w2_box_5_medicare_wages" => Tag::W2Box5MedicareWages,
            "schedule_b_interest" => Tag::ScheduleBInterest,
            "schedule_b_ordinary_dividends" => Tag::ScheduleBOrdinaryDividends,
            "schedule_d_line_1a_proceeds" => Tag::ScheduleDLine1aProceeds,
            "schedule_d_line_1a_cost_basis" => Tag::ScheduleDLine1aCostBasis,
            "schedule_d_line_1a_adjustments" => Tag::ScheduleDLine1aAdjustments,
            "schedule_d_section_1061_adjustment" => Tag::ScheduleDSection1061Adjustment,
            "schedule_d_k1_short_term_gains" => Tag::ScheduleDK1ShortTermGains,
            "schedule_d_k1_long_term_gains" => Tag::ScheduleDK1LongTermGains,
            "section_1231_gains" => Tag::Section1231Gains,
            "section_1256_contracts" => Tag::Section1256Contracts,
            "schedule_e_nonpassive_income" => Tag::ScheduleENonpassiveIncome,
            "schedule_e_line_29b_nonpassive_loss_allowed" => {
                Tag::ScheduleELine29bNonpassiveLossAllowed
            }
            "schedule_se_k1_box_14a_self_employment_earnings" => {
                Tag::ScheduleSeK1Box14aSelfEmploymentEarnings
            }
            "section_179_deduction" => Tag::Section179Deduction,
            "schedule_1_line_16_self_employed_retirement" => {
                Tag::Schedule1Line16SelfEmployedRetirement
            }
            "schedule_1_line_17_self_employed_health_insurance" => {
                Tag::Schedule1Line17SelfEmployedHealthInsurance
            }
            "form_8960_line_4b_additional_nonpassive_deductions" => {
                Tag::Form8960Line4bAdditionalNonpassiveDeductions
            }
            "form_8960_line_9a_investment_interest_expense" => {
                Tag::Form8960Line9aInvestmentInterestExpense
            }
            "form_8960_line_9b_state_local_foreign_income_tax" => {
                Tag::Form8960Line9bStateLocalForeignIncomeTax
            }
            "form_8960_line_9c_misc_investment_expenses" => {
                Tag::Form8960Line9cMiscInvestmentExpenses
            }
            "mctmt_base_ordinary_income" => Tag::MctmtBaseOrdinaryIncome,
            "mctmt_base_guaranteed_payments" => Tag::MctmtBaseGuaranteedPayments,
            "ny_dependents_count" => Tag::NyDependentsCount,
            "ny_it_201_line_21_public_employee_414h" => Tag::NyIt201Line21PublicEmployee414h,
            "ny_it_201_line_22_ny_529_distributions" => Tag::NyIt201Line22Ny529Distributions,
            "ny_it_201_att_line_12_amount" => Tag::NyIt201AttLine12Amount,
            "ny_it_225_line_5a_addition" => Tag::NyIt225Line5aAddition,
            "ny_it_225_line_5b_addition" => Tag::NyIt225Line5bAddition,
            "ny_it_112_r_line_22_other_state_income" => Tag::NyIt112RLine22OtherStateIncome,
            "ny_it_112_r_line_24_other_state_tax" => Tag::NyIt112RLine24OtherStateTax,
            "ny_it_219_line_7_ubt_credit" => Tag::NyIt219Line7UbtCredit,
            other => {
                if let Some(fund) = other.strip_prefix(US_GOV_BOND_FUND_PREFIX) {
                    if !fund.is_empty() {
                        return Ok(Tag::UsGovBondFund(fund.to_string()));
                    }
                }
                return Err(FactError::UnknownTag(other.to_string()));
            }
        };
        Ok(tag)
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
