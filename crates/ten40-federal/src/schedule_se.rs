//! # Schedule SE
//!
//! Self-employment tax on partnership K-1 earnings. The simplified path
//! assumes no farm income, no church wages, and no W-2 social security
//! wages, so line 9 equals the full wage base.

use rust_decimal::Decimal;

use ten40_core::round_to_dollars;
use ten40_policy::SelfEmploymentTax;

/// Line 2: net self-employment profit, K-1 box 14a earnings less the
/// K-1 box 12 section 179 deduction.
pub fn line_2_schedule_c_and_k1_profit(
    k1_box_14a_self_employment_earnings: Decimal,
    k1_box_12_section_179_deduction: Decimal,
) -> Decimal {
    k1_box_14a_self_employment_earnings - k1_box_12_section_179_deduction
}

/// Line 6: earnings subject to self-employment tax.
///
/// A profit is multiplied by the earnings factor (92.35% in 2024) and
/// rounded; a zero or negative line 2 passes through untouched, keeping
/// losses whole.
pub fn line_6_total_se_earnings(
    line_2_schedule_c_and_k1_profit: Decimal,
    policy: &SelfEmploymentTax,
) -> Decimal {
    if line_2_schedule_c_and_k1_profit > Decimal::ZERO {
        return round_to_dollars(line_2_schedule_c_and_k1_profit * policy.earnings_factor);
    }
    line_2_schedule_c_and_k1_profit
}

/// Line 10: social security portion, capped at the wage base.
pub fn line_10_social_security_tax(
    line_6_self_employment_earnings: Decimal,
    policy: &SelfEmploymentTax,
) -> Decimal {
    let taxable = line_6_self_employment_earnings.min(policy.social_security_wage_base);
    round_to_dollars(taxable * policy.social_security_rate)
}

/// Line 11: Medicare portion. No wage base cap applies.
pub fn line_11_medicare_tax(
    line_6_self_employment_earnings: Decimal,
    policy: &SelfEmploymentTax,
) -> Decimal {
    round_to_dollars(line_6_self_employment_earnings * policy.medicare_rate)
}

/// Line 12: total self-employment tax, line 10 plus line 11.
pub fn line_12_self_employment_tax(
    line_10_social_security_portion: Decimal,
    line_11_medicare_portion: Decimal,
) -> Decimal {
    line_10_social_security_portion + line_11_medicare_portion
}
