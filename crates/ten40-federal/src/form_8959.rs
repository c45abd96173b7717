//! # Form 8959
//!
//! Additional Medicare Tax. Wages and self-employment earnings share a
//! single threshold: the wage portion consumes it first and only the
//! remainder shelters self-employment income.

use rust_decimal::Decimal;

use ten40_core::round_to_dollars;
use ten40_policy::AdditionalMedicareTax;

/// Line 18: total Additional Medicare Tax across wages and
/// self-employment income.
///
/// Part I taxes Medicare wages (W-2 box 5) above the threshold. Part II
/// taxes self-employment earnings above whatever threshold is left after
/// wages. Part III (RRTA compensation) is not supported and contributes
/// zero.
pub fn line_18_total_additional_medicare_tax(
    w2_medicare_wages: Decimal,
    schedule_se_line_6_se_earnings: Decimal,
    policy: &AdditionalMedicareTax,
) -> Decimal {
    let wage_excess = (w2_medicare_wages - policy.threshold).max(Decimal::ZERO);
    let part_1 = round_to_dollars(wage_excess * policy.rate);

    let remaining_threshold = (policy.threshold - w2_medicare_wages).max(Decimal::ZERO);
    let se_excess = (schedule_se_line_6_se_earnings - remaining_threshold).max(Decimal::ZERO);
    let part_2 = round_to_dollars(se_excess * policy.rate);

    part_1 + part_2 + Decimal::ZERO
}
