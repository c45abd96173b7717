//! # Form IT-2105.9 worksheet 4a
//!
//! Metropolitan commuter transportation mobility tax net earnings base
//! for self-employed individuals in MCTD Zone 1. The inputs are assumed
//! to be Zone 1-eligible already; no allocation is applied here.

use rust_decimal::Decimal;

use ten40_core::round_to_dollars;
use ten40_policy::MctmtEarnings;

/// One partnership's contribution to the MCTMT earnings base.
#[derive(Clone, Debug, PartialEq)]
pub struct MctmtEarningsItem {
    pub ordinary_business_income: Decimal,
    pub guaranteed_payments_services: Decimal,
}

/// Worksheet 4a line 1: net earnings from self-employment in Zone 1.
/// Each item's ordinary income plus guaranteed payments is scaled by
/// the earnings factor, with a single rounding of the total.
pub fn worksheet_4a_line_1_net_earnings_zone_1(
    items: &[MctmtEarningsItem],
    earnings: &MctmtEarnings,
) -> Decimal {
    let total: Decimal = items
        .iter()
        .map(|item| {
            (item.ordinary_business_income + item.guaranteed_payments_services)
                * earnings.earnings_factor
        })
        .sum();
    round_to_dollars(total)
}
