//! # Form IT-201-ATT
//!
//! Other tax credits and taxes attachment to IT-201. Carries the
//! nonrefundable NYC UBT credit into IT-201 line 53 and accumulates
//! other refundable credits toward IT-201 line 71.

use rust_decimal::Decimal;

/// Line 8: NYC resident UBT credit from IT-219 line 16.
pub fn line_8_nyc_resident_ubt_credit(it219_line_16_resident_ubt_credit: Decimal) -> Decimal {
    it219_line_16_resident_ubt_credit
}

/// Line 10: total NYC nonrefundable credits. Lines 7 and 9 are zero for
/// this return, so line 10 equals line 8.
pub fn line_10_total_nyc_nonrefundable_credits(line_8_nyc_resident_ubt_credit: Decimal) -> Decimal {
    line_8_nyc_resident_ubt_credit
}

/// Line 12: other refundable credits.
pub fn line_12_other_refundable_credits(items: &[Decimal]) -> Decimal {
    items.iter().copied().sum()
}

/// Line 13: total refundable credits before certain NYC credits.
pub fn line_13_total_refundable_credits(line_12_other_refundable_credits: Decimal) -> Decimal {
    line_12_other_refundable_credits
}

/// Line 14: total refundable credits.
pub fn line_14_total_refundable_credits(line_13_total_refundable_credits: Decimal) -> Decimal {
    line_13_total_refundable_credits
}

/// Line 18: total other refundable credits, carried to IT-201 line 71.
pub fn line_18_total_other_refundable_credits(line_14_total_refundable_credits: Decimal) -> Decimal {
    line_14_total_refundable_credits
}
