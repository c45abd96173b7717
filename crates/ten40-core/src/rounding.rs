//! # Rounding
//!
//! Half-up rounding rules shared by every line computation. Form amounts
//! round to whole dollars; the two ratio lines (IT-112-R line 26 and
//! IT-219 line 10) round to four decimal places. Ties round away from
//! zero for negative amounts as well, so a loss of -2.50 rounds to -3.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to whole dollars, ties away from zero.
///
/// Idempotent: rounding an already-rounded amount is a no-op.
pub fn round_to_dollars(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a ratio or factor to four decimal places, ties away from zero.
pub fn round_to_four_places(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}
