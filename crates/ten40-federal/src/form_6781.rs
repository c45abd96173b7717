//! # Form 6781
//!
//! Section 1256 contracts marked to market. Gains split 40% short-term
//! and 60% long-term regardless of holding period.

use rust_decimal::Decimal;

use ten40_core::{round_to_dollars, FactError, Tag, TagIndex};
use ten40_policy::Section1256;

/// Line 7: net gain or loss from section 1256 contracts.
pub fn line_7_total_gain_loss(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(index.total(&Tag::Section1256Contracts)?))
}

/// Line 8: short-term portion of the line 7 gain.
pub fn line_8_short_term_portion(
    line_7_total_gain_loss: Decimal,
    policy: &Section1256,
) -> Decimal {
    round_to_dollars(line_7_total_gain_loss * policy.short_term_rate)
}

/// Line 9: long-term portion of the line 7 gain.
pub fn line_9_long_term_portion(line_7_total_gain_loss: Decimal, policy: &Section1256) -> Decimal {
    round_to_dollars(line_7_total_gain_loss * policy.long_term_rate)
}
