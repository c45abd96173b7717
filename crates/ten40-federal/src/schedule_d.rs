//! # Schedule D
//!
//! Capital gains and losses. Short-term Part I and long-term Part II,
//! fed by broker 1099-Bs, K-1 passthroughs, Form 6781 splits, and
//! section 1061 recharacterizations.
//!
//! The section 1061 carried-interest adjustment moves gain from
//! long-term to short-term: it lands positive on line 3 and negative on
//! line 10, so line 16 is unchanged by it.

use rust_decimal::Decimal;

use ten40_core::{round_to_dollars, FactError, Tag, TagIndex};

/// Line 1a: short-term gain from broker transactions, proceeds less
/// cost basis plus adjustments.
pub fn line_1a_short_term_gain(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    let proceeds = index.total(&Tag::ScheduleDLine1aProceeds)?;
    let cost_basis = index.total(&Tag::ScheduleDLine1aCostBasis)?;
    let mut total = proceeds - cost_basis;
    total += index.total(&Tag::ScheduleDLine1aAdjustments)?;
    Ok(round_to_dollars(total))
}

/// Line 3: short-term section 1061 adjustment.
pub fn line_3_short_term_section_1061_adjustment(
    index: &TagIndex<'_>,
) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(
        index.total(&Tag::ScheduleDSection1061Adjustment)?,
    ))
}

/// Line 4: short-term gain from Form 6781 line 8.
pub fn line_4_short_term_from_6781(form_6781_line_8_short_term_portion: Decimal) -> Decimal {
    form_6781_line_8_short_term_portion
}

/// Line 5: short-term gain from Schedule K-1s.
pub fn line_5_short_term_k1_gain(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(index.total(&Tag::ScheduleDK1ShortTermGains)?))
}

/// Line 7: net short-term capital gain.
pub fn line_7_net_short_term_gain(
    line_1a_short_term_gain: Decimal,
    line_3_section_1061_adjustment: Decimal,
    line_4_short_term_from_6781: Decimal,
    line_5_short_term_k1_gain: Decimal,
    line_6_short_term_loss_carryover: Decimal,
) -> Decimal {
    line_1a_short_term_gain
        + line_3_section_1061_adjustment
        + line_4_short_term_from_6781
        + line_5_short_term_k1_gain
        + line_6_short_term_loss_carryover
}

/// Line 10: long-term section 1061 adjustment, the negative of line 3.
pub fn line_10_long_term_section_1061_adjustment(
    index: &TagIndex<'_>,
) -> Result<Decimal, FactError> {
    Ok(-round_to_dollars(
        index.total(&Tag::ScheduleDSection1061Adjustment)?,
    ))
}

/// Line 11: long-term gain from Form 6781 line 9 and section 1231 gains
/// from Form 4797.
pub fn line_11_long_term_from_6781_and_4797(
    form_6781_line_9_long_term_portion: Decimal,
    index: &TagIndex<'_>,
) -> Result<Decimal, FactError> {
    let total_section_1231 = index.total(&Tag::Section1231Gains)?;
    Ok(round_to_dollars(
        form_6781_line_9_long_term_portion + total_section_1231,
    ))
}

/// Line 12: long-term gain from Schedule K-1s.
pub fn line_12_long_term_k1_gain(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(index.total(&Tag::ScheduleDK1LongTermGains)?))
}

/// Line 15: net long-term capital gain.
pub fn line_15_net_long_term_gain(
    line_10_section_1061_adjustment: Decimal,
    line_11_from_6781_and_4797: Decimal,
    line_12_long_term_k1_gain: Decimal,
) -> Decimal {
    line_10_section_1061_adjustment + line_11_from_6781_and_4797 + line_12_long_term_k1_gain
}

/// Line 16: net capital gain, line 7 plus line 15.
pub fn line_16_net_capital_gain(
    line_7_net_short_term_gain: Decimal,
    line_15_net_long_term_gain: Decimal,
) -> Decimal {
    line_7_net_short_term_gain + line_15_net_long_term_gain
}
