//! # Form IT-225
//!
//! New York State modifications. Additions only: Part 1 (modifications
//! to federal AGI) and Part 2 (partnership flow-through modifications),
//! totaled on line 9 and carried to IT-201 line 23.
//!
//! Item sums are left unrounded; IT-201 line 24 carries them as-is.

use rust_decimal::Decimal;

/// Line 1a: Part 1 addition items.
pub fn line_1a_additions(items: &[Decimal]) -> Decimal {
    items.iter().copied().sum()
}

/// Line 2: total of lines 1a through 1g. Lines 1b through 1g are zero
/// for this return.
pub fn line_2_total_part1_additions(line_1a_additions: Decimal) -> Decimal {
    line_1a_additions
}

/// Line 4: line 2 plus line 3. Line 3 (additional forms) is zero for
/// this return.
pub fn line_4_total_part1_additions(line_2_total_part1_additions: Decimal) -> Decimal {
    line_2_total_part1_additions
}

/// Line 5a: Part 2 addition items.
pub fn line_5a_additions(items: &[Decimal]) -> Decimal {
    items.iter().copied().sum()
}

/// Line 5b: Part 2 addition items.
pub fn line_5b_additions(items: &[Decimal]) -> Decimal {
    items.iter().copied().sum()
}

/// Line 6: total of lines 5a through 5g. Lines 5c through 5g are zero
/// for this return.
pub fn line_6_total_part2_additions(
    line_5a_additions: Decimal,
    line_5b_additions: Decimal,
) -> Decimal {
    line_5a_additions + line_5b_additions
}

/// Line 8: line 6 plus line 7. Line 7 (additional forms) is zero for
/// this return.
pub fn line_8_total_part2_additions(line_6_total_part2_additions: Decimal) -> Decimal {
    line_6_total_part2_additions
}

/// Line 9: total additions, line 4 plus line 8.
pub fn line_9_total_additions(
    line_4_total_part1_additions: Decimal,
    line_8_total_part2_additions: Decimal,
) -> Decimal {
    line_4_total_part1_additions + line_8_total_part2_additions
}
