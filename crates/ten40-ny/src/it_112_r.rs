//! # Form IT-112-R
//!
//! New York State resident credit for income taxes paid to another
//! state. The credit is the other state's tax, limited to the share of
//! New York tax attributable to the doubly-taxed income, and never more
//! than the New York tax itself.

use rust_decimal::Decimal;

use ten40_core::{round_to_dollars, round_to_four_places};

/// Line 22 column A: total income, New York AGI from IT-201 line 33.
pub fn line_22_total_income(line_33_ny_adjusted_gross_income: Decimal) -> Decimal {
    line_33_ny_adjusted_gross_income
}

/// Line 22 column B: income sourced to and taxed by the other state.
pub fn line_22_other_state_income(items: &[Decimal]) -> Decimal {
    items.iter().copied().sum()
}

/// Line 24: income tax imposed by the other state.
pub fn line_24_total_other_state_tax(items: &[Decimal]) -> Decimal {
    items.iter().copied().sum()
}

/// Line 26: other-state income as a share of total income, rounded to
/// four decimal places. Zero total income yields a zero ratio rather
/// than a division error.
pub fn line_26_ratio(
    line_22_total_income: Decimal,
    line_22_other_state_income: Decimal,
) -> Decimal {
    if line_22_total_income == Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_to_four_places(line_22_other_state_income / line_22_total_income)
}

/// Line 27: New York tax payable times the line 26 ratio.
pub fn line_27_ny_tax_times_ratio(line_25_ny_tax_payable: Decimal, line_26_ratio: Decimal) -> Decimal {
    round_to_dollars(line_25_ny_tax_payable * line_26_ratio)
}

/// Line 28: smaller of the other state's tax or the New York share.
pub fn line_28_smaller_of_line24_or_27(
    line_24_total_other_state_tax: Decimal,
    line_27_ny_tax_times_ratio: Decimal,
) -> Decimal {
    line_24_total_other_state_tax.min(line_27_ny_tax_times_ratio)
}

/// Line 30: total credit. Line 29 (additional IT-112-R or IT-112-C
/// forms) is zero for this return.
pub fn line_30_total_credit(line_28_smaller_of_line24_or_27: Decimal) -> Decimal {
    line_28_smaller_of_line24_or_27
}

/// Line 34: resident credit allowed, capped at New York tax payable.
/// Line 32 is zero for this return, so line 33 equals line 25.
pub fn line_34_resident_credit(
    line_30_total_credit: Decimal,
    line_25_ny_tax_payable: Decimal,
) -> Decimal {
    line_30_total_credit.min(line_25_ny_tax_payable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ---- ratio ----

    #[test]
    fn test_line_26_rounds_to_four_places() {
        // 50000 / 134000 = 0.37313432... -> 0.3731
        assert_eq!(line_26_ratio(dec!(134000), dec!(50000)), dec!(0.3731));
    }

    #[test]
    fn test_line_26_zero_income_yields_zero() {
        assert_eq!(line_26_ratio(dec!(0), dec!(50000)), dec!(0));
    }

    #[test]
    fn test_line_26_rounds_ties_up() {
        // 1 / 8000 = 0.000125 -> 0.0001 at four places, tie away from zero.
        assert_eq!(line_26_ratio(dec!(8000), dec!(1)), dec!(0.0001));
    }

    // ---- credit ----

    #[test]
    fn test_line_27_scales_ny_tax_by_ratio() {
        // 7640 * 0.3731 = 2850.484 -> 2850
        assert_eq!(line_27_ny_tax_times_ratio(dec!(7640), dec!(0.3731)), dec!(2850));
    }

    #[test]
    fn test_credit_limited_to_other_state_tax() {
        let line_28 = line_28_smaller_of_line24_or_27(dec!(1800), dec!(2850));
        assert_eq!(line_28, dec!(1800));
        let line_34 = line_34_resident_credit(line_30_total_credit(line_28), dec!(7640));
        assert_eq!(line_34, dec!(1800));
    }

    #[test]
    fn test_credit_never_exceeds_ny_tax() {
        let line_34 = line_34_resident_credit(dec!(9000), dec!(7640));
        assert_eq!(line_34, dec!(7640));
    }
}
