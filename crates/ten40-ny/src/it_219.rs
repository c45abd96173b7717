//! # Form IT-219
//!
//! Credit for New York City unincorporated business tax paid. The
//! allowed credit scales a beneficiary's share of UBT by an income
//! factor that phases down between two taxable income thresholds.

use rust_decimal::Decimal;

use ten40_core::{round_to_dollars, round_to_four_places};
use ten40_policy::It219IncomeFactor;

/// Line 7: beneficiary share of NYC UBT credit.
pub fn line_7_beneficiary_ubt_credit(items: &[Decimal]) -> Decimal {
    items.iter().copied().sum()
}

/// Line 8: total UBT credit. Lines 5 and 6 are zero for this return,
/// so line 8 equals line 7.
pub fn line_8_total_ubt_credit(line_7_beneficiary_ubt_credit: Decimal) -> Decimal {
    line_7_beneficiary_ubt_credit
}

/// Line 9: taxable income for the credit factor, IT-201 line 47.
pub fn line_9_taxable_income(line_47_nyc_taxable_income: Decimal) -> Decimal {
    line_47_nyc_taxable_income
}

/// Line 10: income factor. Incomes at or below the lower threshold take
/// the lower factor, at or above the upper threshold the upper factor,
/// and in between a linear interpolation rounded to four places.
pub fn line_10_income_factor(line_9_taxable_income: Decimal, factor: &It219IncomeFactor) -> Decimal {
    if line_9_taxable_income <= factor.lower_threshold {
        return factor.lower_factor;
    }
    if line_9_taxable_income >= factor.upper_threshold {
        return factor.upper_factor;
    }
    let slope = (factor.upper_factor - factor.lower_factor)
        / (factor.upper_threshold - factor.lower_threshold);
    round_to_four_places(
        factor.lower_factor + (line_9_taxable_income - factor.lower_threshold) * slope,
    )
}

/// Line 11: income-based credit, line 8 times the line 10 factor.
pub fn line_11_income_based_credit(
    line_8_total_ubt_credit: Decimal,
    line_10_income_factor: Decimal,
) -> Decimal {
    round_to_dollars(line_8_total_ubt_credit * line_10_income_factor)
}

/// Line 15: NYC tax available to absorb the credit, IT-201 line 49.
pub fn line_15_total_tax(line_49_nyc_tax_after_household_credit: Decimal) -> Decimal {
    line_49_nyc_tax_after_household_credit
}

/// Line 16: resident UBT credit, the smaller of the income-based credit
/// and the NYC tax.
pub fn line_16_resident_ubt_credit(
    line_11_income_based_credit: Decimal,
    line_15_total_tax: Decimal,
) -> Decimal {
    line_11_income_based_credit.min(line_15_total_tax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn factor() -> It219IncomeFactor {
        It219IncomeFactor {
            lower_threshold: dec!(42000),
            upper_threshold: dec!(142000),
            lower_factor: dec!(1.00),
            upper_factor: dec!(0.23),
        }
    }

    // ---- income factor ----

    #[test]
    fn test_factor_at_or_below_lower_threshold() {
        assert_eq!(line_10_income_factor(dec!(42000), &factor()), dec!(1.00));
        assert_eq!(line_10_income_factor(dec!(10000), &factor()), dec!(1.00));
    }

    #[test]
    fn test_factor_at_or_above_upper_threshold() {
        assert_eq!(line_10_income_factor(dec!(142000), &factor()), dec!(0.23));
        assert_eq!(line_10_income_factor(dec!(500000), &factor()), dec!(0.23));
    }

    #[test]
    fn test_factor_interpolates_between_thresholds() {
        // Midpoint: 1.00 + 50000 * (0.23 - 1.00) / 100000 = 0.615
        assert_eq!(line_10_income_factor(dec!(92000), &factor()), dec!(0.6150));
        // 134000: 1.00 + 92000 * -0.0000077 = 0.2916
        assert_eq!(line_10_income_factor(dec!(134000), &factor()), dec!(0.2916));
    }

    // ---- credit ----

    #[test]
    fn test_line_11_scales_credit_by_factor() {
        assert_eq!(line_11_income_based_credit(dec!(5000), dec!(0.2916)), dec!(1458));
    }

    #[test]
    fn test_line_16_capped_at_nyc_tax() {
        assert_eq!(line_16_resident_ubt_credit(dec!(1458), dec!(4540)), dec!(1458));
        assert_eq!(line_16_resident_ubt_credit(dec!(6000), dec!(4540)), dec!(4540));
    }

    #[test]
    fn test_line_7_sums_items() {
        assert_eq!(
            line_7_beneficiary_ubt_credit(&[dec!(3000), dec!(2000)]),
            dec!(5000)
        );
        assert_eq!(line_7_beneficiary_ubt_credit(&[]), dec!(0));
    }
}
