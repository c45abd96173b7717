//! # Schedule B
//!
//! Interest and ordinary dividends. Each part is a rounded total of the
//! matching input facts.

use rust_decimal::Decimal;

use ten40_core::{round_to_dollars, FactError, Tag, TagIndex};

/// Line 1: taxable interest.
pub fn line_1_taxable_interest(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(index.total(&Tag::ScheduleBInterest)?))
}

/// Line 6: ordinary dividends.
pub fn line_6_ordinary_dividends(index: &TagIndex<'_>) -> Result<Decimal, FactError> {
    Ok(round_to_dollars(index.total(&Tag::ScheduleBOrdinaryDividends)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use ten40_core::{FactItem, Facts, RawAmount};

    fn fact(amount: Decimal, tag: Tag) -> FactItem {
        FactItem {
            amount: RawAmount::Number(amount),
            tags: vec![tag],
            path: String::new(),
            explanation: String::new(),
        }
    }

    // ---- totals ----

    #[test]
    fn test_line_1_rounds_summed_interest() {
        let facts = Facts::from_items(vec![
            fact(dec!(100.25), Tag::ScheduleBInterest),
            fact(dec!(200.25), Tag::ScheduleBInterest),
        ]);
        let index = facts.index();
        // Sum 300.50 rounds half-up to 301.
        assert_eq!(line_1_taxable_interest(&index).unwrap(), dec!(301));
    }

    #[test]
    fn test_line_6_rounds_summed_dividends() {
        let facts = Facts::from_items(vec![fact(dec!(1234.49), Tag::ScheduleBOrdinaryDividends)]);
        let index = facts.index();
        assert_eq!(line_6_ordinary_dividends(&index).unwrap(), dec!(1234));
    }

    #[test]
    fn test_absent_facts_total_zero() {
        let facts = Facts::default();
        let index = facts.index();
        assert_eq!(line_1_taxable_interest(&index).unwrap(), dec!(0));
        assert_eq!(line_6_ordinary_dividends(&index).unwrap(), dec!(0));
    }
}
