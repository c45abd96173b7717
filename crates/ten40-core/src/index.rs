//! # Tag Index
//!
//! Tag-to-facts lookup with the three aggregation modes form logic uses:
//! plain totals, required totals that insist on at least one item, and
//! the W-2 wage mode that rounds each item before summing.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::FactError;
use crate::fact::{FactItem, Facts};
use crate::rounding::round_to_dollars;
use crate::tag::Tag;

/// Facts grouped by tag. Borrow of the underlying [`Facts`]; building one
/// never fails, even when some amounts are non-numeric.
#[derive(Debug)]
pub struct TagIndex<'a> {
    by_tag: BTreeMap<Tag, Vec<&'a FactItem>>,
}

impl<'a> TagIndex<'a> {
    pub fn new(facts: &'a Facts) -> TagIndex<'a> {
        let mut by_tag: BTreeMap<Tag, Vec<&'a FactItem>> = BTreeMap::new();
        for fact in facts.iter() {
            for tag in &fact.tags {
                by_tag.entry(tag.clone()).or_default().push(fact);
            }
        }
        TagIndex { by_tag }
    }

    /// Facts carrying a tag, in fact iteration order. Empty when the tag
    /// is absent.
    pub fn items(&self, tag: &Tag) -> &[&'a FactItem] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of all amounts carrying a tag; zero when the tag is absent.
    ///
    /// Fails if any matching amount is non-numeric.
    pub fn total(&self, tag: &Tag) -> Result<Decimal, FactError> {
        let mut total = Decimal::ZERO;
        for fact in self.items(tag) {
            total += fact.decimal_amount()?;
        }
        Ok(total)
    }

    /// Like [`total`](Self::total), but the tag must match at least one
    /// fact. Used where an absent input means the return cannot be
    /// computed at all, e.g. the dependent count.
    pub fn required_total(&self, tag: &Tag) -> Result<Decimal, FactError> {
        if self.items(tag).is_empty() {
            return Err(FactError::MissingRequiredTag {
                tag: tag.to_string(),
            });
        }
        self.total(tag)
    }

    /// Sum of amounts carrying a tag, rounding each amount to whole
    /// dollars before adding. W-2 wage boxes aggregate this way: each
    /// form rounds on its own before the totals meet.
    pub fn total_rounding_each(&self, tag: &Tag) -> Result<Decimal, FactError> {
        let mut total = Decimal::ZERO;
        for fact in self.items(tag) {
            total += round_to_dollars(fact.decimal_amount()?);
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::RawAmount;
    use rust_decimal_macros::dec;

    fn facts_with(items: Vec<(RawAmount, Vec<Tag>)>) -> Facts {
        Facts::from_items(
            items
                .into_iter()
                .map(|(amount, tags)| FactItem {
                    amount,
                    tags,
                    path: "Line 1".to_string(),
                    explanation: String::new(),
                })
                .collect(),
        )
    }

    // ---- totals ----

    #[test]
    fn test_total_sums_matching_amounts() {
        let facts = facts_with(vec![
            (RawAmount::Number(dec!(100.25)), vec![Tag::ScheduleBInterest]),
            (RawAmount::Number(dec!(49.50)), vec![Tag::ScheduleBInterest]),
            (
                RawAmount::Number(dec!(999)),
                vec![Tag::ScheduleBOrdinaryDividends],
            ),
        ]);
        let index = facts.index();
        assert_eq!(index.total(&Tag::ScheduleBInterest).unwrap(), dec!(149.75));
    }

    #[test]
    fn test_total_of_absent_tag_is_zero() {
        let facts = facts_with(vec![]);
        let index = facts.index();
        assert_eq!(index.total(&Tag::ScheduleBInterest).unwrap(), dec!(0));
    }

    #[test]
    fn test_total_fails_on_non_numeric_amount() {
        let facts = facts_with(vec![
            (RawAmount::Number(dec!(10)), vec![Tag::ScheduleBInterest]),
            (
                RawAmount::Text("pending".to_string()),
                vec![Tag::ScheduleBInterest],
            ),
        ]);
        let index = facts.index();
        let err = index.total(&Tag::ScheduleBInterest).unwrap_err();
        assert_eq!(
            err.to_string(),
            "non-numeric amount 'pending' for fact at 'Line 1'"
        );
    }

    // ---- required totals ----

    #[test]
    fn test_required_total_errors_when_absent() {
        let facts = facts_with(vec![]);
        let index = facts.index();
        let err = index.required_total(&Tag::NyDependentsCount).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected at least 1 item for tag 'ny_dependents_count', found 0"
        );
    }

    #[test]
    fn test_required_total_accepts_zero_amounts() {
        let facts = facts_with(vec![(
            RawAmount::Number(dec!(0)),
            vec![Tag::NyDependentsCount],
        )]);
        let index = facts.index();
        assert_eq!(index.required_total(&Tag::NyDependentsCount).unwrap(), dec!(0));
    }

    // ---- per-item rounding ----

    #[test]
    fn test_total_rounding_each_rounds_before_summing() {
        // 100.50 -> 101 and 200.50 -> 201; summing first would give 301.
        let facts = facts_with(vec![
            (
                RawAmount::Number(dec!(100.50)),
                vec![Tag::Form1040Line1zWages],
            ),
            (
                RawAmount::Number(dec!(200.50)),
                vec![Tag::Form1040Line1zWages],
            ),
        ]);
        let index = facts.index();
        assert_eq!(
            index.total_rounding_each(&Tag::Form1040Line1zWages).unwrap(),
            dec!(302)
        );
    }

    // ---- multi-tag facts ----

    #[test]
    fn test_fact_with_several_tags_counts_under_each() {
        let facts = facts_with(vec![(
            RawAmount::Number(dec!(5000)),
            vec![Tag::ScheduleENonpassiveIncome, Tag::MctmtBaseOrdinaryIncome],
        )]);
        let index = facts.index();
        assert_eq!(
            index.total(&Tag::ScheduleENonpassiveIncome).unwrap(),
            dec!(5000)
        );
        assert_eq!(
            index.total(&Tag::MctmtBaseOrdinaryIncome).unwrap(),
            dec!(5000)
        );
    }
}
