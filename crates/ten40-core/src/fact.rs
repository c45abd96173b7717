//! # Facts
//!
//! Tagged input amounts and the collections that hold them. A fact is one
//! amount lifted off a source document (a W-2 box, a K-1 line, a broker
//! statement total) together with the tags that route it onto form lines.
//!
//! Fact files come in two shapes: a map from source document name to its
//! list of facts, or a bare list of facts with no source attribution.
//! Both deserialize into [`Facts`]; the flat shape just leaves every item
//! unattributed.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FactError;
use crate::index::TagIndex;
use crate::tag::Tag;

/// An amount as it appeared in the input file.
///
/// Amounts that parse as decimals are kept exact; anything else is kept
/// as the original text. Non-numeric amounts are legal to load and only
/// fail when a computation needs their value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A numeric amount, from a JSON number or a numeric string.
    Number(Decimal),
    /// A non-numeric amount kept verbatim, e.g. "see attached statement".
    Text(String),
}

impl RawAmount {
    /// The numeric value, if this amount is numeric.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            RawAmount::Number(value) => Some(*value),
            RawAmount::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, RawAmount::Number(_))
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Number(value) => write!(f, "{value}"),
            RawAmount::Text(text) => f.write_str(text),
        }
    }
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        RawAmount::Number(value)
    }
}

/// One tagged amount from a source document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactItem {
    /// The amount. Required; facts without an amount are a load error.
    #[serde(rename = "Amount")]
    pub amount: RawAmount,

    /// Tags routing this amount onto form lines. A fact may feed several
    /// lines, e.g. K-1 ordinary income reaches both Schedule E and the
    /// MCTMT base.
    #[serde(rename = "Tags", default)]
    pub tags: Vec<Tag>,

    /// Where on the source document the amount came from, e.g.
    /// "Box 5" or "Part III line 14a".
    #[serde(rename = "Path", default)]
    pub path: String,

    /// Free-text note on what the amount is.
    #[serde(rename = "Explanation", default)]
    pub explanation: String,
}

impl FactItem {
    /// The amount as a decimal, or an error naming the fact's path.
    pub fn decimal_amount(&self) -> Result<Decimal, FactError> {
        self.amount
            .as_decimal()
            .ok_or_else(|| FactError::NonNumericAmount {
                amount: self.amount.to_string(),
                path: self.path.clone(),
            })
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

/// All input facts for one return, grouped by source document.
///
/// Sources are held in a sorted map so iteration order is stable across
/// runs regardless of input file ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Facts {
    sources: BTreeMap<String, Vec<FactItem>>,
    unattributed: Vec<FactItem>,
}

impl Facts {
    /// Facts grouped by source document name.
    pub fn from_sources(sources: BTreeMap<String, Vec<FactItem>>) -> Facts {
        Facts {
            sources,
            unattributed: Vec::new(),
        }
    }

    /// Facts with no source attribution.
    pub fn from_items(items: Vec<FactItem>) -> Facts {
        Facts {
            sources: BTreeMap::new(),
            unattributed: items,
        }
    }

    /// Source documents in sorted name order.
    pub fn sources(&self) -> impl Iterator<Item = (&str, &[FactItem])> {
        self.sources
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Facts that arrived without a source document.
    pub fn unattributed(&self) -> &[FactItem] {
        &self.unattributed
    }

    pub fn contains_source(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    /// Add a source document and its facts, replacing any same-named source.
    pub fn insert_source(&mut self, name: impl Into<String>, items: Vec<FactItem>) {
        self.sources.insert(name.into(), items);
    }

    /// Mutable access to one fact within a named source.
    pub fn source_item_mut(&mut self, source: &str, index: usize) -> Option<&mut FactItem> {
        self.sources.get_mut(source)?.get_mut(index)
    }

    /// Every fact: attributed items in sorted source order, then
    /// unattributed items in file order.
    pub fn iter(&self) -> impl Iterator<Item = &FactItem> {
        self.sources
            .values()
            .flatten()
            .chain(self.unattributed.iter())
    }

    pub fn len(&self) -> usize {
        self.sources.values().map(Vec::len).sum::<usize>() + self.unattributed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the tag index over these facts.
    pub fn index(&self) -> TagIndex<'_> {
        TagIndex::new(self)
    }
}

impl<'de> Deserialize<'de> for Facts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FactsVisitor;

        impl<'de> Visitor<'de> for FactsVisitor {
            type Value = Facts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of source name to fact items, or a list of fact items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Facts, A::Error> {
                let mut sources = BTreeMap::new();
                while let Some((name, items)) = map.next_entry::<String, Vec<FactItem>>()? {
                    sources.insert(name, items);
                }
                Ok(Facts::from_sources(sources))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Facts, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<FactItem>()? {
                    items.push(item);
                }
                Ok(Facts::from_items(items))
            }
        }

        deserializer.deserialize_any(FactsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(amount: RawAmount, tags: Vec<Tag>) -> FactItem {
        FactItem {
            amount,
            tags,
            path: String::new(),
            explanation: String::new(),
        }
    }

    // ---- amounts ----

    #[test]
    fn test_numeric_string_amount_parses_exact() {
        let fact: FactItem = serde_json::from_str(r#"{"Amount": "1234.56"}"#).unwrap();
        assert_eq!(fact.amount, RawAmount::Number(dec!(1234.56)));
    }

    #[test]
    fn test_json_number_amount_parses_exact() {
        let fact: FactItem = serde_json::from_str(r#"{"Amount": -250.75}"#).unwrap();
        assert_eq!(fact.decimal_amount().unwrap(), dec!(-250.75));
    }

    #[test]
    fn test_non_numeric_amount_kept_as_text() {
        let fact: FactItem =
            serde_json::from_str(r#"{"Amount": "see statement", "Path": "Box 7"}"#).unwrap();
        assert_eq!(fact.amount, RawAmount::Text("see statement".to_string()));
        let err = fact.decimal_amount().unwrap_err();
        assert_eq!(
            err.to_string(),
            "non-numeric amount 'see statement' for fact at 'Box 7'"
        );
    }

    #[test]
    fn test_missing_amount_is_a_load_error() {
        let result = serde_json::from_str::<FactItem>(r#"{"Tags": ["schedule_b_interest"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_tags_path_explanation_default_empty() {
        let fact: FactItem = serde_json::from_str(r#"{"Amount": 10}"#).unwrap();
        assert!(fact.tags.is_empty());
        assert_eq!(fact.path, "");
        assert_eq!(fact.explanation, "");
    }

    // ---- file shapes ----

    #[test]
    fn test_load_sources_map() {
        let facts: Facts = serde_json::from_str(
            r#"{
                "w2_employer.json": [
                    {"Amount": "150000", "Tags": ["form_1040_line_1z_wages"], "Path": "Box 1"}
                ],
                "broker_1099.json": [
                    {"Amount": "1200.50", "Tags": ["schedule_b_interest"]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(facts.len(), 2);
        assert!(facts.contains_source("w2_employer.json"));
        assert!(facts.unattributed().is_empty());
    }

    #[test]
    fn test_load_flat_list() {
        let facts: Facts = serde_json::from_str(
            r#"[{"Amount": "5", "Tags": ["schedule_b_interest"]}, {"Amount": "6"}]"#,
        )
        .unwrap();
        assert_eq!(facts.len(), 2);
        assert!(!facts.contains_source("anything"));
        assert_eq!(facts.unattributed().len(), 2);
    }

    #[test]
    fn test_unknown_tag_fails_load_with_tag_name() {
        let err = serde_json::from_str::<Facts>(
            r#"{"doc.json": [{"Amount": "5", "Tags": ["schedle_b_interest"]}]}"#,
        )
        .unwrap_err();
        assert!(
            err.to_string().contains("unknown tag 'schedle_b_interest'"),
            "unexpected message: {err}"
        );
    }

    // ---- iteration and mutation ----

    #[test]
    fn test_iter_walks_sources_in_sorted_order_then_unattributed() {
        let mut facts = Facts::from_items(vec![item(
            RawAmount::Number(dec!(3)),
            vec![Tag::ScheduleBInterest],
        )]);
        facts.insert_source(
            "z_doc.json",
            vec![item(RawAmount::Number(dec!(2)), vec![])],
        );
        facts.insert_source(
            "a_doc.json",
            vec![item(RawAmount::Number(dec!(1)), vec![])],
        );

        let amounts: Vec<Decimal> = facts
            .iter()
            .map(|fact| fact.decimal_amount().unwrap())
            .collect();
        assert_eq!(amounts, vec![dec!(1), dec!(2), dec!(3)]);
    }

    #[test]
    fn test_source_item_mut_targets_one_fact() {
        let mut facts = Facts::default();
        facts.insert_source(
            "doc.json",
            vec![
                item(RawAmount::Number(dec!(10)), vec![]),
                item(RawAmount::Number(dec!(20)), vec![]),
            ],
        );

        if let Some(fact) = facts.source_item_mut("doc.json", 1) {
            fact.amount = RawAmount::Number(dec!(25));
        }
        let amounts: Vec<Decimal> = facts
            .iter()
            .map(|fact| fact.decimal_amount().unwrap())
            .collect();
        assert_eq!(amounts, vec![dec!(10), dec!(25)]);
        assert!(facts.source_item_mut("doc.json", 5).is_none());
        assert!(facts.source_item_mut("missing.json", 0).is_none());
    }
}
