//! Per-line verification against an expected-value tree.
//!
//! Expected values come from a JSON document shaped like the pipeline
//! keys: nested objects whose leaves are the dollar amounts a prepared
//! return shows for those lines. The tree only needs to cover the lines
//! it cares about. Paths it omits, and leaves that are not numbers, are
//! skipped rather than treated as failures.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::VerifyError;

/// Expected line values for one return, consulted as each pipeline
/// node is computed.
#[derive(Clone, Debug)]
pub struct Verifier {
    expected: Value,
    context: Option<String>,
}

impl Verifier {
    pub fn new(expected: Value) -> Verifier {
        Verifier {
            expected,
            context: None,
        }
    }

    /// A verifier whose mismatch messages carry a label, useful when
    /// several returns are verified in one session.
    pub fn with_context(expected: Value, context: impl Into<String>) -> Verifier {
        Verifier {
            expected,
            context: Some(context.into()),
        }
    }

    /// Compare a computed value against the expected tree.
    ///
    /// The dotted path is walked object by object. Comparison is exact
    /// decimal equality; there is no tolerance, because every upstream
    /// computation rounds deterministically.
    pub fn check(&self, path: &str, actual: Decimal) -> Result<(), VerifyError> {
        let Some(expected) = self.resolve(path) else {
            return Ok(());
        };
        if expected == actual {
            return Ok(());
        }
        Err(VerifyError {
            context: self.context.clone(),
            path: path.to_string(),
            expected,
            actual,
        })
    }

    fn resolve(&self, path: &str) -> Option<Decimal> {
        let mut node = &self.expected;
        for part in path.split('.') {
            node = node.as_object()?.get(part)?;
        }
        decimal_leaf(node)
    }
}

fn decimal_leaf(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    text.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}
