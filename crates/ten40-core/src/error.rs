//! # Fact Errors
//!
//! Failures raised while reading or aggregating fact data.
//!
//! ## Design
//!
//! - Loading facts is deliberately permissive about amounts: free-text
//!   amounts are preserved as-is and only become an error when a
//!   computation needs them as a number.
//! - Tag names are the opposite: an unrecognized tag is rejected as soon
//!   as it is seen, so a typo cannot silently drop income from a return.

use thiserror::Error;

/// Errors from fact loading and tag aggregation.
#[derive(Error, Debug)]
pub enum FactError {
    /// A computation required at least one fact carrying a tag, and none
    /// was present.
    #[error("expected at least 1 item for tag '{tag}', found 0")]
    MissingRequiredTag { tag: String },

    /// A computation needed a numeric amount but the fact holds free text.
    #[error("non-numeric amount '{amount}' for fact at '{path}'")]
    NonNumericAmount { amount: String, path: String },

    /// A tag string outside the recognized vocabulary.
    #[error("unknown tag '{0}'")]
    UnknownTag(String),
}
