//! # Ten40 Core
//!
//! Foundational types shared by every Ten40 crate. This crate owns the
//! pieces of a return that exist before any form arithmetic starts:
//!
//! - **Rounding**: whole-dollar and four-place half-up rounding used by
//!   every line computation ([`round_to_dollars`], [`round_to_four_places`]).
//! - **Tags**: the closed vocabulary that routes input amounts onto form
//!   lines ([`Tag`]).
//! - **Facts**: tagged input amounts grouped by source document
//!   ([`Facts`], [`FactItem`]).
//! - **Indexing**: tag-to-items lookup with the aggregation modes the
//!   form logic needs ([`TagIndex`]).
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: all amounts are [`rust_decimal::Decimal`];
//!   binary floating point never touches a tax figure.
//! - **Strict vocabulary**: unknown tags are rejected at load time, not
//!   silently ignored at computation time.
//! - **No hidden state**: loading facts performs no validation beyond
//!   shape and tag names; every other failure surfaces from the
//!   computation that needed the data.

pub mod error;
pub mod fact;
pub mod index;
pub mod rounding;
pub mod tag;

// Re-export primary types for ergonomic imports.
pub use error::FactError;
pub use fact::{FactItem, Facts, RawAmount};
pub use index::TagIndex;
pub use rounding::{round_to_dollars, round_to_four_places};
pub use tag::Tag;
