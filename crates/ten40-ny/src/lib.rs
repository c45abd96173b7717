//! # Ten40 NY
//!
//! New York State and New York City personal income tax for full-year
//! residents, Form IT-201 and its companion forms.
//!
//! ## Design Principles
//!
//! - **One function per form line.** Each line is a pure function of
//!   the lines and facts it cites, mirroring the paper forms.
//! - **State tax starts from federal amounts.** IT-201 line 17 picks up
//!   federal total income and the chain diverges from there; nothing in
//!   this crate reaches back into federal internals.
//! - **Credits never go negative.** IT-112-R and IT-219 cap their
//!   credits at the tax they offset.

pub mod it_112_r;
pub mod it_201;
pub mod it_201_att;
pub mod it_219;
pub mod it_225;
pub mod it_2105_9;

// Re-export primary types for ergonomic imports.
pub use it_201::GovBondFundItem;
pub use it_2105_9::MctmtEarningsItem;
