//! # Ten40 Federal
//!
//! Federal Form 1040 line computations for tax year 2024, one module per
//! form or schedule. Every public function computes exactly one form
//! line and is named after it, so the call graph reads like the return:
//! `schedule_se::line_12_self_employment_tax` feeds
//! `schedule_1::line_15_deductible_self_employment_tax`, and so on up to
//! `form_1040::line_24_total_tax`.
//!
//! ## Design Principles
//!
//! - **One line, one function**: functions never reach past their own
//!   line; cross-line wiring belongs to the evaluation pipeline.
//! - **Rounding where the form rounds**: each function applies the
//!   half-up dollar rounding its printed line applies, and no other.
//! - **Inputs by kind**: functions take a [`ten40_core::TagIndex`] when
//!   the line reads input facts, a policy section when it reads year
//!   parameters, and plain decimals when it only combines other lines.
//!
//! The scope matches a specific return shape: partnership K-1 income
//! with self-employment tax, investment income with NIIT, section 1256
//! contracts, and the qualified dividends worksheet. Lines the shape
//! never exercises (farm income, IRA distributions, AMT) are carried as
//! explicit zero-valued parameters where the form sums them, and are
//! otherwise out of scope.

pub mod form_1040;
pub mod form_6781;
pub mod form_8959;
pub mod form_8960;
pub mod schedule_1;
pub mod schedule_2;
pub mod schedule_b;
pub mod schedule_d;
pub mod schedule_e;
pub mod schedule_se;
pub mod worksheets;

// Re-export primary types for ergonomic imports.
pub use form_8960::InvestmentIncome;
pub use schedule_2::OtherTaxes;
