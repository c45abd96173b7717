//! # Ten40 Policy
//!
//! Year-specific tax parameters, loaded from a policy JSON file. Policy
//! holds every number that changes year to year or filing status to
//! filing status: rates, thresholds, caps, bracket tables, and the New
//! York fund exemption percentages. Form logic holds none of them.
//!
//! ## Design Principles
//!
//! - **Typed sections**: each policy section is a struct with required
//!   fields, so a policy file missing a rate fails at load time with a
//!   field name, not at computation time with a wrong total.
//! - **Tables own their evaluators**: bracket scan logic lives next to
//!   the bracket data ([`TaxComputationWorksheet::tax`],
//!   [`RateSchedule::tax`]); form code passes income in and gets tax out.
//! - **Exact amounts**: every parameter is a [`rust_decimal::Decimal`];
//!   JSON may spell them as numbers or as strings.

pub mod error;
pub mod policy;
pub mod schedule;

// Re-export primary types for ergonomic imports.
pub use error::PolicyError;
pub use policy::{
    AdditionalMedicareTax, CapitalGains, It219IncomeFactor, MctmtEarnings, MctmtRates,
    NetInvestmentIncomeTax, Policy, Section1256, SelfEmploymentTax, StateLocalTaxDeduction,
    TaxComputationWorksheet4,
};
pub use schedule::{RateSchedule, RateScheduleRow, TaxComputationWorksheet, WorksheetSection};
