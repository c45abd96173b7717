//! # Policy Errors
//!
//! Failures from evaluating policy tables against a return's figures.
//! All of them mean the policy file does not cover the income or fund it
//! was asked about; none of them are recoverable by the caller.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from policy table lookups.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The federal worksheet only applies above a floor income.
    #[error("tax computation worksheet applies to amounts at or above {minimum}, got {income}")]
    BelowWorksheetMinimum { minimum: Decimal, income: Decimal },

    /// No worksheet row's bounds contained the income.
    #[error("no tax computation worksheet row matched income {0}")]
    NoWorksheetRow(Decimal),

    /// No rate schedule row's bounds contained the income.
    #[error("no {schedule} tax schedule row matched income {income}")]
    NoScheduleRow { schedule: String, income: Decimal },

    /// A bond fund tag named a fund the policy has no percentage for.
    #[error("no U.S. government bond interest percentage for fund '{0}'")]
    UnknownFund(String),
}
