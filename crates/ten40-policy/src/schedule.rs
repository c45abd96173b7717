//! # Bracket Tables
//!
//! The two bracket-table shapes the return uses: the federal Tax
//! Computation Worksheet, where tax is income times the row rate minus a
//! subtraction amount, and the New York rate schedules, where tax is the
//! row's base tax plus the row rate on income above the bracket floor.
//!
//! Rows carry inclusive bounds on both ends; the top row leaves `max`
//! null. Rows are scanned in file order and the first match wins.

use rust_decimal::Decimal;
use serde::Deserialize;

use ten40_core::round_to_dollars;

use crate::error::PolicyError;

/// One row of the federal Tax Computation Worksheet.
#[derive(Clone, Debug, Deserialize)]
pub struct WorksheetSection {
    pub min: Decimal,
    /// Upper bound, inclusive. Null for the top row.
    pub max: Option<Decimal>,
    pub rate: Decimal,
    pub subtract_amount: Decimal,
}

impl WorksheetSection {
    fn contains(&self, income: Decimal) -> bool {
        income >= self.min && self.max.map_or(true, |max| income <= max)
    }
}

/// The federal Tax Computation Worksheet.
///
/// Only applies to taxable income at or above `min_income`; the IRS
/// publishes plain tax tables below that, which this engine does not
/// carry.
#[derive(Clone, Debug, Deserialize)]
pub struct TaxComputationWorksheet {
    pub min_income: Decimal,
    pub sections: Vec<WorksheetSection>,
}

impl TaxComputationWorksheet {
    /// Tax on `taxable_income`, rounded to whole dollars.
    pub fn tax(&self, taxable_income: Decimal) -> Result<Decimal, PolicyError> {
        if taxable_income < self.min_income {
            return Err(PolicyError::BelowWorksheetMinimum {
                minimum: self.min_income,
                income: taxable_income,
            });
        }
        for section in &self.sections {
            if section.contains(taxable_income) {
                return Ok(round_to_dollars(
                    taxable_income * section.rate - section.subtract_amount,
                ));
            }
        }
        Err(PolicyError::NoWorksheetRow(taxable_income))
    }
}

/// One row of a New York rate schedule.
#[derive(Clone, Debug, Deserialize)]
pub struct RateScheduleRow {
    pub min: Decimal,
    /// Upper bound, inclusive. Null for the top row.
    pub max: Option<Decimal>,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

impl RateScheduleRow {
    fn contains(&self, income: Decimal) -> bool {
        income >= self.min && self.max.map_or(true, |max| income <= max)
    }
}

/// A New York rate schedule (NYS or NYC resident), stored as a bare row
/// array in the policy file.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct RateSchedule {
    pub rows: Vec<RateScheduleRow>,
}

impl RateSchedule {
    /// Tax on `taxable_income`, rounded to whole dollars. `schedule`
    /// names the table in the no-match error, e.g. "NYS" or "NYC".
    pub fn tax(&self, schedule: &str, taxable_income: Decimal) -> Result<Decimal, PolicyError> {
        for row in &self.rows {
            if row.contains(taxable_income) {
                return Ok(round_to_dollars(
                    row.base_tax + (taxable_income - row.min) * row.rate,
                ));
            }
        }
        Err(PolicyError::NoScheduleRow {
            schedule: schedule.to_string(),
            income: taxable_income,
        })
    }
}
