//! # Marginal Subcommand
//!
//! Prints a pipe-separated marginal rate table: how much each input (or
//! each tag) moves the federal, New York, and combined totals per dollar
//! of change, measured with a central difference.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use ten40_engine::{marginal_rate_table_by_input, marginal_rate_table_by_tag};

use crate::{load_facts, load_policy};

/// Arguments for the `ten40 marginal` subcommand.
#[derive(Args, Debug)]
pub struct MarginalArgs {
    /// Path to the facts file (JSON map of source document to fact items).
    #[arg(long)]
    pub inputs: PathBuf,

    /// Path to the policy file for the tax year and filing status.
    #[arg(long)]
    pub policy: PathBuf,

    /// Row grouping for the table.
    #[arg(long, value_enum, default_value = "tag")]
    pub by: Grouping,

    /// Perturbation size in dollars.
    #[arg(long, default_value = "1000")]
    pub delta: Decimal,
}

/// Row grouping for the marginal rate table.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Grouping {
    /// One row per input fact, perturbing that fact's amount.
    Input,
    /// One row per tag, perturbing a synthetic fact carrying the tag.
    Tag,
}

/// Execute the marginal subcommand.
pub fn run_marginal(args: &MarginalArgs) -> Result<u8> {
    let facts = load_facts(&args.inputs)?;
    let policy = load_policy(&args.policy)?;

    let table = match args.by {
        Grouping::Input => marginal_rate_table_by_input(&facts, &policy, args.delta)?,
        Grouping::Tag => marginal_rate_table_by_tag(&facts, &policy, args.delta)?,
    };
    println!("{table}");
    Ok(0)
}
