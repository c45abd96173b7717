//! # Compute Subcommand
//!
//! Loads facts and policy, runs the federal and New York pipelines, and
//! prints the totals.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use ten40_engine::compute_all_taxes;

use crate::{load_facts, load_policy};

/// Arguments for the `ten40 compute` subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Path to the facts file (JSON map of source document to fact items).
    #[arg(long)]
    pub inputs: PathBuf,

    /// Path to the policy file for the tax year and filing status.
    #[arg(long)]
    pub policy: PathBuf,

    /// Print the totals as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the compute subcommand.
pub fn run_compute(args: &ComputeArgs) -> Result<u8> {
    let facts = load_facts(&args.inputs)?;
    let policy = load_policy(&args.policy)?;

    let totals = compute_all_taxes(&facts, &policy, None)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
    } else {
        println!("Federal total tax: {}", totals.federal);
        println!("NY total tax: {}", totals.ny);
        println!("Total tax: {}", totals.total);
    }
    Ok(0)
}
