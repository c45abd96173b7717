//! # ten40-cli
//!
//! The `ten40` command-line interface. Each subcommand lives in its own
//! module and exposes a `run_*` entry point returning a process exit
//! code; this crate root holds the file loading shared by all of them.
//!
//! ## Subcommands
//!
//! - `ten40 compute` — compute federal and New York totals for one return.
//! - `ten40 verify` — recompute a return and check every line against an
//!   expected-values file.
//! - `ten40 marginal` — print a marginal rate table for a return's inputs.

pub mod compute;
pub mod marginal;
pub mod verify;

use std::path::Path;

use anyhow::{Context, Result};

use ten40_core::Facts;
use ten40_policy::Policy;

/// Load a facts file: a JSON map from source document name to its fact
/// items, or a bare list of fact items.
pub fn load_facts(path: &Path) -> Result<Facts> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read facts file: {}", path.display()))?;
    let facts: Facts = serde_json::from_str(&content)
        .with_context(|| format!("invalid facts file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), facts = facts.len(), "loaded facts");
    Ok(facts)
}

/// Load a policy file for one tax year and filing status.
pub fn load_policy(path: &Path) -> Result<Policy> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file: {}", path.display()))?;
    let policy: Policy = serde_json::from_str(&content)
        .with_context(|| format!("invalid policy file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded policy");
    Ok(policy)
}

/// Load an expected-values file: a JSON tree whose nested keys mirror
/// the dotted line node keys of the pipelines.
pub fn load_expected(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read expected values file: {}", path.display()))?;
    let expected: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("invalid expected values file: {}", path.display()))?;
    Ok(expected)
}
