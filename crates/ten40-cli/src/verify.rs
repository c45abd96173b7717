//! # Verify Subcommand
//!
//! Recomputes a return and checks every computed line against an
//! expected-values file. The run fails at the first line whose value
//! disagrees, so the error names where the divergence starts rather
//! than the total it ends up in.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use ten40_engine::{compute_all_taxes, Verifier};

use crate::{load_expected, load_facts, load_policy};

/// Arguments for the `ten40 verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the facts file (JSON map of source document to fact items).
    #[arg(long)]
    pub inputs: PathBuf,

    /// Path to the policy file for the tax year and filing status.
    #[arg(long)]
    pub policy: PathBuf,

    /// Path to the expected-values file, a JSON tree whose nested keys
    /// mirror the line node keys. Lines absent from the tree are not
    /// checked.
    #[arg(long)]
    pub expected: PathBuf,

    /// Label prefixed to mismatch reports, for telling returns apart
    /// when several verify in one session.
    #[arg(long)]
    pub context: Option<String>,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let facts = load_facts(&args.inputs)?;
    let policy = load_policy(&args.policy)?;
    let expected = load_expected(&args.expected)?;

    let verifier = match &args.context {
        Some(label) => Verifier::with_context(expected, label.clone()),
        None => Verifier::new(expected),
    };
    let totals = compute_all_taxes(&facts, &policy, Some(&verifier))?;

    println!("OK: all computed lines match the expected values");
    println!("Federal total tax: {}", totals.federal);
    println!("NY total tax: {}", totals.ny);
    println!("Total tax: {}", totals.total);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(dir: &Path, expected: &str, context: Option<String>) -> VerifyArgs {
        VerifyArgs {
            inputs: write(dir, "facts.json", fixtures::FACTS_JSON),
            policy: write(dir, "policy.json", fixtures::POLICY_JSON),
            expected: write(dir, "expected.json", expected),
            context,
        }
    }

    #[test]
    fn test_run_verify_passes_on_matching_tree() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), fixtures::EXPECTED_JSON, None);
        assert_eq!(run_verify(&args).unwrap(), 0);
    }

    #[test]
    fn test_run_verify_reports_mismatching_line() {
        let dir = tempfile::tempdir().unwrap();
        let expected = r#"{"federal": {"form_1040": {"line_15_taxable_income": 1}}}"#;
        let args = args(dir.path(), expected, None);
        let err = run_verify(&args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "federal.form_1040.line_15_taxable_income: expected 1, got 130000"
        );
    }

    #[test]
    fn test_run_verify_context_labels_the_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let expected = r#"{"ny": {"compute_total_tax": 99}}"#;
        let args = args(dir.path(), expected, Some("return_2024".to_string()));
        let err = run_verify(&args).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[return_2024] ny.compute_total_tax: expected 99, got 12180"
        );
    }

    #[test]
    fn test_run_verify_ignores_unknown_paths() {
        let dir = tempfile::tempdir().unwrap();
        let expected = r#"{"federal": {"form_9999": {"line_1": 5}}}"#;
        let args = args(dir.path(), expected, None);
        assert_eq!(run_verify(&args).unwrap(), 0);
    }
}
