//! # ten40 CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ten40_cli::compute::{run_compute, ComputeArgs};
use ten40_cli::marginal::{run_marginal, MarginalArgs};
use ten40_cli::verify::{run_verify, VerifyArgs};

/// Deterministic federal and New York personal income tax calculator
/// for tax year 2024.
#[derive(Parser, Debug)]
#[command(name = "ten40", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute federal and New York totals for one return.
    Compute(ComputeArgs),

    /// Recompute a return and check every line against expected values.
    Verify(VerifyArgs),

    /// Print a marginal rate table for the inputs of one return.
    Marginal(MarginalArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Compute(args) => run_compute(&args),
        Commands::Verify(args) => run_verify(&args),
        Commands::Marginal(args) => run_marginal(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;
    use ten40_cli::marginal::Grouping;

    #[test]
    fn test_cli_parse_compute() {
        let cli = Cli::try_parse_from([
            "ten40", "compute", "--inputs", "facts.json", "--policy", "policy.json",
        ])
        .unwrap();
        if let Commands::Compute(args) = cli.command {
            assert_eq!(args.inputs, PathBuf::from("facts.json"));
            assert_eq!(args.policy, PathBuf::from("policy.json"));
            assert!(!args.json);
        } else {
            panic!("expected compute subcommand");
        }
    }

    #[test]
    fn test_cli_parse_compute_json_flag() {
        let cli = Cli::try_parse_from([
            "ten40", "compute", "--inputs", "f.json", "--policy", "p.json", "--json",
        ])
        .unwrap();
        if let Commands::Compute(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("expected compute subcommand");
        }
    }

    #[test]
    fn test_cli_parse_compute_requires_inputs() {
        let result = Cli::try_parse_from(["ten40", "compute", "--policy", "p.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_verify() {
        let cli = Cli::try_parse_from([
            "ten40",
            "verify",
            "--inputs",
            "facts.json",
            "--policy",
            "policy.json",
            "--expected",
            "expected.json",
        ])
        .unwrap();
        if let Commands::Verify(args) = cli.command {
            assert_eq!(args.expected, PathBuf::from("expected.json"));
            assert!(args.context.is_none());
        } else {
            panic!("expected verify subcommand");
        }
    }

    #[test]
    fn test_cli_parse_verify_with_context() {
        let cli = Cli::try_parse_from([
            "ten40",
            "verify",
            "--inputs",
            "f.json",
            "--policy",
            "p.json",
            "--expected",
            "e.json",
            "--context",
            "return_2024",
        ])
        .unwrap();
        if let Commands::Verify(args) = cli.command {
            assert_eq!(args.context.as_deref(), Some("return_2024"));
        } else {
            panic!("expected verify subcommand");
        }
    }

    #[test]
    fn test_cli_parse_marginal_defaults() {
        let cli = Cli::try_parse_from([
            "ten40", "marginal", "--inputs", "f.json", "--policy", "p.json",
        ])
        .unwrap();
        if let Commands::Marginal(args) = cli.command {
            assert!(matches!(args.by, Grouping::Tag));
            assert_eq!(args.delta, dec!(1000));
        } else {
            panic!("expected marginal subcommand");
        }
    }

    #[test]
    fn test_cli_parse_marginal_by_input_with_delta() {
        let cli = Cli::try_parse_from([
            "ten40", "marginal", "--inputs", "f.json", "--policy", "p.json", "--by", "input",
            "--delta", "250",
        ])
        .unwrap();
        if let Commands::Marginal(args) = cli.command {
            assert!(matches!(args.by, Grouping::Input));
            assert_eq!(args.delta, dec!(250));
        } else {
            panic!("expected marginal subcommand");
        }
    }

    #[test]
    fn test_cli_parse_marginal_rejects_unknown_grouping() {
        let result = Cli::try_parse_from([
            "ten40", "marginal", "--inputs", "f.json", "--policy", "p.json", "--by", "source",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from([
            "ten40", "compute", "--inputs", "f.json", "--policy", "p.json",
        ])
        .unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli2 = Cli::try_parse_from([
            "ten40", "-vv", "compute", "--inputs", "f.json", "--policy", "p.json",
        ])
        .unwrap();
        assert_eq!(cli2.verbose, 2);

        let trailing = Cli::try_parse_from([
            "ten40", "compute", "--inputs", "f.json", "--policy", "p.json", "-v",
        ])
        .unwrap();
        assert_eq!(trailing.verbose, 1);
    }

    #[test]
    fn test_cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["ten40"]).is_err());
    }

    #[test]
    fn test_cli_parse_unknown_subcommand_errors() {
        assert!(Cli::try_parse_from(["ten40", "audit"]).is_err());
    }
}
