//! Errors surfaced by pipeline construction, evaluation, and
//! verification.

use rust_decimal::Decimal;
use thiserror::Error;

use ten40_core::FactError;
use ten40_policy::PolicyError;

/// Any failure while evaluating a pipeline or building a marginal
/// report.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Fact(#[from] FactError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Verify(#[from] VerifyError),

    /// The marginal reporter perturbs each input by a strictly positive
    /// delta.
    #[error("delta must be positive")]
    NonPositiveDelta,
}

/// A defect in a pipeline's node table. These indicate a wiring bug,
/// not bad return data.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate line node '{0}'")]
    DuplicateNode(String),

    #[error("line node '{node}' depends on unknown node '{dependency}'")]
    UnknownDependency { node: String, dependency: String },

    #[error("line node '{node}' read undeclared dependency '{dependency}'")]
    UndeclaredDependency { node: String, dependency: String },

    #[error("dependency cycle among line nodes: {nodes}")]
    DependencyCycle { nodes: String },

    #[error("unknown line node '{0}'")]
    UnknownNode(String),
}

/// A computed line disagrees with the expected value recorded for its
/// path.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("{}{path}: expected {expected}, got {actual}", context_prefix(.context))]
pub struct VerifyError {
    /// Label identifying which return was being verified, when several
    /// run in one session.
    pub context: Option<String>,
    pub path: String,
    pub expected: Decimal,
    pub actual: Decimal,
}

fn context_prefix(context: &Option<String>) -> String {
    match context {
        Some(label) if !label.is_empty() => format!("[{label}] "),
        _ => String::new(),
    }
}
