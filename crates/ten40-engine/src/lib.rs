//! # Ten40 Engine
//!
//! The evaluation layer. Form arithmetic lives in `ten40-federal` and
//! `ten40-ny` as free functions over [`Decimal`](rust_decimal::Decimal)
//! values; this crate wires those functions into explicit dependency
//! graphs and runs them.
//!
//! Three properties the graph enforces:
//!
//! - Evaluation order is derived from declared dependencies, never from
//!   the order code happens to run. Ties break toward declaration
//!   order, so a given table always evaluates the same way.
//! - A node reading a line it did not declare fails the run. Every
//!   data edge in the computation is visible in the node table.
//! - Verification is a value, not a mode. Pass a [`Verifier`] to check
//!   each line against an expected-value tree as it is computed, or
//!   `None` to just compute.
//!
//! [`compute_federal_total_tax`] and [`compute_ny_total_tax`] run one
//! jurisdiction; [`compute_all_taxes`] runs both and sums them. The
//! [`marginal`] module differentiates the totals with respect to each
//! input.

pub mod compute;
pub mod error;
pub mod federal;
pub mod graph;
pub mod marginal;
pub mod ny;
pub mod verify;

pub use compute::{compute_all_taxes, TaxTotals};
pub use error::{EngineError, GraphError, VerifyError};
pub use federal::compute_federal_total_tax;
pub use graph::{EvalFn, LineNode, LineValues, NodeCtx, Pipeline};
pub use marginal::{marginal_rate_table, marginal_rate_table_by_input, marginal_rate_table_by_tag};
pub use ny::compute_ny_total_tax;
pub use verify::Verifier;
