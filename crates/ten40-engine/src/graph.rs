//! The line dependency graph.
//!
//! A pipeline is a flat table of [`LineNode`]s, one per form line. Each
//! node names the lines it reads, and [`Pipeline::new`] validates the
//! table up front: duplicate keys, references to missing nodes, and
//! cycles are all construction errors. Evaluation order is then derived
//! from the declared dependencies alone. Among nodes whose dependencies
//! are all satisfied, the one declared first runs first, so a given
//! table always evaluates in the same order.
//!
//! At run time a node sees only [`NodeCtx`]: its declared dependency
//! values, the fact index, and the policy. Reading a line the node did
//! not declare fails the run instead of silently returning a value.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use ten40_core::TagIndex;
use ten40_policy::Policy;

use crate::error::{EngineError, GraphError};
use crate::verify::Verifier;

/// Evaluation function for one line node.
pub type EvalFn = for<'a> fn(&'a NodeCtx<'a>) -> Result<Decimal, EngineError>;

/// One computed line in a pipeline.
///
/// The key doubles as the check path: a checked node's value is
/// compared against the expected-value tree under its own dotted key.
#[derive(Clone, Copy, Debug)]
pub struct LineNode {
    pub(crate) key: &'static str,
    pub(crate) check_path: Option<&'static str>,
    pub(crate) deps: &'static [&'static str],
    pub(crate) eval: EvalFn,
}

impl LineNode {
    /// A node verified against the expected tree under its own key.
    pub const fn checked(
        key: &'static str,
        deps: &'static [&'static str],
        eval: EvalFn,
    ) -> LineNode {
        LineNode {
            key,
            check_path: Some(key),
            deps,
            eval,
        }
    }

    /// A node that is computed but never verified. Used for worksheet
    /// intermediates no published form line corresponds to.
    pub const fn unchecked(
        key: &'static str,
        deps: &'static [&'static str],
        eval: EvalFn,
    ) -> LineNode {
        LineNode {
            key,
            check_path: None,
            deps,
            eval,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The same node with verification disabled. The New York pipeline
    /// recomputes federal income lines this way: same arithmetic, but
    /// only the federal pipeline owns their check paths.
    pub fn without_check(mut self) -> LineNode {
        self.check_path = None;
        self
    }
}

/// What one node evaluation may read.
pub struct NodeCtx<'a> {
    node: &'a LineNode,
    values: &'a BTreeMap<&'static str, Decimal>,
    /// Tag index over the return's facts.
    pub index: &'a TagIndex<'a>,
    /// Tax-year policy tables.
    pub policy: &'a Policy,
}

impl<'a> NodeCtx<'a> {
    /// The computed value of a declared dependency. Reading a key the
    /// node did not declare is a graph defect and fails the run.
    pub fn dep(&self, key: &str) -> Result<Decimal, GraphError> {
        if self.node.deps.iter().any(|dep| *dep == key) {
            if let Some(value) = self.values.get(key) {
                return Ok(*value);
            }
        }
        Err(GraphError::UndeclaredDependency {
            node: self.node.key.to_string(),
            dependency: key.to_string(),
        })
    }
}

/// A validated node table with a fixed evaluation order.
#[derive(Debug)]
pub struct Pipeline {
    nodes: Vec<LineNode>,
    order: Vec<usize>,
}

impl Pipeline {
    /// Validate the table and derive the evaluation order.
    pub fn new(nodes: Vec<LineNode>) -> Result<Pipeline, GraphError> {
        let mut position: BTreeMap<&'static str, usize> = BTreeMap::new();
        for (i, node) in nodes.iter().enumerate() {
            if position.insert(node.key, i).is_some() {
                return Err(GraphError::DuplicateNode(node.key.to_string()));
            }
        }
        for node in &nodes {
            for dep in node.deps {
                if !position.contains_key(dep) {
                    return Err(GraphError::UnknownDependency {
                        node: node.key.to_string(),
                        dependency: dep.to_string(),
                    });
                }
            }
        }

        // Kahn's algorithm over node indices. The ready set is ordered
        // by declaration index, which makes the order deterministic and
        // keeps it aligned with the table as written.
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut in_degree: Vec<usize> = vec![0; nodes.len()];
        for (i, node) in nodes.iter().enumerate() {
            in_degree[i] = node.deps.len();
            for dep in node.deps {
                dependents[position[dep]].push(i);
            }
        }

        let mut ready: BTreeSet<usize> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, degree)| **degree == 0)
            .map(|(i, _)| i)
            .collect();
        let mut order = Vec::with_capacity(nodes.len());
        while let Some(i) = ready.pop_first() {
            order.push(i);
            for &dependent in &dependents[i] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.insert(dependent);
                }
            }
        }

        if order.len() != nodes.len() {
            let remaining: Vec<&str> = nodes
                .iter()
                .enumerate()
                .filter(|(i, _)| in_degree[*i] > 0)
                .map(|(_, node)| node.key)
                .collect();
            return Err(GraphError::DependencyCycle {
                nodes: remaining.join(", "),
            });
        }

        Ok(Pipeline { nodes, order })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node keys in the order they evaluate.
    pub fn evaluation_order(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().map(|&i| self.nodes[i].key)
    }

    /// Evaluate every node in dependency order.
    ///
    /// When a verifier is supplied, each checked node is compared
    /// against the expected tree as soon as its value is computed, so a
    /// mismatch surfaces at the first line that went wrong rather than
    /// at the total.
    pub fn run(
        &self,
        index: &TagIndex<'_>,
        policy: &Policy,
        verifier: Option<&Verifier>,
    ) -> Result<LineValues, EngineError> {
        let mut values: BTreeMap<&'static str, Decimal> = BTreeMap::new();
        for &i in &self.order {
            let node = &self.nodes[i];
            let value = {
                let ctx = NodeCtx {
                    node,
                    values: &values,
                    index,
                    policy,
                };
                (node.eval)(&ctx)?
            };
            if let (Some(verifier), Some(path)) = (verifier, node.check_path) {
                verifier.check(path, value)?;
            }
            values.insert(node.key, value);
        }
        Ok(LineValues(values))
    }
}

/// Computed line values keyed by node.
#[derive(Clone, Debug, PartialEq)]
pub struct LineValues(BTreeMap<&'static str, Decimal>);

impl LineValues {
    pub fn get(&self, key: &str) -> Result<Decimal, GraphError> {
        self.0
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Decimal)> + '_ {
        self.0.iter().map(|(&key, &value)| (key, value))
    }
}
