use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::model::{Cost, Edge};

/// Counts elementary operations performed by a builder.
///
/// Diagnostic only; never consulted for control flow. What one tick means is
/// defined per algorithm (an edge inspection for Prim's, an edge examination
/// or a find/union step for Kruskal's).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OpCounter(u64);

impl OpCounter {
    pub fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn tick(&mut self) {
        self.0 += 1;
    }

    pub fn count(&self) -> u64 {
        self.0
    }
}

/// Which builder produced an [`MstResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Prim => write!(f, "Prim"),
            Algorithm::Kruskal => write!(f, "Kruskal"),
        }
    }
}

/// Output of one builder run over one graph.
///
/// Edges are kept in selection order. The record is complete once the builder
/// returns and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct MstResult<V> {
    algorithm: Algorithm,
    vertex_count: usize,
    edges: Vec<Edge<V>>,
    total_cost: Cost,
    operations: OpCounter,
    elapsed: Duration,
}

impl<V> MstResult<V> {
    pub(crate) fn new(
        algorithm: Algorithm,
        vertex_count: usize,
        edges: Vec<Edge<V>>,
        operations: OpCounter,
        elapsed: Duration,
    ) -> Self {
        let total_cost = edges.iter().map(|e| Cost::from(e.weight)).sum();
        Self {
            algorithm,
            vertex_count,
            edges,
            total_cost,
            operations,
            elapsed,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Selected edges in the order the builder selected them.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn operations(&self) -> u64 {
        self.operations.count()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// `true` when the selected edges connect every vertex of the graph.
    ///
    /// A `false` here is how a disconnected input shows up: both builders
    /// return fewer than `|V| - 1` edges instead of failing.
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }
}
