use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Edge weight. Weights are non-negative integers.
pub type Weight = u64;

/// Sum of selected edge weights. Wide enough that no tree over `u64` weights
/// can overflow it.
pub type Cost = u128;

/// Represents an undirected, weighted edge in a graph.
///
/// `from`/`to` carry no direction for the graph itself; the builders use them
/// to record the order in which an edge was traversed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: Weight,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Returns the same edge traversed in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    pub fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.from == self.to
    }
}

/// An immutable, validated, undirected multigraph.
///
/// Vertex order is preserved: the first vertex seeds Prim's algorithm.
/// Each edge is resolved once at construction into a pair of dense vertex
/// indices, which is what the builders work on.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
    endpoints: Vec<(usize, usize)>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Debug,
{
    /// Builds a graph from an ordered vertex sequence and an edge list.
    ///
    /// # Errors
    /// * `EmptyGraph` if `vertices` is empty
    /// * `DuplicateVertex` if a vertex identifier appears twice
    /// * `VertexNotFound` if an edge endpoint is not in `vertices`
    pub fn new(vertices: Vec<V>, edges: Vec<Edge<V>>) -> Result<Self> {
        if vertices.is_empty() {
            return Err(Error::EmptyGraph);
        }

        let mut index = HashMap::with_capacity(vertices.len());
        for (i, v) in vertices.iter().enumerate() {
            if index.insert(v, i).is_some() {
                return Err(Error::DuplicateVertex(format!("{:?}", v)));
            }
        }

        let lookup = |edge: usize, v: &V| {
            index.get(v).copied().ok_or_else(|| Error::VertexNotFound {
                edge,
                vertex: format!("{:?}", v),
            })
        };
        let endpoints = edges
            .iter()
            .enumerate()
            .map(|(i, e)| -> Result<(usize, usize)> {
                Ok((lookup(i, &e.from)?, lookup(i, &e.to)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            vertices,
            edges,
            endpoints,
        })
    }
}

impl<V> Graph<V> {
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges in a spanning tree of a connected graph with this many vertices.
    pub fn spanning_tree_size(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Dense vertex indices of each edge's endpoints, parallel to [`Graph::edges`].
    pub(crate) fn endpoints(&self) -> &[(usize, usize)] {
        &self.endpoints
    }
}
