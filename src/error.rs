use thiserror::Error;

/// Errors raised while building a graph or running a batch analysis.
///
/// The MST builders themselves never fail: a [`Graph`](crate::graph::Graph)
/// can only be constructed from input that satisfies their preconditions.
#[derive(Debug, Error)]
pub enum Error {
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("vertex {0} appears more than once")]
    DuplicateVertex(String),

    #[error("edge {edge} references unknown vertex {vertex}")]
    VertexNotFound { edge: usize, vertex: String },

    #[error("graph {id}: {source}")]
    InvalidGraph {
        id: i64,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
