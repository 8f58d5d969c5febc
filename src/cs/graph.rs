pub mod kruskal;
pub mod model;
pub mod mst_result;
pub mod prim;
pub mod union_find;

// Re-export public types and functions
pub use kruskal::build_kruskal;
pub use model::{Cost, Edge, Graph, Weight};
pub use mst_result::{Algorithm, MstResult, OpCounter};
pub use prim::build_prim;
pub use union_find::UnionFind;

/// Runs both builders on `graph`, Prim's first.
///
/// The two runs share nothing: each allocates its own working state.
pub fn build_both<V: Clone>(graph: &Graph<V>) -> (MstResult<V>, MstResult<V>) {
    (build_prim(graph), build_kruskal(graph))
}
