//! Minimum spanning trees by Prim's and Kruskal's algorithms, side by side.
//!
//! Both builders take an already validated [`Graph`](graph::Graph) and return
//! an [`MstResult`](graph::MstResult) carrying the selected edges, total cost,
//! an elementary-operation count and the elapsed time, so the two strategies
//! can be compared on the same input. The [`analysis`] module runs both over a
//! batch of graphs described in JSON.

pub mod analysis;
pub mod cs;
pub mod error;

pub use cs::graph;
pub use error::{Error, Result};
