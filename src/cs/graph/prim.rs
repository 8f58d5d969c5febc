use std::time::Instant;

use log::{debug, trace, warn};

use super::model::{Edge, Graph, Weight};
use super::mst_result::{Algorithm, MstResult, OpCounter};

/// Computes the minimum spanning tree of an undirected graph using Prim's algorithm.
///
/// The tree is grown from the first vertex of the graph. Every round scans the
/// whole edge list once and admits the lightest edge with exactly one endpoint
/// in the tree; ties go to the edge found first. Each inspected edge counts as
/// one operation, so a connected graph costs `(|V| - 1) * |E|` operations.
///
/// Selected edges are oriented tree-side first: `from` is the vertex already
/// in the tree, `to` the vertex it admits.
///
/// If a round finds no crossing edge the graph is disconnected and the
/// result covers only the component of the first vertex.
///
/// # Examples
/// ```
/// use mst_analysis::graph::{prim, Edge, Graph};
///
/// let graph = Graph::new(
///     vec!["A", "B", "C"],
///     vec![Edge::new("A", "B", 1), Edge::new("B", "C", 2), Edge::new("A", "C", 3)],
/// )
/// .unwrap();
///
/// let mst = prim::build_prim(&graph);
/// assert_eq!(mst.total_cost(), 3);
/// assert_eq!(mst.edges().len(), 2);
/// ```
///
/// # Complexity
/// * Time: O(V * E)
/// * Space: O(V)
pub fn build_prim<V: Clone>(graph: &Graph<V>) -> MstResult<V> {
    let start = Instant::now();
    let mut ops = OpCounter::new();

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut visited_count = 0;
    if n > 0 {
        visited[0] = true;
        visited_count = 1;
    }
    let mut mst = Vec::with_capacity(graph.spanning_tree_size());

    while visited_count < n {
        // (edge index, newly admitted vertex, reversed, weight)
        let mut best: Option<(usize, usize, bool, Weight)> = None;

        for (i, (&(u, v), edge)) in graph.endpoints().iter().zip(graph.edges()).enumerate() {
            ops.tick();
            let crossing = match (visited[u], visited[v]) {
                (true, false) => Some((v, false)),
                (false, true) => Some((u, true)),
                _ => None,
            };
            if let Some((admit, reversed)) = crossing {
                if best.map_or(true, |(_, _, _, w)| edge.weight < w) {
                    best = Some((i, admit, reversed, edge.weight));
                }
            }
        }

        let Some((i, admit, reversed, weight)) = best else {
            warn!(
                "Prim stopped after {} of {} vertices: graph is disconnected",
                visited_count, n
            );
            break;
        };

        let edge = graph.edges()[i].clone();
        let edge: Edge<V> = if reversed { edge.reversed() } else { edge };
        trace!("Prim admits vertex #{} via edge #{} (weight {})", admit, i, weight);
        mst.push(edge);
        visited[admit] = true;
        visited_count += 1;
    }

    let result = MstResult::new(Algorithm::Prim, n, mst, ops, start.elapsed());
    debug!(
        "Prim: |V|={} |E|={} edges={} cost={} ops={} time={:?}",
        n,
        graph.edge_count(),
        result.edges().len(),
        result.total_cost(),
        result.operations(),
        result.elapsed()
    );
    result
}
