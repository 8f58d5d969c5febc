use std::time::Instant;

use log::{debug, trace, warn};

use super::model::Graph;
use super::mst_result::{Algorithm, MstResult, OpCounter};
use super::union_find::UnionFind;

/// Kruskal's algorithm to compute the MST for an undirected, weighted graph.
///
/// Edges are stably sorted by weight, so equal-weight edges keep their input
/// order, then accepted one by one unless they would close a cycle. Accepted
/// edges keep their input orientation. The scan stops as soon as `|V| - 1`
/// edges are selected.
///
/// Operation count: one per examined edge, plus the cost of the two
/// [`UnionFind::find`] calls made for it, plus the cost of
/// [`UnionFind::union`] when the edge is accepted.
///
/// If the graph is disconnected, this will return a spanning forest of all
/// connected components, with fewer than `|V| - 1` edges.
///
/// # Examples
/// ```
/// use mst_analysis::graph::{kruskal, Edge, Graph};
///
/// let graph = Graph::new(
///     vec!["A", "B", "C", "D"],
///     vec![Edge::new("A", "B", 5), Edge::new("C", "D", 7)],
/// )
/// .unwrap();
///
/// let forest = kruskal::build_kruskal(&graph);
/// assert_eq!(forest.total_cost(), 12);
/// assert!(!forest.is_spanning_tree());
/// ```
///
/// # Complexity
/// * Time: O(E log E) for sorting + O(E log V) for the cycle checks
/// * Space: O(V + E)
pub fn build_kruskal<V: Clone>(graph: &Graph<V>) -> MstResult<V> {
    let start = Instant::now();
    let mut ops = OpCounter::new();

    let n = graph.vertex_count();
    let target = graph.spanning_tree_size();

    // Sort edge indices by weight; `sort_by_key` is stable.
    let mut order: Vec<usize> = (0..graph.edge_count()).collect();
    order.sort_by_key(|&i| graph.edges()[i].weight);

    let mut uf = UnionFind::new(n);
    let mut mst = Vec::with_capacity(target);

    for i in order {
        if mst.len() == target {
            break;
        }
        ops.tick();

        let (u, v) = graph.endpoints()[i];
        let edge = &graph.edges()[i];
        if uf.find(u, &mut ops) != uf.find(v, &mut ops) {
            trace!("Kruskal accepts edge #{} (weight {})", i, edge.weight);
            mst.push(edge.clone());
            uf.union(u, v, &mut ops);
        } else {
            trace!("Kruskal skips edge #{} (weight {}): closes a cycle", i, edge.weight);
        }
    }

    if mst.len() < target {
        warn!(
            "Kruskal selected {} of {} edges: graph is disconnected",
            mst.len(),
            target
        );
    }

    let result = MstResult::new(Algorithm::Kruskal, n, mst, ops, start.elapsed());
    debug!(
        "Kruskal: |V|={} |E|={} edges={} cost={} ops={} time={:?}",
        n,
        graph.edge_count(),
        result.edges().len(),
        result.total_cost(),
        result.operations(),
        result.elapsed()
    );
    result
}
