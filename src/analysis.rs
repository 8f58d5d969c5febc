//! Batch analysis over JSON graph descriptions.
//!
//! Reads a document of the form
//! `{"graphs": [{"id": 1, "nodes": [..], "edges": [{"from", "to", "weight"}]}]}`,
//! runs both MST builders on every graph and produces a
//! `{"results": [..]}` report with cost, operation count and timing per
//! algorithm.

use std::io::{Read, Write};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{build_kruskal, build_prim, Cost, Edge, Graph, MstResult};

/// One graph as it appears in the input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInput {
    pub id: i64,
    pub nodes: Vec<String>,
    pub edges: Vec<Edge<String>>,
}

impl GraphInput {
    /// Validates this description into a [`Graph`].
    pub fn to_graph(&self) -> Result<Graph<String>> {
        Graph::new(self.nodes.clone(), self.edges.clone()).map_err(|e| Error::InvalidGraph {
            id: self.id,
            source: Box::new(e),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDocument {
    pub graphs: Vec<GraphInput>,
}

impl InputDocument {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

/// Report for one algorithm on one graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub mst_edges: Vec<Edge<String>>,
    pub total_cost: Cost,
    pub operations_count: u64,
    /// Milliseconds, rounded to two decimals.
    pub execution_time_ms: f64,
}

impl From<&MstResult<String>> for AlgorithmReport {
    fn from(result: &MstResult<String>) -> Self {
        Self {
            mst_edges: result.edges().to_vec(),
            total_cost: result.total_cost(),
            operations_count: result.operations(),
            execution_time_ms: round_ms(result.elapsed_ms()),
        }
    }
}

fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphReport {
    pub graph_id: i64,
    pub input_stats: InputStats,
    pub prim: AlgorithmReport,
    pub kruskal: AlgorithmReport,
}

impl GraphReport {
    /// Both builders agree on the minimum total cost.
    pub fn costs_agree(&self) -> bool {
        self.prim.total_cost == self.kruskal.total_cost
    }

    /// Whether both results span every vertex, i.e. the graph is connected.
    pub fn is_connected(&self) -> bool {
        let target = self.input_stats.vertices.saturating_sub(1);
        self.prim.mst_edges.len() == target && self.kruskal.mst_edges.len() == target
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub results: Vec<GraphReport>,
}

impl OutputDocument {
    pub fn to_writer<W: Write>(&self, writer: W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_json::to_writer(writer, self)?;
        }
        Ok(())
    }

    pub fn to_string(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Validates `desc` and runs Prim's then Kruskal's algorithm on it.
pub fn analyze_graph(desc: &GraphInput) -> Result<GraphReport> {
    let graph = desc.to_graph()?;
    debug!(
        "graph {}: {} vertices, {} edges",
        desc.id,
        graph.vertex_count(),
        graph.edge_count()
    );

    let prim = build_prim(&graph);
    let kruskal = build_kruskal(&graph);

    Ok(GraphReport {
        graph_id: desc.id,
        input_stats: InputStats {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        },
        prim: AlgorithmReport::from(&prim),
        kruskal: AlgorithmReport::from(&kruskal),
    })
}

/// Analyzes every graph of `input` in order. Stops at the first invalid graph.
pub fn analyze(input: &InputDocument) -> Result<OutputDocument> {
    let results = input
        .graphs
        .iter()
        .map(analyze_graph)
        .collect::<Result<Vec<_>>>()?;
    info!("analyzed {} graph(s)", results.len());
    Ok(OutputDocument { results })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"{
        "graphs": [
            {
                "id": 1,
                "nodes": ["A", "B", "C"],
                "edges": [
                    {"from": "A", "to": "B", "weight": 1},
                    {"from": "B", "to": "C", "weight": 2},
                    {"from": "A", "to": "C", "weight": 3}
                ]
            },
            {
                "id": 2,
                "nodes": ["A", "B", "C", "D"],
                "edges": [
                    {"from": "A", "to": "B", "weight": 5},
                    {"from": "C", "to": "D", "weight": 7}
                ]
            }
        ]
    }"#;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_parse_input() {
        let doc = InputDocument::from_str(INPUT).unwrap();
        assert_eq!(doc.graphs.len(), 2);
        assert_eq!(doc.graphs[0].nodes, vec!["A", "B", "C"]);
        assert_eq!(doc.graphs[1].edges[1], Edge::new("C".to_string(), "D".to_string(), 7));
    }

    #[test]
    fn test_analyze_batch() {
        log_init_test();
        let doc = InputDocument::from_str(INPUT).unwrap();
        let out = analyze(&doc).unwrap();
        assert_eq!(out.results.len(), 2);

        let first = &out.results[0];
        assert_eq!(first.graph_id, 1);
        assert_eq!(first.input_stats, InputStats { vertices: 3, edges: 3 });
        assert_eq!(first.prim.total_cost, 3);
        assert_eq!(first.kruskal.total_cost, 3);
        assert_eq!(first.prim.operations_count, 6);
        assert_eq!(first.kruskal.operations_count, 12);
        assert!(first.costs_agree());
        assert!(first.is_connected());

        let second = &out.results[1];
        assert_eq!(second.prim.total_cost, 5);
        assert_eq!(second.kruskal.total_cost, 12);
        assert!(!second.costs_agree());
        assert!(!second.is_connected());
    }

    #[test]
    fn test_invalid_graph_reports_id() {
        let doc = InputDocument {
            graphs: vec![GraphInput {
                id: 42,
                nodes: vec!["A".into()],
                edges: vec![Edge::new("A".into(), "B".into(), 1)],
            }],
        };
        match analyze(&doc) {
            Err(Error::InvalidGraph { id, source }) => {
                assert_eq!(id, 42);
                assert!(matches!(*source, Error::VertexNotFound { edge: 0, .. }));
            }
            other => panic!("expected InvalidGraph, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_node_list_rejected() {
        let doc =
            InputDocument::from_str(r#"{"graphs": [{"id": 3, "nodes": [], "edges": []}]}"#)
                .unwrap();
        let err = analyze(&doc).unwrap_err();
        assert_eq!(err.to_string(), "graph 3: graph has no vertices");
    }

    #[test]
    fn test_output_shape() {
        let doc = InputDocument::from_str(INPUT).unwrap();
        let out = analyze(&doc).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out.to_string(false).unwrap()).unwrap();

        let prim = &json["results"][0]["prim"];
        assert_eq!(prim["mst_edges"][1]["from"], "B");
        assert_eq!(prim["mst_edges"][1]["to"], "C");
        assert_eq!(prim["mst_edges"][1]["weight"], 2);
        assert_eq!(prim["total_cost"], 3);
        assert!(prim["execution_time_ms"].is_number());
        assert_eq!(json["results"][1]["input_stats"]["vertices"], 4);
    }

    #[test]
    fn test_pretty_and_compact_output_match() {
        let doc = InputDocument::from_str(INPUT).unwrap();
        let out = analyze(&doc).unwrap();
        let pretty = out.to_string(true).unwrap();
        let compact = out.to_string(false).unwrap();
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));

        let mut written = Vec::new();
        out.to_writer(&mut written, false).unwrap();
        assert_eq!(written, compact.as_bytes());

        let reparsed: OutputDocument = serde_json::from_str(&pretty).unwrap();
        assert_eq!(reparsed.results[0].prim.mst_edges, out.results[0].prim.mst_edges);
    }

    #[test]
    fn test_round_ms() {
        assert_eq!(round_ms(1.234), 1.23);
        assert_eq!(round_ms(2.678), 2.68);
        assert_eq!(round_ms(0.0), 0.0);
    }
}
