use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use mst_analysis::analysis::{analyze, InputDocument};

#[derive(Parser, Debug)]
#[command(
    name = "mst_analysis",
    about = "Compare Prim's and Kruskal's minimum spanning trees over a batch of graphs",
    version
)]
struct Args {
    /// Input JSON file with a `graphs` array [default: input.json]
    #[arg(value_name = "INPUT", conflicts_with = "input_flag")]
    input: Option<PathBuf>,

    /// Same as the positional INPUT
    #[arg(short = 'i', long = "input", value_name = "INPUT")]
    input_flag: Option<PathBuf>,

    /// Where to write the JSON report
    #[arg(short, long, value_name = "OUTPUT", default_value = "output.json")]
    output: PathBuf,

    /// Write single-line JSON instead of pretty-printed output
    #[arg(long)]
    compact: bool,
}

impl Args {
    fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .or_else(|| self.input_flag.clone())
            .unwrap_or_else(|| PathBuf::from("input.json"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let input_path = args.input_path();

    let file = File::open(&input_path)
        .with_context(|| format!("failed to open {}", input_path.display()))?;
    let input = InputDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", input_path.display()))?;

    let report = analyze(&input)?;

    for graph in &report.results {
        info!(
            "graph {}: prim cost={} ops={} ({:.2} ms), kruskal cost={} ops={} ({:.2} ms)",
            graph.graph_id,
            graph.prim.total_cost,
            graph.prim.operations_count,
            graph.prim.execution_time_ms,
            graph.kruskal.total_cost,
            graph.kruskal.operations_count,
            graph.kruskal.execution_time_ms,
        );
        if !graph.is_connected() {
            warn!(
                "graph {} is disconnected: results are not spanning trees",
                graph.graph_id
            );
        } else if !graph.costs_agree() {
            warn!("graph {}: Prim and Kruskal costs differ", graph.graph_id);
        }
    }

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    report.to_writer(&mut writer, !args.compact)?;
    writeln!(writer)?;
    writer.flush()?;

    info!(
        "wrote results for {} graph(s) to {}",
        report.results.len(),
        args.output.display()
    );
    Ok(())
}
