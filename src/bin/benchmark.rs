use std::fs::File;
use std::hint::black_box;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use waypath::benchmark::{sample, BenchmarkConfig, Measurement};
use waypath::{AlgorithmKind, Graph, MultiPathFinder, PathFinder};

/// Times every path finder on a set of graph files
#[derive(Debug, Parser)]
#[command(name = "benchmark", version)]
struct Args {
    /// Graph files in the plain-text format
    #[arg(required = true)]
    graphs: Vec<PathBuf>,

    /// Start vertex of the timed query
    #[arg(long, default_value = "1")]
    start: String,

    /// Goal vertex of the timed query
    #[arg(long, default_value = "2")]
    goal: String,

    /// CSV output: vertices, four means, four confidence half-widths
    #[arg(short, long, default_value = "result.csv")]
    output: PathBuf,

    /// Also write a JSON report to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Untimed runs before each sample
    #[arg(long, default_value_t = 5)]
    warmup: usize,

    /// Timed runs per sample
    #[arg(long, default_value_t = 20)]
    repetitions: usize,
}

impl Args {
    fn benchmark_config(&self) -> BenchmarkConfig {
        BenchmarkConfig::default()
            .with_warmup(self.warmup)
            .with_repetitions(self.repetitions)
    }
}

#[derive(Debug, Serialize)]
struct AlgorithmReport {
    algorithm: String,
    measurement: Option<Measurement>,
}

#[derive(Debug, Serialize)]
struct GraphReport {
    file: String,
    vertices: usize,
    results: Vec<AlgorithmReport>,
}

fn bench_single(
    config: &BenchmarkConfig,
    graph: &Graph<String, i64>,
    kind: AlgorithmKind,
    start: &String,
    goal: &String,
) -> Option<Measurement> {
    if let Err(err) = PathFinder::new(graph, kind) {
        log::warn!("{} rejected the graph: {}", kind, err);
        return None;
    }
    Some(sample(config, || {
        // Construction includes validation, which is part of the cost being compared
        if let Ok(finder) = PathFinder::new(graph, kind) {
            black_box(finder.get_path(start, goal).ok());
        }
    }))
}

fn bench_multi(
    config: &BenchmarkConfig,
    graph: &Graph<String, i64>,
    start: &String,
    goal: &String,
) -> Option<Measurement> {
    let mut graph = graph.clone();
    if let Err(err) = MultiPathFinder::dijkstra(&mut graph) {
        log::warn!("multi rejected the graph: {}", err);
        return None;
    }
    let waypoints = [start.clone(), goal.clone()];
    Some(sample(config, || {
        if let Ok(mut finder) = MultiPathFinder::dijkstra(&mut graph) {
            black_box(finder.get_path(&waypoints).ok());
        }
    }))
}

fn csv_cell(value: Option<f64>) -> String {
    value.map(|v| format!("{:.9}", v)).unwrap_or_default()
}

/// Vertex count, then every mean, then every half-width
fn csv_row(vertices: usize, results: &[AlgorithmReport]) -> String {
    let means = results
        .iter()
        .map(|r| csv_cell(r.measurement.map(|m| m.mean_secs)));
    let deltas = results
        .iter()
        .map(|r| csv_cell(r.measurement.map(|m| m.delta_secs)));
    std::iter::once(vertices.to_string())
        .chain(means)
        .chain(deltas)
        .collect::<Vec<_>>()
        .join(",")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = args.benchmark_config();

    let mut csv = BufWriter::new(File::create(&args.output)?);
    let mut reports = Vec::with_capacity(args.graphs.len());

    for (index, path) in args.graphs.iter().enumerate() {
        let graph = Graph::from_file(path)?;
        log::info!(
            "[{}/{}] {} ({} vertices)",
            index + 1,
            args.graphs.len(),
            path.display(),
            graph.len()
        );

        let mut results = Vec::with_capacity(AlgorithmKind::ALL.len() + 1);
        for kind in AlgorithmKind::ALL {
            results.push(AlgorithmReport {
                algorithm: kind.to_string(),
                measurement: bench_single(&config, &graph, kind, &args.start, &args.goal),
            });
        }
        results.push(AlgorithmReport {
            algorithm: "multi".to_string(),
            measurement: bench_multi(&config, &graph, &args.start, &args.goal),
        });

        writeln!(csv, "{}", csv_row(graph.len(), &results))?;

        reports.push(GraphReport {
            file: path.display().to_string(),
            vertices: graph.len(),
            results,
        });
    }
    csv.flush()?;

    if let Some(json_path) = &args.json {
        serde_json::to_writer_pretty(BufWriter::new(File::create(json_path)?), &reports)?;
    }

    println!(
        "Benchmarked {} graphs, results written to {}",
        reports.len(),
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("benchmark").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["a.graph", "b.graph"]);
        assert_eq!(args.graphs, vec![PathBuf::from("a.graph"), PathBuf::from("b.graph")]);
        assert_eq!((args.start.as_str(), args.goal.as_str()), ("1", "2"));
        assert_eq!(args.output, PathBuf::from("result.csv"));
        assert!(args.json.is_none());

        let config = args.benchmark_config();
        assert_eq!((config.warmup, config.repetitions), (5, 20));
    }

    #[test]
    fn test_timing_flags() {
        let args = parse(&["g.graph", "--warmup", "0", "--repetitions", "0", "--goal", "7"]);
        assert_eq!(args.goal, "7");

        let config = args.benchmark_config();
        assert_eq!(config.warmup, 0);
        assert_eq!(config.repetitions, 1);
    }

    #[test]
    fn test_graph_files_are_required() {
        assert!(Args::try_parse_from(["benchmark"]).is_err());
    }

    #[test]
    fn test_csv_row_layout() {
        let results = vec![
            AlgorithmReport {
                algorithm: "dijkstra".to_string(),
                measurement: Some(Measurement {
                    mean_secs: 0.5,
                    delta_secs: 0.25,
                }),
            },
            AlgorithmReport {
                algorithm: "spfa".to_string(),
                measurement: None,
            },
        ];
        assert_eq!(csv_row(4, &results), "4,0.500000000,,0.250000000,");
    }
}
