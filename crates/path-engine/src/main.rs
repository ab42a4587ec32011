use anyhow::Result;
use path_core::engine::ShortestPathEngine;
use path_core::report::ShortestPathReport;
use path_core::topology::Graph;
use std::env;
use tracing_subscriber::EnvFilter;

fn sample_graph() -> Graph<String> {
    let adjacency: [(&str, &[(&str, f64)]); 5] = [
        ("A", &[("B", 3.0), ("C", 5.0)]),
        ("B", &[("C", 2.0), ("D", 6.0)]),
        ("C", &[("B", 1.0), ("D", 4.0), ("E", 6.0)]),
        ("D", &[("E", 2.0)]),
        ("E", &[("A", 3.0), ("D", 7.0)]),
    ];

    adjacency
        .into_iter()
        .map(|(vertex, neighbors)| {
            let neighbors: Vec<(String, f64)> = neighbors
                .iter()
                .map(|&(target, weight)| (target.to_string(), weight))
                .collect();
            (vertex.to_string(), neighbors)
        })
        .collect()
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.contains(&"--json".to_string());

    // Source from argv, then env, then default
    let source = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .cloned()
        .or_else(|| env::var("BELLMAN_SOURCE").ok())
        .unwrap_or_else(|| "A".to_string());

    let graph = sample_graph();
    let engine = ShortestPathEngine::from_env();
    let paths = engine.compute_shortest_paths(&graph, &source)?;
    let report = ShortestPathReport::new(&paths);

    if as_json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
