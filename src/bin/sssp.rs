use std::env;
use std::process;
use std::time::Instant;

use colored::Colorize;
use labeled_sssp::config::OutputFormat;
use labeled_sssp::io::{load_file, PathReport};
use labeled_sssp::{Config, Dijkstra, Graph, ShortestPathAlgorithm};

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: {} <records.csv>", args[0]);
        process::exit(2);
    }

    if let Err(e) = run(&args[1]) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let mut graph: Graph<String, String> = Graph::new(config.graph_kind);

    println!("{}", "Loading data from file...".yellow());
    let summary = load_file(path, &mut graph)?;
    println!(
        "{}",
        format!(
            "Data loaded: {} records, {} skipped",
            summary.loaded,
            summary.errors.len()
        )
        .yellow()
    );

    let dijkstra = Dijkstra::new();
    let start = Instant::now();
    let result = dijkstra.compute_shortest_paths(&graph, &config.source)?;
    let elapsed = start.elapsed();
    println!(
        "{} {}",
        format!("Time taken by {}:", dijkstra.name()).cyan(),
        format!("{:.2} milliseconds", elapsed.as_secs_f64() * 1000.0).green().bold()
    );

    let report = PathReport::new(&result, &config.source, &config.destination);
    match config.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
