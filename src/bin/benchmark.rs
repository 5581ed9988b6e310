use std::time::{Duration, Instant};

use labeled_sssp::graph::generators::{generate_random_graph, vertex_label};
use labeled_sssp::{Dijkstra, Graph, GraphKind, ShortestPathAlgorithm};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &Graph<String, String>, source: &String) -> Duration
where
    A: ShortestPathAlgorithm,
{
    println!(
        "Running {} on graph with {} vertices...",
        algorithm.name(),
        graph.number_vertices()
    );

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source).unwrap();
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.len(), duration);

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra over labeled graphs");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        for kind in [GraphKind::Directed, GraphKind::Undirected] {
            println!("\nGenerating {:?} random graph with {} vertices...", kind, size);
            let graph = generate_random_graph(size, edge_factor, kind);
            println!(
                "Graph has {} vertices and {} edges",
                graph.number_vertices(),
                graph.number_edges()
            );

            let time = benchmark_algorithm(&dijkstra, &graph, &vertex_label(0));
            results.push((size, kind, time));
        }
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<15}", "Vertices", "Kind", "Dijkstra (ms)");
    println!("-----------------------------------------------------");

    for (size, kind, time) in &results {
        println!(
            "{:<10} | {:<12} | {:<15.2}",
            size,
            format!("{:?}", kind),
            time.as_secs_f64() * 1000.0
        );
    }
}
