use crate::graph::{Graph, GraphKind};
use rand::prelude::*;

/// Label given to the `i`-th generated vertex
pub fn vertex_label(i: usize) -> String {
    format!("v{}", i)
}

/// Generates a random graph with `n` vertices and roughly `edge_factor * n`
/// edges whose weights are drawn from `1.0..100.0`
pub fn generate_random_graph(n: usize, edge_factor: f64, kind: GraphKind) -> Graph<String, String> {
    let mut rng = rand::thread_rng();
    generate_random_graph_with_rng(n, edge_factor, kind, &mut rng)
}

/// Same as [`generate_random_graph`] but driven by the caller's RNG, so a
/// seeded generator reproduces the same graph
pub fn generate_random_graph_with_rng<R: Rng>(
    n: usize,
    edge_factor: f64,
    kind: GraphKind,
    rng: &mut R,
) -> Graph<String, String> {
    let mut graph = Graph::new(kind);
    let labels: Vec<String> = (0..n).map(vertex_label).collect();

    for label in &labels {
        graph.add_vertex(label.clone());
    }

    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops and keep the first weight of a repeated pair
        if u == v {
            continue;
        }

        let (from, to) = (&labels[u], &labels[v]);
        if let Ok(true) = graph.add_edge(from, to, format!("{}-{}", from, to)) {
            let weight = rng.gen_range(1.0..100.0);
            // both endpoints exist and the weight is positive
            let _ = graph.set_edge_weight(from, to, weight);
        }
    }

    graph
}

/// Generates an undirected `width x height` grid with unit weights.
///
/// Vertex `(x, y)` is labeled `vertex_label(y * width + x)`.
pub fn generate_grid(width: usize, height: usize) -> Graph<String, String> {
    let mut graph = Graph::new(GraphKind::Undirected);

    for i in 0..(width * height) {
        graph.add_vertex(vertex_label(i));
    }

    for y in 0..height {
        for x in 0..width {
            let here = vertex_label(y * width + x);
            let mut neighbors = Vec::with_capacity(2);
            if x + 1 < width {
                neighbors.push(vertex_label(y * width + x + 1));
            }
            if y + 1 < height {
                neighbors.push(vertex_label((y + 1) * width + x));
            }

            for there in neighbors {
                if let Ok(true) = graph.add_edge(&here, &there, format!("{}-{}", here, there)) {
                    let _ = graph.set_edge_weight(&here, &there, 1.0);
                }
            }
        }
    }

    graph
}
