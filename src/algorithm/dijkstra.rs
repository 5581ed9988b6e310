use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::algorithm::traits::SettledVertex;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceQueue;
use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Every live vertex is queued up front (the source at 0, the rest at
/// infinity) and lowered through [`DistanceQueue::decrease_key`] as shorter
/// paths are discovered. Edge weights must be non-negative, which
/// [`Graph::set_edge_weight`] enforces.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<L, E>(
        &self,
        graph: &Graph<L, E>,
        source: &L,
    ) -> Result<ShortestPathResult<L>>
    where
        L: Eq + Hash + Clone + Debug,
        E: Clone + Debug,
    {
        let source = graph.vertex_id(source).ok_or(Error::SourceNotFound)?;

        let n = graph.slot_count();

        // Initialize distances and predecessors
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
        distances[source] = 0.0;

        let mut queue = DistanceQueue::with_capacity(graph.number_vertices());
        for vertex in graph.vertices() {
            queue.push(vertex.id(), distances[vertex.id()])?;
        }

        let mut visited = Vec::new();

        while let Some((u, dist_u)) = queue.pop() {
            // Everything left in the queue is unreachable
            if !dist_u.is_finite() {
                continue;
            }

            let label = match graph.label_of(u) {
                Some(label) => label.clone(),
                None => continue,
            };
            trace!("Settled {:?} at distance {}", label, dist_u);
            visited.push(SettledVertex {
                id: u,
                label,
                distance: dist_u,
                predecessor: predecessors[u],
            });

            // Relax all outgoing edges
            for (v, weight) in graph.neighbors(u) {
                let alt = dist_u + weight;
                if alt < distances[v] {
                    distances[v] = alt;
                    predecessors[v] = Some(u);
                    queue.decrease_key(v, alt)?;
                }
            }
        }

        debug!(
            "{} settled {} of {} vertices",
            self.name(),
            visited.len(),
            graph.number_vertices()
        );

        Ok(ShortestPathResult::new(source, distances, predecessors, visited))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_vertex() {
        let mut graph: Graph<&str, ()> = Graph::directed();
        graph.add_vertex("solo");

        let result = Dijkstra::new().compute_shortest_paths(&graph, &"solo").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.distance(&"solo"), 0.0);
        assert_eq!(result.path(&"solo"), Some(vec!["solo"]));
    }

    #[test]
    fn test_removed_vertices_are_skipped() {
        let mut graph: Graph<&str, ()> = Graph::directed();
        for label in ["a", "b", "c"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"a", &"c", ()).unwrap();
        graph.set_edge_weight(&"a", &"c", 2.0).unwrap();
        graph.remove_vertex(&"b");

        let result = Dijkstra::new().compute_shortest_paths(&graph, &"a").unwrap();
        assert_eq!(result.distances.len(), 3);
        assert_eq!(result.distance(&"c"), 2.0);
        assert!(!result.contains(&"b"));
    }
}
