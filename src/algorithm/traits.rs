use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;
use serde::Serialize;

use crate::graph::{Graph, VertexId};
use crate::Result;

/// A vertex settled by a shortest path run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettledVertex<L> {
    pub id: VertexId,
    pub label: L,
    /// Final distance from the source
    pub distance: f64,
    /// Previous vertex on the shortest path; `None` for the source
    pub predecessor: Option<VertexId>,
}

/// Result of a shortest path algorithm execution
///
/// All state is owned by the result, so the graph it was computed on can be
/// queried, re-run or mutated afterwards without affecting it.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<L> {
    /// Source vertex ID
    pub source: VertexId,

    /// Distances indexed by vertex id; `f64::INFINITY` when unreachable
    pub distances: Vec<f64>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<VertexId>>,

    /// Reachable vertices in the order they were settled
    visited: Vec<SettledVertex<L>>,

    /// label -> index into `visited`
    by_label: HashMap<L, usize>,

    /// vertex id -> index into `visited`
    by_id: HashMap<VertexId, usize>,
}

impl<L> ShortestPathResult<L>
where
    L: Eq + Hash + Clone + Debug,
{
    pub fn new(
        source: VertexId,
        distances: Vec<f64>,
        predecessors: Vec<Option<VertexId>>,
        visited: Vec<SettledVertex<L>>,
    ) -> Self {
        let by_label = visited
            .iter()
            .enumerate()
            .map(|(i, v)| (v.label.clone(), i))
            .collect();
        let by_id = visited.iter().enumerate().map(|(i, v)| (v.id, i)).collect();

        ShortestPathResult {
            source,
            distances,
            predecessors,
            visited,
            by_label,
            by_id,
        }
    }

    /// The reachable vertices, in settle order (source first)
    pub fn visited(&self) -> &[SettledVertex<L>] {
        &self.visited
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn get(&self, label: &L) -> Option<&SettledVertex<L>> {
        self.by_label.get(label).map(|&i| &self.visited[i])
    }

    pub fn contains(&self, label: &L) -> bool {
        self.by_label.contains_key(label)
    }

    /// Distance to `label`, `f64::INFINITY` if it was not reached
    pub fn distance(&self, label: &L) -> f64 {
        self.get(label).map_or(f64::INFINITY, |v| v.distance)
    }

    /// Label of the predecessor of `label` on its shortest path
    pub fn predecessor(&self, label: &L) -> Option<&L> {
        let pred = self.get(label)?.predecessor?;
        self.by_id.get(&pred).map(|&i| &self.visited[i].label)
    }

    /// Walks the predecessor links from `target` back to the source and
    /// returns the labels from source to target
    pub fn path(&self, target: &L) -> Option<Vec<L>> {
        let mut current = self.get(target)?;
        let mut path = vec![current.label.clone()];

        while let Some(pred) = current.predecessor {
            // a tree over `visited` can never be longer than `visited`
            if path.len() > self.visited.len() {
                warn!("Cycle detected in path reconstruction at vertex {:?}", current.label);
                return None;
            }

            current = match self.by_id.get(&pred) {
                Some(&i) => &self.visited[i],
                None => {
                    warn!("Predecessor {} of {:?} was never settled", pred, current.label);
                    return None;
                }
            };
            path.push(current.label.clone());
        }

        if current.id != self.source {
            return None;
        }

        path.reverse();
        Some(path)
    }

    /// Number of edges on the shortest path to `target`
    pub fn hops(&self, target: &L) -> Option<usize> {
        self.path(target).map(|p| p.len() - 1)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths<L, E>(
        &self,
        graph: &Graph<L, E>,
        source: &L,
    ) -> Result<ShortestPathResult<L>>
    where
        L: Eq + Hash + Clone + Debug,
        E: Clone + Debug;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of labels
    fn get_path<L>(&self, result: &ShortestPathResult<L>, target: &L) -> Option<Vec<L>>
    where
        L: Eq + Hash + Clone + Debug,
    {
        result.path(target)
    }
}
