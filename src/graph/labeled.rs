use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use log::{debug, warn};

use crate::graph::vertex::{Edge, Vertex, VertexId};
use crate::{Error, Result};

/// Whether edges are one-way or mirrored onto both endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

/// A weighted graph whose vertices are addressed by label
///
/// Vertices are stored in insertion order and keep a stable [`VertexId`];
/// removed vertices leave an empty slot behind so ids are never re-assigned.
/// In an undirected graph every edge insertion, weight change and removal is
/// applied to both endpoints, so `edge(a, b)` and `edge(b, a)` always exist
/// together with the same weight.
#[derive(Debug, Clone)]
pub struct Graph<L, E>
where
    L: Eq + Hash + Clone + Debug,
    E: Clone + Debug,
{
    kind: GraphKind,

    /// label -> id of the live vertex
    ids: HashMap<L, VertexId>,

    /// Vertex slots indexed by id; `None` once removed
    vertices: Vec<Option<Vertex<L, E>>>,
}

impl<L, E> Graph<L, E>
where
    L: Eq + Hash + Clone + Debug,
    E: Clone + Debug,
{
    /// Creates a new empty graph of the given kind
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            kind,
            ids: HashMap::new(),
            vertices: Vec::new(),
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Returns the number of live vertices
    pub fn number_vertices(&self) -> usize {
        self.ids.len()
    }

    /// Returns the number of edges; mirrored pairs count once when undirected
    pub fn number_edges(&self) -> usize {
        let mut sum = 0;
        let mut self_loops = 0;
        for vertex in self.vertices() {
            sum += vertex.out_degree();
            if vertex.has_adjacent(vertex.id()) {
                self_loops += 1;
            }
        }

        if self.is_directed() {
            sum
        } else {
            // a self-loop occupies a single adjacency entry
            (sum + self_loops) / 2
        }
    }

    /// Upper bound (exclusive) of every id handed out so far
    pub fn slot_count(&self) -> usize {
        self.vertices.len()
    }

    /// Adds a vertex; returns false if the label is already present
    pub fn add_vertex(&mut self, label: L) -> bool {
        if self.ids.contains_key(&label) {
            return false;
        }

        let id = self.vertices.len();
        self.vertices.push(Some(Vertex::new(id, label.clone())));
        self.ids.insert(label, id);
        true
    }

    pub fn get_vertex(&self, label: &L) -> Option<&Vertex<L, E>> {
        self.ids.get(label).and_then(|&id| self.vertex_by_id(id))
    }

    pub fn vertex_id(&self, label: &L) -> Option<VertexId> {
        self.ids.get(label).copied()
    }

    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<L, E>> {
        self.vertices.get(id).and_then(|slot| slot.as_ref())
    }

    pub fn label_of(&self, id: VertexId) -> Option<&L> {
        self.vertex_by_id(id).map(|v| v.label())
    }

    pub fn contains_vertex(&self, label: &L) -> bool {
        self.ids.contains_key(label)
    }

    /// Returns true if an edge joins `a` and `b` in either direction
    pub fn contains_edge(&self, a: &L, b: &L) -> bool {
        self.are_adjacent(a, b) || self.are_adjacent(b, a)
    }

    /// Returns true if there is an edge from `from` to `to`
    pub fn are_adjacent(&self, from: &L, to: &L) -> bool {
        match (self.get_vertex(from), self.vertex_id(to)) {
            (Some(vertex), Some(to)) => vertex.has_adjacent(to),
            _ => false,
        }
    }

    /// Returns true if `a` and `b` are adjacent in both directions
    pub fn are_complete_adjacent(&self, a: &L, b: &L) -> bool {
        self.are_adjacent(a, b) && self.are_adjacent(b, a)
    }

    /// Iterates over the live vertices in id order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<L, E>> + '_ {
        self.vertices.iter().filter_map(|slot| slot.as_ref())
    }

    /// Iterates over the labels of the live vertices
    pub fn vertex_labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.vertices().map(|v| v.label())
    }

    /// Iterates over every adjacency entry as `(from, to, edge)`.
    ///
    /// Undirected graphs yield each edge once per direction.
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L, &Edge<E>)> + '_ {
        self.vertices().flat_map(move |vertex| {
            vertex.edges().filter_map(move |(to, edge)| {
                self.label_of(to).map(|to| (vertex.label(), to, edge))
            })
        })
    }

    /// Iterates over `(neighbor, weight)` pairs of the vertex with id `id`
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.vertex_by_id(id)
            .into_iter()
            .flat_map(|vertex| vertex.weighted_neighbors())
    }

    pub fn get_edge(&self, from: &L, to: &L) -> Option<&Edge<E>> {
        let to = self.vertex_id(to)?;
        self.get_vertex(from)?.edge_to(to)
    }

    pub fn edge_weight(&self, from: &L, to: &L) -> Option<f64> {
        self.get_edge(from, to).map(|e| e.weight())
    }

    /// Adds an edge of weight 0 from `from` to `to`.
    ///
    /// Returns `Ok(false)` if the edge already exists; it is left untouched.
    pub fn add_edge(&mut self, from: &L, to: &L, edge_label: E) -> Result<bool> {
        let from_id = self.require(from, "from")?;
        let to_id = self.require(to, "to")?;

        if self.vertex_mut(from_id)?.has_adjacent(to_id) {
            return Ok(false);
        }

        if !self.is_directed() && from_id != to_id {
            self.vertex_mut(to_id)?.add_adjacent(from_id, edge_label.clone());
        }
        self.vertex_mut(from_id)?.add_adjacent(to_id, edge_label);

        Ok(true)
    }

    /// Sets the weight of the edge from `from` to `to` (and its mirror)
    pub fn set_edge_weight(&mut self, from: &L, to: &L, weight: f64) -> Result<()> {
        if weight.is_nan() || weight < 0.0 {
            return Err(Error::NegativeWeight(weight));
        }

        let from_id = self.require(from, "from")?;
        let to_id = self.require(to, "to")?;

        if !self.vertex_mut(from_id)?.has_adjacent(to_id) {
            return Err(Error::Graph(format!(
                "There is no edge between {:?} and {:?}",
                from, to
            )));
        }

        if !self.is_directed() {
            let mirrored = self
                .vertex_mut(to_id)?
                .edge_to_mut(from_id)
                .map(|mirror| mirror.set_weight(weight))
                .is_some();
            if !mirrored {
                return Err(self.mirror_missing(to, from));
            }
        }
        if let Some(edge) = self.vertex_mut(from_id)?.edge_to_mut(to_id) {
            edge.set_weight(weight);
        }

        Ok(())
    }

    /// Removes the vertex `label` and every edge pointing at it
    pub fn remove_vertex(&mut self, label: &L) -> Option<Vertex<L, E>> {
        let id = self.ids.remove(label)?;
        let removed = self.vertices.get_mut(id).and_then(|slot| slot.take())?;

        let mut dropped = 0;
        for vertex in self.vertices.iter_mut().flatten() {
            if vertex.remove_adjacent(id).is_some() {
                dropped += 1;
            }
        }
        debug!(
            "Removed vertex {:?} with {} outgoing and {} incoming edges",
            label,
            removed.out_degree(),
            dropped
        );

        Some(removed)
    }

    /// Removes the edge between `a` and `b` and returns it
    pub fn remove_edge(&mut self, a: &L, b: &L) -> Result<Edge<E>> {
        let a_id = self.require(a, "a")?;
        let b_id = self.require(b, "b")?;

        let removed = match self.vertex_mut(a_id)?.remove_adjacent(b_id) {
            Some(edge) => edge,
            None => {
                return Err(Error::Graph(format!(
                    "There is no edge between {:?} and {:?}",
                    a, b
                )))
            }
        };

        if !self.is_directed() && a_id != b_id {
            let mirrored = self.vertex_mut(b_id)?.remove_adjacent(a_id).is_some();
            if !mirrored {
                return Err(self.mirror_missing(b, a));
            }
        }

        Ok(removed)
    }

    /// Returns the vertices reachable through one outgoing edge of `label`.
    ///
    /// `None` if the label is unknown, an empty vector if it has no neighbors.
    pub fn adjacent_vertices(&self, label: &L) -> Option<Vec<&Vertex<L, E>>> {
        let vertex = self.get_vertex(label)?;
        Some(
            vertex
                .edges()
                .filter_map(|(id, _)| self.vertex_by_id(id))
                .collect(),
        )
    }

    /// Label flavour of [`adjacent_vertices`](Self::adjacent_vertices)
    pub fn adjacent_labels(&self, label: &L) -> Option<HashSet<L>> {
        self.adjacent_vertices(label)
            .map(|vertices| vertices.into_iter().map(|v| v.label().clone()).collect())
    }

    fn require(&self, label: &L, role: &str) -> Result<VertexId> {
        self.vertex_id(label).ok_or_else(|| {
            Error::Graph(format!("There is no vertex {} = {:?} in the graph", role, label))
        })
    }

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex<L, E>> {
        self.vertices
            .get_mut(id)
            .and_then(|slot| slot.as_mut())
            .ok_or_else(|| Error::Graph(format!("Vertex id {} is not live", id)))
    }

    fn mirror_missing(&self, from: &L, to: &L) -> Error {
        warn!("Undirected graph lost the mirror edge {:?} -> {:?}", from, to);
        Error::Graph(format!(
            "There is no mirror edge between {:?} and {:?} in the undirected graph",
            from, to
        ))
    }
}

impl<L, E> Default for Graph<L, E>
where
    L: Eq + Hash + Clone + Debug,
    E: Clone + Debug,
{
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

impl<L, E> Display for Graph<L, E>
where
    L: Eq + Hash + Clone + Debug,
    E: Clone + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for vertex in self.vertices() {
            write!(f, "  {:?}: {{", vertex.label())?;
            let mut first = true;
            for (to, edge) in vertex.edges() {
                if let Some(to) = self.label_of(to) {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}={}", to, edge.weight())?;
                    first = false;
                }
            }
            writeln!(f, "}}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_not_reused() {
        let mut graph: Graph<&str, ()> = Graph::directed();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.remove_vertex(&"a");
        graph.add_vertex("c");

        assert_eq!(graph.vertex_id(&"b"), Some(1));
        assert_eq!(graph.vertex_id(&"c"), Some(2));
        assert_eq!(graph.slot_count(), 3);
        assert_eq!(graph.number_vertices(), 2);
    }

    #[test]
    fn test_undirected_self_loop_counts_once() {
        let mut graph: Graph<&str, &str> = Graph::undirected();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge(&"a", &"a", "loop").unwrap();
        graph.add_edge(&"a", &"b", "ab").unwrap();

        assert_eq!(graph.number_edges(), 2);
        assert!(graph.remove_edge(&"a", &"a").is_ok());
        assert_eq!(graph.number_edges(), 1);
    }

    #[test]
    fn test_display_lists_neighbors() {
        let mut graph: Graph<&str, &str> = Graph::directed();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_edge(&"a", &"b", "ab").unwrap();
        graph.set_edge_weight(&"a", &"b", 2.5).unwrap();

        let rendered = graph.to_string();
        assert!(rendered.contains("\"a\": {\"b\"=2.5}"));
        assert!(rendered.contains("\"b\": {}"));
    }
}
