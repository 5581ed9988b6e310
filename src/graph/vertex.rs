use std::collections::HashMap;

/// Stable integer identity of a vertex inside one [`Graph`](crate::graph::Graph).
///
/// Ids are handed out in insertion order and never reused, even after the
/// vertex is removed.
pub type VertexId = usize;

/// A weighted edge carrying an arbitrary label
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    label: E,
    weight: f64,
}

impl<E> Edge<E> {
    /// Creates an edge with weight 0
    pub fn new(label: E) -> Self {
        Edge { label, weight: 0.0 }
    }

    pub fn label(&self) -> &E {
        &self.label
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

/// A labeled vertex and its outgoing edges
#[derive(Debug, Clone)]
pub struct Vertex<L, E> {
    id: VertexId,
    label: L,

    /// Outgoing edges: neighbor id -> edge
    adjacency: HashMap<VertexId, Edge<E>>,
}

impl<L, E> Vertex<L, E> {
    pub(crate) fn new(id: VertexId, label: L) -> Self {
        Vertex {
            id,
            label,
            adjacency: HashMap::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if there is an edge from this vertex to `neighbor`
    pub fn has_adjacent(&self, neighbor: VertexId) -> bool {
        self.adjacency.contains_key(&neighbor)
    }

    /// Returns the edge from this vertex to `neighbor`
    pub fn edge_to(&self, neighbor: VertexId) -> Option<&Edge<E>> {
        self.adjacency.get(&neighbor)
    }

    /// Iterates over `(neighbor, edge)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, &Edge<E>)> + '_ {
        self.adjacency.iter().map(|(&id, edge)| (id, edge))
    }

    /// Iterates over `(neighbor, weight)` pairs
    pub fn weighted_neighbors(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.adjacency.iter().map(|(&id, edge)| (id, edge.weight))
    }

    /// Adds an edge unless one to `neighbor` already exists
    pub(crate) fn add_adjacent(&mut self, neighbor: VertexId, label: E) -> bool {
        if self.adjacency.contains_key(&neighbor) {
            return false;
        }
        self.adjacency.insert(neighbor, Edge::new(label));
        true
    }

    pub(crate) fn edge_to_mut(&mut self, neighbor: VertexId) -> Option<&mut Edge<E>> {
        self.adjacency.get_mut(&neighbor)
    }

    pub(crate) fn remove_adjacent(&mut self, neighbor: VertexId) -> Option<Edge<E>> {
        self.adjacency.remove(&neighbor)
    }
}
