//! Labeled SSSP - Dijkstra shortest paths over label-addressed graphs
//!
//! The crate is built from three pieces: a weighted graph whose vertices are
//! addressed by label, an indexed binary min-heap that supports replacing an
//! element in logarithmic time, and Dijkstra's algorithm composing the two.
//! Thin collaborators load graphs from `from,to,weight` records and render the
//! resulting paths.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use config::Config;
pub use data_structures::{DistanceQueue, IndexedMinHeap};
/// Re-export main types for convenient use
pub use graph::{Edge, Graph, GraphKind, Vertex, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Element is already in the heap")]
    DuplicateElement,

    #[error("Element not found in the heap")]
    NotFound,

    #[error("Cannot remove the root of an empty heap")]
    EmptyHeap,

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
