pub mod traits;
pub mod dijkstra;

pub use traits::{SettledVertex, ShortestPathAlgorithm, ShortestPathResult};
