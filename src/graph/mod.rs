pub mod generators;
pub mod labeled;
pub mod vertex;

pub use labeled::{Graph, GraphKind};
pub use vertex::{Edge, Vertex, VertexId};
