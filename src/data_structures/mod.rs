pub mod indexed_heap;
pub mod priority_queue;

pub use indexed_heap::IndexedMinHeap;
pub use priority_queue::{DistanceQueue, QueueEntry};
