use std::cmp::Ordering;
use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::data_structures::IndexedMinHeap;
use crate::{Error, Result};

/// An element of the [`DistanceQueue`]: a handle paired with its tentative distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueEntry {
    pub handle: usize,
    pub distance: OrderedFloat<f64>,
}

type EntryComparator = fn(&QueueEntry, &QueueEntry) -> Ordering;

fn by_distance(a: &QueueEntry, b: &QueueEntry) -> Ordering {
    a.distance.cmp(&b.distance)
}

/// A handle-addressed priority queue for shortest path algorithms
///
/// Handles are small integers (vertex ids). The queue remembers the current
/// priority of every queued handle so callers can lower it with
/// [`decrease_key`](Self::decrease_key) without holding on to the old entry.
#[derive(Debug)]
pub struct DistanceQueue {
    /// The underlying indexed heap, ordered by distance only
    heap: IndexedMinHeap<QueueEntry, EntryComparator>,

    /// handle -> distance currently stored in the heap
    priorities: HashMap<usize, OrderedFloat<f64>>,
}

impl DistanceQueue {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: IndexedMinHeap::new(by_distance as EntryComparator),
            priorities: HashMap::new(),
        }
    }

    /// Creates a new empty priority queue sized for `capacity` handles
    pub fn with_capacity(capacity: usize) -> Self {
        DistanceQueue {
            heap: IndexedMinHeap::with_capacity(capacity, by_distance as EntryComparator),
            priorities: HashMap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of handles in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if `handle` is queued
    pub fn contains(&self, handle: usize) -> bool {
        self.priorities.contains_key(&handle)
    }

    /// Returns the distance currently associated with `handle`
    pub fn priority(&self, handle: usize) -> Option<f64> {
        self.priorities.get(&handle).map(|d| d.into_inner())
    }

    /// Queues `handle` with the given distance
    pub fn push(&mut self, handle: usize, distance: f64) -> Result<()> {
        if self.priorities.contains_key(&handle) {
            return Err(Error::DuplicateElement);
        }

        let distance = OrderedFloat(distance);
        self.heap.add(QueueEntry { handle, distance })?;
        self.priorities.insert(handle, distance);
        Ok(())
    }

    /// Removes the handle with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        if self.heap.is_empty() {
            return None;
        }

        match self.heap.remove() {
            Ok(entry) => {
                self.priorities.remove(&entry.handle);
                Some((entry.handle, entry.distance.into_inner()))
            }
            Err(_) => None,
        }
    }

    /// Returns the handle with the smallest distance without removing it
    pub fn peek(&self) -> Option<(usize, f64)> {
        self.heap
            .peek()
            .map(|entry| (entry.handle, entry.distance.into_inner()))
    }

    /// Re-keys `handle` with `new_distance` and restores the heap order
    pub fn decrease_key(&mut self, handle: usize, new_distance: f64) -> Result<()> {
        let old = match self.priorities.get(&handle) {
            Some(&distance) => QueueEntry { handle, distance },
            None => return Err(Error::NotFound),
        };

        let new_distance = OrderedFloat(new_distance);
        self.heap.decrease(
            &old,
            QueueEntry {
                handle,
                distance: new_distance,
            },
        )?;
        self.priorities.insert(handle, new_distance);
        Ok(())
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.priorities.clear();
    }
}

impl Default for DistanceQueue {
    fn default() -> Self {
        Self::new()
    }
}
