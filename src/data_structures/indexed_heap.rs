use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// A binary min-heap over value-identity elements
///
/// Elements live in a dense vector laid out as an implicit binary tree
/// (parent of `i` is `(i - 1) / 2`, children are `2i + 1` and `2i + 2`).
/// A position table maps every element to its current index, so an element
/// can be located, replaced or re-ordered by value in O(1) + O(log n).
///
/// Ordering comes from the injected comparator rather than from `Ord` on `T`,
/// which lets callers order composite elements by a single field.
pub struct IndexedMinHeap<T, C>
where
    T: Eq + Hash + Clone + Debug,
    C: Fn(&T, &T) -> Ordering,
{
    /// The implicit binary tree
    elements: Vec<T>,

    /// element -> index into `elements`
    positions: HashMap<T, usize>,

    /// Total order used to compare elements
    comparator: C,
}

impl<T, C> IndexedMinHeap<T, C>
where
    T: Eq + Hash + Clone + Debug,
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates a new empty heap ordered by `comparator`
    pub fn new(comparator: C) -> Self {
        IndexedMinHeap {
            elements: Vec::new(),
            positions: HashMap::new(),
            comparator,
        }
    }

    /// Creates a new empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        IndexedMinHeap {
            elements: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            comparator,
        }
    }

    /// Creates a heap from an optional comparator, failing when it is absent
    pub fn from_comparator(comparator: Option<C>) -> Result<Self> {
        comparator.map(Self::new).ok_or_else(|| {
            Error::InvalidArgument("IndexedMinHeap requires a comparator".to_string())
        })
    }

    /// Returns the number of elements in the heap
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Alias of [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true if an element equal to `element` is in the heap
    pub fn contains(&self, element: &T) -> bool {
        self.positions.contains_key(element)
    }

    /// Returns the current index of `element` in the heap order
    pub fn position(&self, element: &T) -> Option<usize> {
        self.positions.get(element).copied()
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the parent of `element`.
    ///
    /// When `element` is the root or is not in the heap, `element` itself is
    /// returned. Use [`contains`](Self::contains) to tell the two apart.
    pub fn parent<'a>(&'a self, element: &'a T) -> &'a T {
        match self.positions.get(element) {
            Some(&pos) if pos > 0 => &self.elements[(pos - 1) / 2],
            _ => element,
        }
    }

    /// Returns the left child of `element`, or `element` itself if there is none
    pub fn left<'a>(&'a self, element: &'a T) -> &'a T {
        match self.positions.get(element) {
            Some(&pos) if 2 * pos + 1 < self.elements.len() => &self.elements[2 * pos + 1],
            _ => element,
        }
    }

    /// Returns the right child of `element`, or `element` itself if there is none
    pub fn right<'a>(&'a self, element: &'a T) -> &'a T {
        match self.positions.get(element) {
            Some(&pos) if 2 * pos + 2 < self.elements.len() => &self.elements[2 * pos + 2],
            _ => element,
        }
    }

    /// Inserts `element`, failing if an equal element is already present
    pub fn add(&mut self, element: T) -> Result<()> {
        if self.positions.contains_key(&element) {
            return Err(Error::DuplicateElement);
        }

        let pos = self.elements.len();
        self.positions.insert(element.clone(), pos);
        self.elements.push(element);
        self.sift_up(pos);

        Ok(())
    }

    /// Removes and returns the minimum element
    pub fn remove(&mut self) -> Result<T> {
        if self.elements.is_empty() {
            return Err(Error::EmptyHeap);
        }

        let last = self.elements.len() - 1;
        self.swap(0, last);

        let removed = match self.elements.pop() {
            Some(removed) => removed,
            None => return Err(Error::EmptyHeap),
        };
        self.positions.remove(&removed);

        if self.elements.len() > 1 {
            self.heapify(0);
        }

        Ok(removed)
    }

    /// Replaces `element` with `new_element` and restores the heap order.
    ///
    /// Despite the name this is a general "replace and re-fix": the new
    /// element may compare less than, equal to, or greater than the old one.
    pub fn decrease(&mut self, element: &T, new_element: T) -> Result<()> {
        let pos = match self.positions.get(element) {
            Some(&pos) => pos,
            None => return Err(Error::NotFound),
        };

        if new_element != *element && self.positions.contains_key(&new_element) {
            return Err(Error::DuplicateElement);
        }

        self.positions.remove(element);
        self.positions.insert(new_element.clone(), pos);
        self.elements[pos] = new_element;

        let pos = self.sift_up(pos);
        self.heapify(pos);

        Ok(())
    }

    /// Returns a snapshot of the elements in heap order (not sorted)
    pub fn to_array(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Borrows the elements in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.elements.clear();
        self.positions.clear();
    }

    /// Returns true if every element compares less than or equal to its children
    pub fn is_heap(&self) -> bool {
        (1..self.elements.len()).all(|i| {
            (self.comparator)(&self.elements[(i - 1) / 2], &self.elements[i]) != Ordering::Greater
        })
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.comparator)(&self.elements[a], &self.elements[b]) == Ordering::Less
    }

    /// Swaps two slots, keeping the position table in step with the vector
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.elements.swap(a, b);
        if let Some(p) = self.positions.get_mut(&self.elements[a]) {
            *p = a;
        }
        if let Some(p) = self.positions.get_mut(&self.elements[b]) {
            *p = b;
        }
    }

    /// Moves the element at `pos` toward the root; returns where it stopped
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Pushes the element at `pos` down until neither child is smaller
    fn heapify(&mut self, pos: usize) {
        let left = 2 * pos + 1;
        let right = left + 1;
        let len = self.elements.len();

        if left >= len {
            return;
        }

        // ties between the children go to the right one
        let smallest = if right < len && !self.less(left, right) {
            right
        } else {
            left
        };

        if self.less(smallest, pos) {
            self.swap(smallest, pos);
            self.heapify(smallest);
        }
    }
}

impl<T, C> Debug for IndexedMinHeap<T, C>
where
    T: Eq + Hash + Clone + Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("elements", &self.elements)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    fn int_heap() -> IndexedMinHeap<i32, fn(&i32, &i32) -> Ordering> {
        IndexedMinHeap::new(ascending as fn(&i32, &i32) -> Ordering)
    }

    fn ten_element_heap() -> IndexedMinHeap<i32, fn(&i32, &i32) -> Ordering> {
        let mut heap = int_heap();
        for x in [5, 3, 7, 2, 1, 8, 6, 9, 10, 4] {
            heap.add(x).unwrap();
        }
        heap
    }

    #[test]
    fn test_positions_track_every_swap() {
        let heap = ten_element_heap();
        for (i, x) in heap.as_slice().iter().enumerate() {
            assert_eq!(heap.position(x), Some(i));
        }
        assert_eq!(heap.positions.len(), heap.len());
    }

    #[test]
    fn test_sentinel_relatives() {
        let heap = ten_element_heap();
        // 1 is the root
        assert_eq!(*heap.parent(&1), 1);
        // 42 is not in the heap
        assert_eq!(*heap.parent(&42), 42);
        assert_eq!(*heap.left(&42), 42);
        assert!(!heap.contains(&42));
    }

    #[test]
    fn test_missing_comparator() {
        let heap = IndexedMinHeap::<i32, fn(&i32, &i32) -> Ordering>::from_comparator(None);
        assert!(matches!(heap, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_decrease_rejects_existing_identity() {
        let mut heap = ten_element_heap();
        let before = heap.to_array();
        assert!(matches!(heap.decrease(&9, 3), Err(Error::DuplicateElement)));
        assert_eq!(heap.to_array(), before);
    }

    #[test]
    fn test_decrease_to_same_value() {
        let mut heap = ten_element_heap();
        heap.decrease(&6, 6).unwrap();
        assert!(heap.is_heap());
        assert_eq!(heap.len(), 10);
    }
}
