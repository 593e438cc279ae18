//! Binary min-heap with explicit capacity control
//!
//! [`MinHeap`] stores its elements in a flat buffer laid out as a complete
//! binary tree: the element at index `i` has children at `2i + 1` and `2i + 2`,
//! and its parent at `(i - 1) / 2`. Every element compares greater than or
//! equal to its parent, so the minimum always sits at index 0.
//!
//! Ordering comes from a [`Compare`] value. Heaps built with [`MinHeap::new`]
//! and friends use the element's natural [`Ord`] order; any closure
//! `Fn(&T, &T) -> Ordering` works as a custom comparator.
//!
//! The buffer's logical capacity is tracked separately from its length and
//! grows on a fixed schedule: 0 → [`DEFAULT_CAPACITY`] → doubled on every
//! subsequent fill. It never shrinks unless [`MinHeap::set_capacity`] asks.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity         |
//! |---------------------|--------------------|
//! | `push`              | O(log n) amortized |
//! | `peek` / `peek_min` | O(1)               |
//! | `set_capacity`      | O(n)               |
//! | `from_iter` (exact) | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.push(11);
//! heap.push(5);
//!
//! assert_eq!(heap.peek_min(), Ok(&5));
//! assert_eq!(heap.capacity(), 4);
//! ```

use std::fmt;
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural};

use crate::error::HeapError;

/// Capacity the buffer takes on the first growth out of an empty allocation
pub const DEFAULT_CAPACITY: usize = 4;

/// An array-backed binary min-heap
///
/// `C` decides the order. With the default [`Natural`] comparator the heap is
/// ordered by `T`'s own [`Ord`] impl; element types without one must supply a
/// comparator through [`MinHeap::with_comparator`] or one of its siblings.
///
/// It is a logic error for an element to change its ordering relative to
/// other elements while it is in the heap.
pub struct MinHeap<T, C = Natural<T>> {
    /// Live elements in tree order; `data.len()` is the heap's size
    data: Vec<T>,
    /// Logical buffer length reported by [`MinHeap::capacity`]
    capacity: usize,
    cmp: C,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap ordered by `T`'s natural order
    ///
    /// No allocation happens until the first push.
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty heap with room for exactly `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// # Example
    ///
    /// ```rust
    /// use min_heap::MinHeap;
    ///
    /// let mut heap = MinHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// heap.push(1);
    /// heap.push(7);
    /// assert_eq!(heap.peek(), Some(&7));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    /// Creates an empty heap ordered by `cmp` with room for exactly `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        let data = if capacity == 0 {
            Vec::new()
        } else {
            Vec::with_capacity(capacity)
        };
        Self {
            data,
            capacity,
            cmp,
        }
    }

    /// Builds a heap from `iter`, ordered by `cmp`
    ///
    /// When the iterator reports an exact length the buffer is sized to that
    /// length and heapified in one bottom-up pass, so the resulting capacity
    /// equals the element count. Otherwise elements are pushed one at a time
    /// and the capacity follows the usual growth schedule.
    ///
    /// # Example
    ///
    /// ```rust
    /// use min_heap::MinHeap;
    ///
    /// let heap = MinHeap::from_iter_with_comparator(vec![4, 9, 2], |a: &i32, b: &i32| a.cmp(b));
    /// assert_eq!(heap.peek(), Some(&2));
    /// assert_eq!(heap.capacity(), 3);
    /// ```
    pub fn from_iter_with_comparator<I: IntoIterator<Item = T>>(iter: I, cmp: C) -> Self {
        let iter = iter.into_iter();
        match iter.size_hint() {
            (lower, Some(upper)) if lower == upper => {
                let mut data = Vec::with_capacity(lower);
                data.extend(iter);
                Self::from_vec_with_comparator(data, cmp)
            }
            _ => {
                let mut heap = Self::with_comparator(cmp);
                heap.extend(iter);
                heap
            }
        }
    }

    /// Takes ownership of `data` and rearranges it into heap order
    fn from_vec_with_comparator(mut data: Vec<T>, cmp: C) -> Self {
        let capacity = data.len();
        if capacity == 0 {
            data = Vec::new();
        } else {
            data.shrink_to_fit();
        }

        let mut heap = Self {
            data,
            capacity,
            cmp,
        };
        heap.heapify();
        log::trace!("built heap from {} counted elements", capacity);
        heap
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the comparator that orders this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts an element
    ///
    /// A full buffer grows first: to [`DEFAULT_CAPACITY`] when it is empty,
    /// otherwise to twice its current capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the minimum element, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Returns the logical length of the backing buffer
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reallocates the backing buffer to exactly `capacity` slots
    ///
    /// Live elements keep their positions. A capacity of zero on an empty heap
    /// releases the allocation.
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityBelowLen`] if `capacity` is smaller than
    /// [`len`](MinHeap::len). The heap is left untouched in that case.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), HeapError> {
        let len = self.data.len();
        if capacity < len {
            return Err(HeapError::CapacityBelowLen {
                requested: capacity,
                len,
            });
        }
        if capacity != self.capacity {
            log::trace!("capacity set: {} -> {}", self.capacity, capacity);
            self.resize_buffer(capacity);
        }
        Ok(())
    }

    /// Returns the live elements in buffer order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the live elements in buffer order
    ///
    /// Only the first element is guaranteed to be the minimum; the rest follow
    /// the tree layout, not sorted order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its elements in buffer order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            self.capacity * 2
        };
        log::trace!("growing heap buffer: {} -> {}", self.capacity, new_capacity);
        self.resize_buffer(new_capacity);
    }

    /// Callers guarantee `capacity >= self.data.len()`.
    fn resize_buffer(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.data.len());
        if capacity == 0 {
            self.data = Vec::new();
        } else if capacity > self.data.capacity() {
            self.data.reserve_exact(capacity - self.data.len());
        } else {
            self.data.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.compares_lt(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.cmp.compares_lt(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            if right < len && self.cmp.compares_lt(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    /// Floyd's bottom-up construction over the whole buffer
    fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: Clone> Clone for MinHeap<T, C> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend(self.data.iter().cloned());
        Self {
            data,
            capacity: self.capacity,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("items", &self.data)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_comparator(iter, natural())
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, natural())
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a MinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Compare<T>> IntoIterator for MinHeap<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn assert_heap_order<T, C: Compare<T>>(heap: &MinHeap<T, C>) {
        let items = heap.as_slice();
        for index in 1..items.len() {
            let parent = (index - 1) / 2;
            assert!(
                heap.comparator().compares_ge(&items[index], &items[parent]),
                "element at {index} is less than its parent at {parent}"
            );
        }
    }

    #[test]
    fn test_new_is_empty_without_capacity() {
        let heap: MinHeap<i32> = MinHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.capacity(), 0);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.peek_min(), Err(HeapError::Empty));
    }

    #[test]
    fn test_single_push_allocates_default_capacity() {
        let mut heap = MinHeap::new();
        heap.push(10);

        assert_eq!(heap.peek_min(), Ok(&10));
        assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_smaller_push_becomes_root() {
        let mut heap = MinHeap::new();
        heap.push(11);
        heap.push(5);

        assert_eq!(heap.peek_min(), Ok(&5));
        assert_eq!(heap.capacity(), 4);
    }

    #[test]
    fn test_capacity_doubles_when_full() {
        let mut heap = MinHeap::new();
        let mut seen = Vec::new();

        for i in 0..33 {
            heap.push(i);
            if seen.last() != Some(&heap.capacity()) {
                seen.push(heap.capacity());
            }
        }

        assert_eq!(seen, vec![4, 8, 16, 32, 64]);
    }

    #[test]
    fn test_standard_parent_layout() {
        // With parent = (i - 1) / 2, index 2 hangs off the root, so pushing
        // 3, 2, 1 leaves 1 at the root and 3 as its left child.
        let mut heap = MinHeap::new();
        heap.push(3);
        heap.push(2);
        heap.push(1);

        assert_eq!(heap.as_slice(), &[1, 3, 2]);
        assert_heap_order(&heap);
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = MinHeap::new();

        for i in (0..100).rev() {
            heap.push(i);
            assert_eq!(heap.peek(), Some(&i));
            assert_heap_order(&heap);
        }
    }

    #[test]
    fn test_duplicate_elements() {
        let mut heap = MinHeap::new();
        heap.push(1);
        heap.push(1);
        heap.push(1);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&1));
        assert_heap_order(&heap);
    }

    #[test]
    fn test_counted_source_is_heapified_with_exact_capacity() {
        let heap = MinHeap::from(vec![9, 4, 7, 1, 8, 2, 6]);

        assert_eq!(heap.capacity(), 7);
        assert_eq!(heap.len(), 7);
        assert_eq!(heap.peek(), Some(&1));
        assert_heap_order(&heap);
    }

    #[test]
    fn test_empty_counted_source() {
        let heap = MinHeap::<i32>::from(Vec::new());

        assert_eq!(heap.capacity(), 0);
        assert_eq!(heap.peek_min(), Err(HeapError::Empty));
    }

    #[test]
    fn test_uncounted_source_follows_growth_schedule() {
        let heap: MinHeap<i32> = (0..10).rev().filter(|i| i % 2 == 0).collect();

        assert_eq!(heap.len(), 5);
        assert_eq!(heap.capacity(), 8);
        assert_eq!(heap.peek(), Some(&0));
        assert_heap_order(&heap);
    }

    #[test]
    fn test_set_capacity_rejects_shrinking_below_len() {
        let mut heap = MinHeap::with_capacity(8);
        heap.extend([5, 3, 9]);

        assert_eq!(
            heap.set_capacity(2),
            Err(HeapError::CapacityBelowLen { requested: 2, len: 3 })
        );
        assert_eq!(heap.capacity(), 8);
        assert_eq!(heap.as_slice().len(), 3);
        assert_eq!(heap.peek(), Some(&3));
    }

    #[test]
    fn test_set_capacity_keeps_elements() {
        let mut heap = MinHeap::new();
        heap.extend([5, 3, 9]);

        heap.set_capacity(3).unwrap();
        assert_eq!(heap.capacity(), 3);
        assert_eq!(heap.peek(), Some(&3));

        heap.set_capacity(100).unwrap();
        assert_eq!(heap.capacity(), 100);
        assert_eq!(heap.len(), 3);
        assert_heap_order(&heap);
    }

    #[test]
    fn test_set_capacity_zero_on_empty_heap() {
        let mut heap: MinHeap<u8> = MinHeap::with_capacity(16);

        heap.set_capacity(0).unwrap();
        assert_eq!(heap.capacity(), 0);

        heap.push(1);
        assert_eq!(heap.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_custom_comparator_reverses_order() {
        let mut heap = MinHeap::with_capacity_and_comparator(2, |a: &i32, b: &i32| b.cmp(a));

        for i in [3, 8, 1, 5] {
            heap.push(i);
        }

        assert_eq!(heap.peek(), Some(&8));
        assert_eq!(heap.capacity(), 4);
        assert_heap_order(&heap);
    }

    #[test]
    fn test_comparator_for_unordered_type() {
        #[derive(Debug, PartialEq)]
        struct Job {
            id: u32,
        }

        let by_id = |a: &Job, b: &Job| -> Ordering { a.id.cmp(&b.id) };
        let heap =
            MinHeap::from_iter_with_comparator([Job { id: 4 }, Job { id: 2 }, Job { id: 9 }], by_id);

        assert_eq!(heap.peek(), Some(&Job { id: 2 }));
        assert_eq!(heap.capacity(), 3);
    }

    #[test]
    fn test_clone_preserves_capacity() {
        let mut heap = MinHeap::with_capacity(10);
        heap.push(2);
        heap.push(1);

        let cloned = heap.clone();
        assert_eq!(cloned.capacity(), 10);
        assert_eq!(cloned.as_slice(), heap.as_slice());
    }
}
