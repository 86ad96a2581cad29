//! Binary min-heap stored implicitly in a resizable array
//!
//! The live elements occupy indices `0..len` of the backing buffer and form a
//! complete binary tree in which no element is less than its parent, so the
//! minimum is always at index 0.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity         |
//! |-------------|--------------------|
//! | `push`      | O(log n) amortized |
//! | `pop`       | O(log n) amortized |
//! | `peek`      | O(1)               |
//! | `from_vec`  | O(n)               |
//! | `sort`      | O(n log n)         |
//!
//! # Example
//!
//! ```rust
//! use implicit_heap::{BinaryHeap, PriorityQueue};
//!
//! let mut heap = BinaryHeap::new();
//! for x in [5, 3, 8, 1, 9, 2] {
//!     heap.push(x).unwrap();
//! }
//!
//! let mut drained = Vec::new();
//! while let Ok(x) = heap.pop() {
//!     drained.push(x);
//! }
//! assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::sift::{heapify, sift_down, sift_up};
use crate::sort::heapsort;
use crate::storage::HeapStorage;
use crate::traits::{HeapError, PriorityQueue};

/// A binary min-heap backed by a contiguous buffer
///
/// It is a logic error for an element's ordering relative to the others to
/// change while it is in the heap.
#[derive(Clone)]
pub struct BinaryHeap<T> {
    storage: HeapStorage<T>,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap with a capacity of one
    pub fn new() -> Self {
        Self {
            storage: HeapStorage::new(),
        }
    }

    /// Builds a heap from `data` in linear time
    ///
    /// The vector becomes the backing buffer: its elements are reordered in
    /// place and the heap's capacity starts out equal to its length.
    ///
    /// ```rust
    /// use implicit_heap::{BinaryHeap, PriorityQueue};
    ///
    /// let heap = BinaryHeap::from_vec(vec![4, 1, 3, 2]);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// assert_eq!(heap.capacity(), 4);
    /// ```
    pub fn from_vec(mut data: Vec<T>) -> Self {
        heapify(&mut data, &mut |a: &T, b: &T| a < b);
        Self {
            storage: HeapStorage::from_vec(data),
        }
    }

    /// Sorts `v` into ascending order in place using heapsort
    ///
    /// See [`crate::sort::heapsort`].
    pub fn sort(v: &mut [T]) {
        heapsort(v);
    }
}

impl<T> BinaryHeap<T> {
    /// Returns the number of slots in the backing buffer
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the live elements in heap order
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Consumes the heap, returning the live elements in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }

    /// Removes every element, keeping the current buffer
    pub fn clear(&mut self) {
        self.storage.clear();
    }
}

impl<T: Ord> PriorityQueue<T> for BinaryHeap<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize {
        self.storage.len()
    }

    fn push(&mut self, item: T) -> Result<(), HeapError> {
        self.storage.push(item)?;
        let last = self.storage.len() - 1;
        sift_up(self.storage.as_mut_slice(), last, &mut |a: &T, b: &T| a < b);
        Ok(())
    }

    fn peek(&self) -> Result<&T, HeapError> {
        self.storage
            .as_slice()
            .first()
            .ok_or(HeapError::Empty { op: "peek" })
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        let min = self
            .storage
            .swap_remove_first()?
            .ok_or(HeapError::Empty { op: "pop" })?;
        sift_down(self.storage.as_mut_slice(), 0, &mut |a: &T, b: &T| a < b);
        Ok(min)
    }

    fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.storage.as_slice().iter(),
        }
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("len", &self.storage.len())
            .field("capacity", &self.storage.capacity())
            .field("data", &self.storage.as_slice())
            .finish()
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Read-only traversal of a heap's live elements in storage order
///
/// Created by [`PriorityQueue::iter`]. The borrow it holds prevents the heap
/// from being mutated until the traversal is dropped.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
