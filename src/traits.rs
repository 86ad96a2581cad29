//! Common traits for heap data structures
//!
//! This module provides the narrow capability set a priority queue exposes:
//!
//! - [`PriorityQueue`]: insert, peek at the minimum, extract the minimum,
//!   size queries and a read-only traversal in storage order
//! - [`HeapError`]: the failures those operations can report
//!
//! Unlike `std::collections::BinaryHeap`, which is a max-heap, every
//! implementation here is a min-heap.

use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for heap operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `pop` was called on a heap with no live elements
    #[error("cannot {op} an empty heap")]
    Empty { op: &'static str },

    /// The backing storage could not be reserved
    #[error("failed to allocate heap storage for {requested} elements")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Base trait for min-priority queues
///
/// # Example
///
/// ```rust
/// use implicit_heap::{BinaryHeap, HeapError, PriorityQueue};
///
/// let mut heap = BinaryHeap::new();
/// heap.push(3).unwrap();
/// heap.push(1).unwrap();
/// heap.push(2).unwrap();
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.len(), 2);
///
/// heap.pop().unwrap();
/// heap.pop().unwrap();
/// assert!(matches!(heap.pop(), Err(HeapError::Empty { .. })));
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Iterator over the live elements in storage order
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts an element
    ///
    /// Duplicates are accepted. The only failure is running out of memory
    /// while growing the backing storage, in which case the queue is left
    /// exactly as it was before the call.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    fn push(&mut self, item: T) -> Result<(), HeapError>;

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue has no elements.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the queue has no elements, or
    /// [`HeapError::Allocation`] if the backing storage needed to shrink and
    /// the smaller buffer could not be reserved. The queue is not modified in
    /// either case.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Returns a one-shot, read-only traversal of the live elements
    ///
    /// The order is storage order, not sorted order.
    fn iter(&self) -> Self::Iter<'_>;
}
