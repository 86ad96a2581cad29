//! Implicit Binary Heaps for Rust
//!
//! This crate provides a min-priority queue backed by a binary heap stored
//! implicitly in a contiguous, dynamically resized array, together with the
//! algorithms that share its mechanics.
//!
//! # Features
//!
//! - **BinaryHeap**: O(log n) amortized insert and delete-min; O(1) find-min
//! - **Heapify**: O(n) bottom-up construction from an existing vector
//! - **Heapsort**: O(n log n) in-place, unstable sort of any slice
//! - **Bounded storage**: the buffer doubles when full and shrinks once less
//!   than a third of it is in use
//!
//! # Example
//!
//! ```rust
//! use implicit_heap::{BinaryHeap, PriorityQueue};
//!
//! let mut heap = BinaryHeap::from_vec(vec![5, 3, 8]);
//! heap.push(1).unwrap();
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//!
//! let mut v = vec![9, 2, 7];
//! BinaryHeap::sort(&mut v);
//! assert_eq!(v, vec![2, 7, 9]);
//! ```

pub mod binary_heap;
pub mod sift;
pub mod sort;
mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use binary_heap::{BinaryHeap, Iter};
pub use traits::{HeapError, PriorityQueue};
