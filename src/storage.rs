//! Backing storage with an explicit growth and shrink policy
//!
//! The heap keeps its own notion of capacity instead of deferring to `Vec`'s
//! growth strategy:
//!
//! - Growing doubles the capacity when an insertion would overflow it.
//! - After a removal, if fewer than a third of the slots are live, the buffer
//!   is reallocated to twice the live count.
//!
//! Together these bound wasted space to a constant factor of the live size
//! while keeping the reallocation cost O(1) amortized per operation. The
//! capacity never drops to zero, so an emptied heap can take its next element
//! without allocating.
//!
//! Every reallocation moves the live elements into a freshly reserved buffer
//! and then drops the old one. Reservation always happens before any element
//! is touched, so an allocation failure leaves the storage untouched.

use crate::traits::HeapError;

const GROWTH_FACTOR: usize = 2;
const SHRINK_THRESHOLD: usize = 3;
const SHRINK_TARGET: usize = 2;

#[derive(Debug)]
pub(crate) struct HeapStorage<T> {
    data: Vec<T>,
    /// Logical size of the buffer. `data.capacity()` is always at least this.
    capacity: usize,
}

impl<T> HeapStorage<T> {
    pub(crate) fn new() -> Self {
        Self {
            data: Vec::with_capacity(1),
            capacity: 1,
        }
    }

    /// Adopts `data` as the backing buffer with capacity equal to its length
    pub(crate) fn from_vec(data: Vec<T>) -> Self {
        if data.is_empty() {
            return Self::new();
        }
        let capacity = data.len();
        Self { data, capacity }
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    /// Appends `item` at index `len`, growing first if the buffer is full
    pub(crate) fn push(&mut self, item: T) -> Result<(), HeapError> {
        if self.data.len() + 1 > self.capacity {
            let new_capacity = self.capacity * GROWTH_FACTOR;
            let buffer = Self::reserve(new_capacity)?;
            self.adopt(buffer, new_capacity);
        }
        self.data.push(item);
        Ok(())
    }

    /// Removes the element at index 0 and moves the last element into its place
    ///
    /// If the removal leaves fewer than a third of the slots live, the buffer
    /// shrinks to twice the remaining count. The smaller buffer is reserved
    /// before anything is removed; if that fails the error is returned and
    /// the storage is unchanged.
    pub(crate) fn swap_remove_first(&mut self) -> Result<Option<T>, HeapError> {
        let Some(remaining) = self.data.len().checked_sub(1) else {
            return Ok(None);
        };

        let shrunk = if remaining > 0 && SHRINK_THRESHOLD * remaining < self.capacity {
            Some(Self::reserve(SHRINK_TARGET * remaining)?)
        } else {
            None
        };

        let first = self.data.swap_remove(0);
        if let Some(buffer) = shrunk {
            self.adopt(buffer, SHRINK_TARGET * remaining);
        }
        Ok(Some(first))
    }

    fn reserve(capacity: usize) -> Result<Vec<T>, HeapError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|source| HeapError::Allocation {
                requested: capacity,
                source,
            })?;
        Ok(buffer)
    }

    /// Moves the live elements into `buffer` and makes it the backing storage
    fn adopt(&mut self, mut buffer: Vec<T>, capacity: usize) {
        debug_assert!(capacity >= self.data.len());
        buffer.append(&mut self.data);
        self.data = buffer;
        self.capacity = capacity;
    }
}

impl<T: Clone> Clone for HeapStorage<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}
