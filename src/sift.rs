//! Invariant-restoring primitives for implicit binary heaps
//!
//! A complete binary tree is embedded in a slice: the children of index `i`
//! live at `2i + 1` and `2i + 2`, and its parent at `(i - 1) / 2`. The slice is
//! a min-heap when no element is less than its parent.
//!
//! Every routine here takes a strict "less than" predicate rather than relying
//! on `Ord` directly, so the same code backs both [`BinaryHeap`] and the
//! comparator-based sorts in [`crate::sort`].
//!
//! [`BinaryHeap`]: crate::binary_heap::BinaryHeap

/// Index of the left child, or `None` if it cannot be represented
///
/// The right child is always `left + 1`.
#[inline]
pub(crate) fn left(i: usize) -> Option<usize> {
    i.checked_mul(2)?.checked_add(1)
}

#[inline]
pub(crate) fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Moves the element at `index` toward the root until its parent is not greater
///
/// Each step performs one comparison and at most one swap.
pub fn sift_up<T, F>(v: &mut [T], mut index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while index > 0 {
        let p = parent(index);
        if !is_less(&v[index], &v[p]) {
            break;
        }
        v.swap(index, p);
        index = p;
    }
}

/// Moves the element at `index` toward the leaves until no child is smaller
///
/// Both subtrees of `index` must already be heaps. When the right child is
/// smaller than the element, the left child is chosen only if it is strictly
/// smaller than the right; on a tie the descent goes right.
pub fn sift_down<T, F>(v: &mut [T], mut index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    loop {
        let Some(l) = left(index).filter(|&l| l < len) else {
            break;
        };
        let r = l + 1;
        let next = if r < len && is_less(&v[r], &v[index]) {
            if is_less(&v[l], &v[r]) {
                l
            } else {
                r
            }
        } else if is_less(&v[l], &v[index]) {
            l
        } else {
            break;
        };
        v.swap(index, next);
        index = next;
    }
}

/// Rearranges `v` into a min-heap in linear time
///
/// Runs [`sift_down`] from `len / 2` back to the root so that every call
/// sees valid heaps below it.
pub fn heapify<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in (0..=v.len() / 2).rev() {
        sift_down(v, i, is_less);
    }
}

/// Returns true if no element of `v` is less than its parent under `is_less`
pub fn is_heap_by<T, F>(v: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len()).all(|c| !is_less(&v[c], &v[parent(c)]))
}

/// Returns true if `v` satisfies the min-heap property
pub fn is_heap<T: Ord>(v: &[T]) -> bool {
    is_heap_by(v, |a, b| a < b)
}
