//! In-place heapsort built on the min-heap primitives
//!
//! The slice is heapified, then the minimum is repeatedly swapped to the end
//! of the shrinking live region. That leaves the slice in descending order,
//! and a final reversal makes it ascending.
//!
//! The sort is O(n log n), uses no extra memory and is not stable.
//!
//! # Example
//!
//! ```rust
//! use implicit_heap::sort::{heapsort, heapsort_by, heapsort_by_key};
//!
//! let mut v = vec![3, 1, 2];
//! heapsort(&mut v);
//! assert_eq!(v, vec![1, 2, 3]);
//!
//! let mut v = vec![3, 1, 2];
//! heapsort_by(&mut v, |a, b| b.cmp(a));
//! assert_eq!(v, vec![3, 2, 1]);
//!
//! let mut words = vec!["ccc", "a", "bb"];
//! heapsort_by_key(&mut words, |w| w.len());
//! assert_eq!(words, vec!["a", "bb", "ccc"]);
//! ```

use std::cmp::Ordering;

use crate::sift::{heapify, sift_down};

/// Sorts `v` in ascending order
pub fn heapsort<T: Ord>(v: &mut [T]) {
    heapsort_by(v, T::cmp);
}

/// Sorts `v` in ascending order according to `compare`
///
/// `compare` must define a total order.
pub fn heapsort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut is_less = |a: &T, b: &T| compare(a, b) == Ordering::Less;

    heapify(v, &mut is_less);
    let mut n = v.len();
    while n > 1 {
        n -= 1;
        v.swap(0, n);
        sift_down(&mut v[..n], 0, &mut is_less);
    }
    v.reverse();
}

/// Sorts `v` in ascending order of the key extracted by `f`
///
/// The key is recomputed on every comparison.
pub fn heapsort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heapsort_by(v, |a, b| f(a).cmp(&f(b)));
}
