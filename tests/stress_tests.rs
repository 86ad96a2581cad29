//! Extreme stress tests that really push the heap to its limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use implicit_heap::sift::is_heap;
use implicit_heap::sort::heapsort;
use implicit_heap::{BinaryHeap, PriorityQueue};

/// Linear congruential generator for reproducible pseudo-random input
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }
}

fn drain<H: PriorityQueue<i32>>(heap: &mut H) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(x) = heap.pop() {
        out.push(x);
    }
    out
}

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: PriorityQueue<i32> + Default>() {
    let mut heap = H::default();

    for i in 0..10_000 {
        heap.push(i).unwrap();
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Test descending insertion, the worst case for sift-up
fn test_descending_insertion<H: PriorityQueue<i32> + Default>() {
    let mut heap = H::default();

    for i in (0..5_000).rev() {
        heap.push(i).unwrap();
        assert_eq!(heap.peek(), Ok(&i));
    }

    assert_eq!(drain(&mut heap), (0..5_000).collect::<Vec<_>>());
}

/// Test alternating insert and pop
fn test_alternating_ops<H: PriorityQueue<i32> + Default>() {
    let mut heap = H::default();

    for i in 0..2_000 {
        heap.push(i * 2).unwrap();
        heap.push(i * 2 + 1).unwrap();
        assert_eq!(heap.pop(), Ok(i));
    }

    assert_eq!(heap.len(), 2_000);
    assert_eq!(drain(&mut heap), (2_000..4_000).collect::<Vec<_>>());
}

/// Test random operations against a sorted reference
fn test_random_workload<H: PriorityQueue<i32> + Default>() {
    let mut heap = H::default();
    let mut rng = Lcg(0x5eed);
    let mut reference: Vec<i32> = Vec::new();

    for _ in 0..20_000 {
        if rng.next() % 3 == 0 {
            reference.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(heap.pop().ok(), reference.pop());
        } else {
            let x = (rng.next() % 1_000) as i32;
            heap.push(x).unwrap();
            reference.push(x);
        }
        assert_eq!(heap.len(), reference.len());
    }

    reference.sort_unstable();
    assert_eq!(drain(&mut heap), reference);
}

#[test]
fn test_binary_massive() {
    test_massive_operations::<BinaryHeap<i32>>();
}

#[test]
fn test_binary_descending() {
    test_descending_insertion::<BinaryHeap<i32>>();
}

#[test]
fn test_binary_alternating() {
    test_alternating_ops::<BinaryHeap<i32>>();
}

#[test]
fn test_binary_random_workload() {
    test_random_workload::<BinaryHeap<i32>>();
}

#[test]
fn test_binary_fill_drain_cycles_bound_capacity() {
    let mut heap = BinaryHeap::new();

    for round in 0..5 {
        let size = 1_000 * (round + 1);
        for i in 0..size {
            heap.push(i as i32).unwrap();
        }
        let peak = heap.capacity();
        assert!(peak >= size && peak <= 2 * size);

        while heap.len() > 1 {
            heap.pop().unwrap();
            assert!(heap.capacity() <= 3 * heap.len());
            assert!(is_heap(heap.as_slice()));
        }
        heap.pop().unwrap();
        assert!(heap.capacity() >= 1 && heap.capacity() <= 3);
    }
}

#[test]
fn test_binary_large_heapify() {
    let mut rng = Lcg(42);
    let values: Vec<i32> = (0..50_000).map(|_| rng.next() as i32).collect();
    let mut expected = values.clone();
    expected.sort_unstable();

    let mut heap = BinaryHeap::from_vec(values);
    assert!(is_heap(heap.as_slice()));
    assert_eq!(drain(&mut heap), expected);
}

#[test]
fn test_large_heapsort() {
    let mut rng = Lcg(7);
    let mut values: Vec<u32> = (0..100_000).map(|_| rng.next() % 10_000).collect();
    let mut expected = values.clone();
    expected.sort_unstable();

    heapsort(&mut values);
    assert_eq!(values, expected);
}
