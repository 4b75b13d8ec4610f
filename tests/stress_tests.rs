//! Stress tests that push the heaps through large operation counts
//!
//! Inputs come from a seeded linear congruential generator, so failures are
//! reproducible. Run with `RUST_LOG=trace` to see consolidation passes.

use priority_heaps::binary::BinaryHeap;
use priority_heaps::fibonacci::{FibonacciHeap, NodeHandle};
use priority_heaps::{Heap, HeapError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

/// Test massive numbers of pushes and pops
fn test_massive_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in (0..10_000).rev() {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating push and pop
fn test_alternating_ops<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..2_000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        assert_eq!(heap.pop(), Ok(i));
    }

    assert_eq!(heap.len(), 2_000);
    let mut last = i32::MIN;
    while let Ok(v) = heap.pop() {
        assert!(v >= last);
        last = v;
    }
}

/// Random workload compared against a sorted model
fn test_random_workload<H: Heap<i32>>(seed: u64) {
    let mut rng = Lcg(seed);
    let mut heap = H::new();
    let mut model: Vec<i32> = Vec::new();

    for _ in 0..20_000 {
        if rng.below(5) < 3 {
            let v = rng.below(1_000) as i32 - 500;
            heap.push(v);
            let at = model.partition_point(|&x| x > v);
            model.insert(at, v);
        } else {
            match model.pop() {
                Some(expected) => assert_eq!(heap.pop(), Ok(expected)),
                None => assert_eq!(heap.pop(), Err(HeapError::Empty)),
            }
        }
        assert_eq!(heap.len(), model.len());
    }

    while let Some(expected) = model.pop() {
        assert_eq!(heap.pop(), Ok(expected));
    }
    assert!(heap.is_empty());
}

#[test]
fn binary_massive_operations() {
    test_massive_operations::<BinaryHeap<i32>>();
}

#[test]
fn fibonacci_massive_operations() {
    init_logging();
    test_massive_operations::<FibonacciHeap<i32>>();
}

#[test]
fn binary_alternating_ops() {
    test_alternating_ops::<BinaryHeap<i32>>();
}

#[test]
fn fibonacci_alternating_ops() {
    test_alternating_ops::<FibonacciHeap<i32>>();
}

#[test]
fn binary_random_workload() {
    for seed in [1, 7, 42] {
        test_random_workload::<BinaryHeap<i32>>(seed);
    }
}

#[test]
fn fibonacci_random_workload() {
    init_logging();
    for seed in [1, 7, 42] {
        test_random_workload::<FibonacciHeap<i32>>(seed);
    }
}

#[test]
fn binary_push_pop_stream() {
    let mut rng = Lcg(99);
    let mut heap = BinaryHeap::with_capacity(256);
    for _ in 0..256 {
        heap.push(rng.below(10_000));
    }

    // Keeping the 256 largest values seen: push_pop drops the smallest.
    let mut seen: Vec<u32> = heap.clone().into_vec();
    for _ in 0..10_000 {
        let v = rng.below(10_000);
        seen.push(v);
        heap.push_pop(v);
        assert_eq!(heap.len(), 256);
    }

    seen.sort_unstable();
    let top = seen.split_off(seen.len() - 256);
    assert_eq!(heap.into_sorted_vec(), top);
}

/// Many decrease_key calls on a heap with deep trees
#[test]
fn fibonacci_many_decrease_keys() {
    init_logging();
    let mut heap = FibonacciHeap::new();
    let handles: Vec<NodeHandle> = (0..5_000).map(|i| heap.push(100_000 + i)).collect();

    // Build trees first so decreases have parents to be cut from.
    assert_eq!(heap.pop(), Ok(100_000));

    for (i, handle) in handles.iter().enumerate().skip(1) {
        heap.decrease_key(handle, i as i32).unwrap();
    }

    for i in 1..5_000 {
        assert_eq!(heap.pop(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Random mix of push, pop and decrease_key, mirroring a Dijkstra frontier
#[test]
fn fibonacci_random_decrease_workload() {
    init_logging();
    let mut rng = Lcg(2024);
    let mut heap = FibonacciHeap::new();
    let mut live: Vec<(NodeHandle, i64)> = Vec::new();

    for _ in 0..30_000 {
        match rng.below(10) {
            0..=3 => {
                let v = i64::from(rng.below(1_000_000));
                live.push((heap.push(v), v));
            }
            4..=6 if !live.is_empty() => {
                let idx = rng.below(live.len() as u32) as usize;
                let (handle, current) = live[idx];
                let lowered = current - i64::from(rng.below(1_000));
                heap.decrease_key(&handle, lowered).unwrap();
                live[idx].1 = lowered;
            }
            _ => {
                let expected = live.iter().map(|&(_, v)| v).min();
                match expected {
                    Some(min) => {
                        assert_eq!(heap.pop(), Ok(min));
                        // Any entry holding the minimum is now dead; drop the
                        // one the heap actually removed.
                        let idx = live
                            .iter()
                            .position(|(h, _)| !heap.contains(h))
                            .unwrap();
                        live.swap_remove(idx);
                    }
                    None => assert_eq!(heap.pop(), Err(HeapError::Empty)),
                }
            }
        }
        assert_eq!(heap.len(), live.len());
    }
}
