//! Priority Queues for Rust
//!
//! This crate provides two interchangeable priority queue implementations
//! behind one logical contract, the [`Heap`] trait:
//!
//! - **Binary Heap**: array-backed; O(log n) push and pop; O(1) peek; also
//!   offers `push_pop` and `replace`
//! - **Fibonacci Heap**: arena-backed node forest; O(1) push and peek;
//!   O(log n) amortized pop; O(1) amortized `decrease_key` through stable,
//!   generation-checked handles
//!
//! Both heaps are ordered by a [`Compare`](compare::Compare) capability fixed
//! at construction time. The default, [`Less`](compare::Less), makes them
//! min-heaps; [`Greater`](compare::Greater) or any `Fn(&T, &T) -> bool`
//! predicate can be supplied instead.
//!
//! Failures are reported as [`HeapError`]: popping or peeking an empty heap
//! yields [`HeapError::Empty`], a `decrease_key` that would raise a value
//! yields [`HeapError::KeyIncreased`], and a handle whose element has been
//! popped yields [`HeapError::InvalidHandle`].
//!
//! The heaps are meant for single-threaded use; wrap them in a lock if they
//! must be shared.
//!
//! # Example
//!
//! ```rust
//! use priority_heaps::binary::BinaryHeap;
//! use priority_heaps::fibonacci::FibonacciHeap;
//! use priority_heaps::HeapError;
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(4);
//! heap.push(-3);
//! heap.push(10);
//! assert_eq!(heap.pop(), Ok(-3));
//!
//! let mut fib = FibonacciHeap::new();
//! let ten = fib.push(10);
//! fib.push(2);
//! fib.decrease_key(&ten, -10).unwrap();
//! assert_eq!(fib.pop(), Ok(-10));
//! assert_eq!(fib.decrease_key(&ten, -20), Err(HeapError::InvalidHandle));
//! ```

pub mod binary;
pub mod compare;
pub mod fibonacci;
pub mod traits;

// Re-export the main traits and error for convenience
pub use traits::{DecreaseKeyHeap, Heap, HeapError};
