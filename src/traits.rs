//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues:
//!
//! - [`Heap`]: Base trait shared by every heap (push, peek, pop, len, is_empty)
//! - [`DecreaseKeyHeap`]: Extended trait adding handle-based `decrease_key`
//!
//! Both heaps in this crate also expose these operations as inherent methods,
//! so the traits are only needed for code that is generic over the backing
//! implementation.

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HeapError {
    /// The heap holds no elements
    #[error("heap is empty")]
    Empty,
    /// `decrease_key` was given a value that ranks after the current one
    #[error("new key is greater than the current key")]
    KeyIncreased,
    /// The handle's node has been popped or the heap was cleared
    #[error("handle does not refer to a live node")]
    InvalidHandle,
}

/// A handle to an element in the heap, used for `decrease_key` operations
///
/// This is an opaque, non-owning identifier for a specific element. It stays
/// valid until that element is popped.
pub trait Handle: Copy + Eq + Hash + fmt::Debug {}

/// Base trait for heap/priority queue data structures
///
/// The element that the heap's comparator ranks first is returned by
/// `peek` and `pop`. With the default comparator this is the minimum.
///
/// # Example
///
/// ```rust
/// use priority_heaps::Heap;
/// use priority_heaps::binary::BinaryHeap;
///
/// fn drain<H: Heap<i32>>(mut heap: H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(value) = heap.pop() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut heap: BinaryHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
/// assert_eq!(drain(heap), vec![1, 2, 3]);
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap using the default comparator
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for the binary heap, O(1) for the Fibonacci heap.
    fn push(&mut self, value: T);

    /// Returns the first-ranked element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the first-ranked element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements.
    ///
    /// # Time Complexity
    /// O(log n), amortized for the Fibonacci heap.
    fn pop(&mut self) -> Result<T, HeapError>;
}

/// Extended heap trait with `decrease_key` support
///
/// # Example
///
/// ```rust
/// use priority_heaps::{DecreaseKeyHeap, Heap};
/// use priority_heaps::fibonacci::FibonacciHeap;
///
/// let mut heap: FibonacciHeap<i32> = Heap::new();
/// let handle = heap.push_with_handle(10);
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(Heap::peek(&heap), Ok(&5));
/// ```
pub trait DecreaseKeyHeap<T>: Heap<T> {
    /// The handle type for this heap, used to reference elements for decrease_key
    type Handle: Handle;

    /// Inserts an element, returning a handle that identifies it
    fn push_with_handle(&mut self, value: T) -> Self::Handle;

    /// Lowers the value of the element identified by `handle`
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the element was already popped.
    /// - [`HeapError::KeyIncreased`] if `new_value` ranks after the current
    ///   value. The element is left untouched.
    ///
    /// # Time Complexity
    /// O(1) amortized for the Fibonacci heap.
    fn decrease_key(&mut self, handle: &Self::Handle, new_value: T) -> Result<(), HeapError>;
}
