//! Binary Heap implementation
//!
//! An array-backed binary heap ordered by a pluggable [`Compare`] capability.
//! Elements are stored in a `Vec` interpreted as a complete binary tree: the
//! parent of index `i` is `(i - 1) / 2`, its children are `2i + 1` and `2i + 2`.
//!
//! Besides the usual operations it offers [`push_pop`](BinaryHeap::push_pop)
//! and [`replace`](BinaryHeap::replace), which combine an insertion and an
//! extraction into a single sift.
//!
//! This heap does not support `decrease_key`. For that, use
//! [`FibonacciHeap`](crate::fibonacci::FibonacciHeap).
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `peek`     | O(1)       |
//! | `push_pop` | O(log n)   |
//! | `replace`  | O(log n)   |
//!
//! # Example
//!
//! ```rust
//! use priority_heaps::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(4);
//! heap.push(2);
//! heap.push(10);
//! heap.push(-3);
//! heap.push(1);
//!
//! assert_eq!(heap.peek(), Ok(&-3));
//! assert_eq!(heap.into_sorted_vec(), vec![-3, 1, 2, 4, 10]);
//! ```

use std::fmt;

use crate::compare::{Compare, Less};
use crate::traits::{Heap, HeapError};

/// An array-backed binary heap
///
/// With the default [`Less`] comparator this is a min-heap. Pass
/// [`Greater`](crate::compare::Greater) or any `Fn(&T, &T) -> bool` to
/// [`with_comparator`](BinaryHeap::with_comparator) for other orderings.
pub struct BinaryHeap<T, C = Less> {
    data: Vec<T>,
    compare: C,
}

impl<T> BinaryHeap<T, Less> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            compare: Less,
        }
    }

    /// Creates an empty min-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare: Less,
        }
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `compare`
    pub fn with_comparator(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap ordered by `compare` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, compare: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an element
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the first-ranked element without removing it
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap holds no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the first-ranked element
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap holds no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let last_idx = self.data.len().checked_sub(1).ok_or(HeapError::Empty)?;
        self.data.swap(0, last_idx);
        let result = self.data.pop().ok_or(HeapError::Empty)?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(result)
    }

    /// Pushes `value` and then pops, in a single sift
    ///
    /// If the heap is empty, or `value` ranks strictly before the current
    /// root, `value` is returned immediately and never inserted. Otherwise
    /// `value` takes the root's place and the old root is returned. An equal
    /// value counts as "not before", so it is swapped in.
    ///
    /// The heap's length is the same before and after the call.
    ///
    /// ```rust
    /// use priority_heaps::binary::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<i32> = [4, 2, -3].into_iter().collect();
    /// assert_eq!(heap.push_pop(-4), -4);
    /// assert_eq!(heap.push_pop(-2), -3);
    /// assert_eq!(heap.peek(), Ok(&-2));
    /// ```
    pub fn push_pop(&mut self, mut value: T) -> T {
        if let Some(root) = self.data.first_mut() {
            if !self.compare.less(&value, root) {
                std::mem::swap(root, &mut value);
                self.sift_down(0);
            }
        }
        value
    }

    /// Pops the root and pushes `value`, in a single sift
    ///
    /// Unlike [`push_pop`](Self::push_pop), `value` is always inserted,
    /// even when it ranks before the current root.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap holds no elements. `value` is dropped
    /// and the heap is left unchanged.
    pub fn replace(&mut self, mut value: T) -> Result<T, HeapError> {
        let root = self.data.first_mut().ok_or(HeapError::Empty)?;
        std::mem::swap(root, &mut value);
        self.sift_down(0);
        Ok(value)
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning the underlying storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.compare.less(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// The left child is preferred; the right child is chosen only when it
    /// ranks strictly before the left one.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let mut child = left;
            if right < len && self.compare.less(&self.data[right], &self.data[left]) {
                child = right;
            }

            if self.compare.less(&self.data[child], &self.data[index]) {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            compare: C::default(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, C: Clone> Clone for BinaryHeap<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for BinaryHeap<T, C> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, value: T) {
        BinaryHeap::push(self, value)
    }

    fn peek(&self) -> Result<&T, HeapError> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        BinaryHeap::pop(self)
    }
}
