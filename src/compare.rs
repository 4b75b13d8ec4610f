//! Comparators for heap ordering
//!
//! Every heap in this crate is parameterized over a [`Compare`] capability
//! that answers one question: does `a` rank strictly before `b`? The element
//! that ranks first is the one `peek` and `pop` return.
//!
//! - [`Less`]: natural `<` ordering, giving a min-heap (the default)
//! - [`Greater`]: natural `>` ordering, giving a max-heap
//! - any `Fn(&T, &T) -> bool` closure or function, used as-is
//!
//! # Example
//!
//! ```rust
//! use priority_heaps::binary::BinaryHeap;
//! use priority_heaps::compare::Greater;
//!
//! let mut max_heap = BinaryHeap::with_comparator(Greater);
//! max_heap.push(1);
//! max_heap.push(7);
//! max_heap.push(3);
//! assert_eq!(max_heap.peek(), Ok(&7));
//!
//! // Order by distance from zero
//! let mut by_abs = BinaryHeap::with_comparator(|a: &i32, b: &i32| a.abs() < b.abs());
//! by_abs.push(-9);
//! by_abs.push(2);
//! by_abs.push(-4);
//! assert_eq!(by_abs.pop(), Ok(2));
//! assert_eq!(by_abs.pop(), Ok(-4));
//! ```

/// A strict weak ordering used to rank heap elements.
///
/// `less(a, b)` must be irreflexive and transitive, and incomparability must
/// be transitive. Ties are allowed; the heaps never rely on `less` being
/// total.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` must be extracted before `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Natural ascending order (`a < b`). Turns a heap into a min-heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: PartialOrd + ?Sized> Compare<T> for Less {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Natural descending order (`a > b`). Turns a heap into a max-heap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: PartialOrd + ?Sized> Compare<T> for Greater {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
