//! Index-based circular doubly-linked lists.
//!
//! This crate provides the ring operations needed by node-graph heaps whose
//! nodes live in an arena and refer to each other through keys instead of
//! pointers. The link fields themselves are owned by the caller's storage;
//! this crate only rewires them through the [`RingLinks`] trait.
//!
//! # Circular lists
//!
//! In a circular list:
//! - A single node points to itself (both `next` and `prev`)
//! - There is no head or tail - any node can be the entry point
//! - Splicing two rings together is O(1)
//! - Iteration wraps around (must track starting point)
//!
//! A node that belongs to no list is simply a ring of one. There is no
//! separate "unlinked" state, so every key handed to [`RingOps`] always
//! resolves to valid `next` and `prev` keys.
//!
//! # Example
//!
//! ```rust
//! use sibling_ring::{RingLinks, RingOps};
//!
//! struct Links(Vec<(usize, usize)>);
//!
//! impl RingLinks<usize> for Links {
//!     fn next(&self, key: usize) -> usize { self.0[key].1 }
//!     fn prev(&self, key: usize) -> usize { self.0[key].0 }
//!     fn set_next(&mut self, key: usize, next: usize) { self.0[key].1 = next; }
//!     fn set_prev(&mut self, key: usize, prev: usize) { self.0[key].0 = prev; }
//! }
//!
//! let mut links = Links(vec![(0, 0), (1, 1), (2, 2)]);
//! let ops = RingOps::new();
//!
//! ops.insert_after(&mut links, 0, 1);
//! ops.insert_after(&mut links, 1, 2);
//!
//! let keys: Vec<usize> = ops.iter(&links, 0).collect();
//! assert_eq!(keys, vec![0, 1, 2]);
//!
//! assert_eq!(ops.remove(&mut links, 1), Some(2));
//! assert_eq!(ops.count(&links, 0), 2);
//! ```

#![warn(missing_docs)]

// =============================================================================
// RingLinks
// =============================================================================

/// Storage that holds the `next`/`prev` link of every node, addressed by key.
///
/// Implementors are usually arenas: a `Vec`, a `SlotMap`, or a newtype around
/// one. Keys passed to these methods must refer to live nodes; implementations
/// are free to panic on a dangling key since the ring operations never produce
/// one on their own.
pub trait RingLinks<K: Copy + Eq> {
    /// Returns the key following `key` in its ring.
    fn next(&self, key: K) -> K;

    /// Returns the key preceding `key` in its ring.
    fn prev(&self, key: K) -> K;

    /// Overwrites the `next` link of `key`.
    fn set_next(&mut self, key: K, next: K);

    /// Overwrites the `prev` link of `key`.
    fn set_prev(&mut self, key: K, prev: K);
}

// =============================================================================
// RingOps
// =============================================================================

/// Operations for manipulating circular doubly-linked lists.
///
/// All operations except [`count`](RingOps::count) and iteration are O(1).
///
/// The caller must maintain one rule: a node passed as the "new" node of an
/// insertion must currently be alone in its own ring. Inserting a node that
/// still belongs to another ring would leave that ring pointing at it.
#[derive(Clone, Copy, Debug, Default)]
pub struct RingOps;

impl RingOps {
    /// Creates a new `RingOps`.
    #[inline]
    pub const fn new() -> Self {
        RingOps
    }

    /// Connects `left -> right`, i.e. `left.next = right` and `right.prev = left`.
    #[inline]
    pub fn link<K, L>(&self, links: &mut L, left: K, right: K)
    where
        K: Copy + Eq,
        L: RingLinks<K> + ?Sized,
    {
        links.set_next(left, right);
        links.set_prev(right, left);
    }

    /// Makes a node into a circular list of one element.
    ///
    /// After this, `key.next == key` and `key.prev == key`.
    #[inline]
    pub fn make_circular<K, L>(&self, links: &mut L, key: K)
    where
        K: Copy + Eq,
        L: RingLinks<K> + ?Sized,
    {
        self.link(links, key, key);
    }

    /// Checks whether `key` is the only node of its ring.
    #[inline]
    pub fn is_alone<K, L>(&self, links: &L, key: K) -> bool
    where
        K: Copy + Eq,
        L: RingLinks<K> + ?Sized,
    {
        links.next(key) == key
    }

    /// Inserts `new` after `at`.
    ///
    /// `new` must be alone in its ring.
    #[inline]
    pub fn insert_after<K, L>(&self, links: &mut L, at: K, new: K)
    where
        K: Copy + Eq,
        L: RingLinks<K> + ?Sized,
    {
        debug_assert!(self.is_alone(&*links, new), "new node is still linked");

        let next = links.next(at);
        self.link(links, at, new);
        self.link(links, new, next);
    }

    /// Inserts `new` before `at`.
    ///
    /// When `at` is the entry point of a ring, this appends `new` at the
    /// logical end of the ring. `new` must be alone in its ring.
    #[inline]
    pub fn insert_before<K, L>(&self, links: &mut L, at: K, new: K)
    where
        K: Copy + Eq,
        L: RingLinks<K> + ?Sized,
    {
        debug_assert!(self.is_alone(&*links, new), "new node is still linked");

        let prev = links.prev(at);
        self.link(links, prev, new);
        self.link(links, new, at);
    }

    /// Removes a node from its ring, leaving it as a ring of one.
    ///
    /// Returns the node that followed `key`, or `None` if `key` was the only
    /// element (the ring is now empty).
    #[inline]
    pub fn remove<K, L>(&self, links: &mut L, key: K) -> Option<K>
    where
        K: Copy + Eq,
        L: RingLinks<K> + ?Sized,
    {
        let next = links.next(key);
        if next == key {
            return None;
        }

        let prev = links.prev(key);
        self.link(links, prev, next);
        self.make_circular(links, key);
        Some(next)
    }

    /// Splices two rings together.
    ///
    /// Returns an entry point into the merged ring, or `None` if both were
    /// empty. If either is `None`, returns the other.
    ///
    /// After the splice, walking forward from `a` visits the rest of ring `a`
    /// and then every node of ring `b`.
    #[inline]
    pub fn splice<K, L>(&self, links: &mut L, a: Option<K>, b: Option<K>) -> Option<K>
    where
        K: Copy + Eq,
        L: RingLinks<K> + ?Sized,
    {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (Some(a), Some(b)) => {
                // Before:
                //   Ring A: a <-> .. <-> a_prev <-> a
                //   Ring B: b <-> .. <-> b_prev <-> b
                //
                // After:
                //   a <-> .. <-> a_prev <-> b <-> .. <-> b_prev <-> a
                let a_prev = links.prev(a);
                let b_prev = links.prev(b);

                self.link(links, a_prev, b);
                self.link(links, b_prev, a);

                Some(a)
            }
        }
    }

    /// Counts the number of elements in the ring containing `start`.
    ///
    /// This is O(n) - use sparingly.
    pub fn count<K, L>(&self, links: &L, start: K) -> usize
    where
        K: Copy + Eq,
        L: RingLinks<K> + ?Sized,
    {
        self.iter(links, start).count()
    }

    /// Iterates over every key in the ring, starting at `start`.
    ///
    /// The ring must not be modified while the iterator is alive, which the
    /// shared borrow of `links` enforces.
    pub fn iter<'a, K, L>(&self, links: &'a L, start: K) -> Iter<'a, K, L>
    where
        K: Copy + Eq,
        L: RingLinks<K> + ?Sized,
    {
        Iter {
            links,
            start,
            current: Some(start),
        }
    }
}

// =============================================================================
// Iter
// =============================================================================

/// Iterator over the keys of one ring. Created by [`RingOps::iter`].
pub struct Iter<'a, K, L: ?Sized> {
    links: &'a L,
    start: K,
    current: Option<K>,
}

impl<K, L> Iterator for Iter<'_, K, L>
where
    K: Copy + Eq,
    L: RingLinks<K> + ?Sized,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let current = self.current?;
        let next = self.links.next(current);
        self.current = if next == self.start { None } else { Some(next) };
        Some(current)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Nodes `0..n`, each initially a ring of one. Stored as `(prev, next)`.
    struct TestLinks(Vec<(usize, usize)>);

    impl TestLinks {
        fn singles(n: usize) -> Self {
            TestLinks((0..n).map(|i| (i, i)).collect())
        }
    }

    impl RingLinks<usize> for TestLinks {
        fn next(&self, key: usize) -> usize {
            self.0[key].1
        }

        fn prev(&self, key: usize) -> usize {
            self.0[key].0
        }

        fn set_next(&mut self, key: usize, next: usize) {
            self.0[key].1 = next;
        }

        fn set_prev(&mut self, key: usize, prev: usize) {
            self.0[key].0 = prev;
        }
    }

    fn collect(links: &TestLinks, start: usize) -> Vec<usize> {
        RingOps::new().iter(links, start).collect()
    }

    /// Every `next` must be mirrored by a `prev`.
    fn assert_consistent(links: &TestLinks, start: usize) {
        for key in RingOps::new().iter(links, start) {
            assert_eq!(links.prev(links.next(key)), key);
            assert_eq!(links.next(links.prev(key)), key);
        }
    }

    #[test]
    fn test_single_is_circular() {
        let links = TestLinks::singles(1);
        let ops = RingOps::new();

        assert!(ops.is_alone(&links, 0));
        assert_eq!(links.next(0), 0);
        assert_eq!(links.prev(0), 0);
        assert_eq!(ops.count(&links, 0), 1);
    }

    #[test]
    fn test_make_circular_resets_links() {
        let mut links = TestLinks(vec![(1, 1), (0, 0)]);
        let ops = RingOps::new();

        ops.make_circular(&mut links, 0);
        assert!(ops.is_alone(&links, 0));
    }

    #[test]
    fn test_insert_after() {
        let mut links = TestLinks::singles(2);
        let ops = RingOps::new();

        ops.insert_after(&mut links, 0, 1);

        // Now: 0 <-> 1 <-> 0 (circular)
        assert_eq!(links.next(0), 1);
        assert_eq!(links.next(1), 0);
        assert_eq!(links.prev(0), 1);
        assert_eq!(links.prev(1), 0);
    }

    #[test]
    fn test_insert_before_appends_at_end() {
        let mut links = TestLinks::singles(4);
        let ops = RingOps::new();

        ops.insert_before(&mut links, 0, 1);
        ops.insert_before(&mut links, 0, 2);
        ops.insert_before(&mut links, 0, 3);

        assert_eq!(collect(&links, 0), vec![0, 1, 2, 3]);
        assert_consistent(&links, 0);
    }

    #[test]
    fn test_insert_three_nodes() {
        let mut links = TestLinks::singles(3);
        let ops = RingOps::new();

        ops.insert_after(&mut links, 0, 1);
        ops.insert_after(&mut links, 1, 2);

        assert_eq!(collect(&links, 0), vec![0, 1, 2]);
        assert_eq!(collect(&links, 2), vec![2, 0, 1]);
        assert_eq!(links.prev(0), 2);
        assert_consistent(&links, 0);
    }

    #[test]
    fn test_remove_single() {
        let mut links = TestLinks::singles(1);
        let ops = RingOps::new();

        assert_eq!(ops.remove(&mut links, 0), None);
        assert!(ops.is_alone(&links, 0));
    }

    #[test]
    fn test_remove_from_two() {
        let mut links = TestLinks::singles(2);
        let ops = RingOps::new();
        ops.insert_after(&mut links, 0, 1);

        assert_eq!(ops.remove(&mut links, 0), Some(1));
        assert!(ops.is_alone(&links, 0));
        assert!(ops.is_alone(&links, 1));
    }

    #[test]
    fn test_remove_middle() {
        let mut links = TestLinks::singles(3);
        let ops = RingOps::new();
        ops.insert_after(&mut links, 0, 1);
        ops.insert_after(&mut links, 1, 2);

        assert_eq!(ops.remove(&mut links, 1), Some(2));
        assert_eq!(collect(&links, 0), vec![0, 2]);
        assert!(ops.is_alone(&links, 1));
        assert_consistent(&links, 0);
    }

    #[test]
    fn test_removed_node_can_be_reinserted() {
        let mut links = TestLinks::singles(3);
        let ops = RingOps::new();
        ops.insert_after(&mut links, 0, 1);
        ops.insert_after(&mut links, 1, 2);

        ops.remove(&mut links, 1);
        ops.insert_before(&mut links, 0, 1);

        assert_eq!(collect(&links, 0), vec![0, 2, 1]);
        assert_consistent(&links, 0);
    }

    #[test]
    fn test_splice_empty() {
        let mut links = TestLinks::singles(0);
        let ops = RingOps::new();

        assert_eq!(ops.splice::<usize, _>(&mut links, None, None), None);
    }

    #[test]
    fn test_splice_one_empty() {
        let mut links = TestLinks::singles(1);
        let ops = RingOps::new();

        assert_eq!(ops.splice(&mut links, Some(0), None), Some(0));
        assert_eq!(ops.splice(&mut links, None, Some(0)), Some(0));
        assert!(ops.is_alone(&links, 0));
    }

    #[test]
    fn test_splice_two_rings() {
        let mut links = TestLinks::singles(5);
        let ops = RingOps::new();
        ops.insert_after(&mut links, 0, 1);
        ops.insert_after(&mut links, 2, 3);
        ops.insert_after(&mut links, 3, 4);

        let entry = ops.splice(&mut links, Some(0), Some(2));

        assert_eq!(entry, Some(0));
        assert_eq!(collect(&links, 0), vec![0, 1, 2, 3, 4]);
        assert_consistent(&links, 0);
    }

    #[test]
    fn test_count() {
        let mut links = TestLinks::singles(6);
        let ops = RingOps::new();
        for key in 1..6 {
            ops.insert_before(&mut links, 0, key);
        }

        assert_eq!(ops.count(&links, 0), 6);
        assert_eq!(ops.count(&links, 3), 6);
    }
}
