//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) insert and peek
//! - O(1) amortized decrease_key
//! - O(log n) amortized pop
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list, and so are the children of every node. The
//! heap keeps a reference to the root holding the minimum value.
//!
//! Nodes live in a generational arena ([`slotmap::SlotMap`]) and refer to each
//! other by key, so relinking is O(1) without reference cycles. A
//! [`NodeHandle`] is a versioned arena key: once its node is popped, every
//! operation taking that handle fails with [`HeapError::InvalidHandle`], even
//! if the slot has since been reused.
//!
//! # Example
//!
//! ```rust
//! use priority_heaps::fibonacci::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! heap.push(4);
//! heap.push(2);
//! let ten = heap.push(10);
//! heap.push(-3);
//!
//! assert_eq!(heap.pop(), Ok(-3));
//! heap.decrease_key(&ten, -10).unwrap();
//! assert_eq!(heap.peek(), Ok(&-10));
//! ```

use std::fmt;

use log::{debug, trace};
use sibling_ring::{RingLinks, RingOps};
use slotmap::{new_key_type, SlotMap};
use smallvec::{smallvec, SmallVec};

use crate::compare::{Compare, Less};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError};

const RING: RingOps = RingOps::new();

new_key_type! {
    /// Arena key of a heap node
    struct NodeKey;
}

/// Handle to an element in a Fibonacci heap
///
/// Handles are tied to the heap instance that issued them. A handle whose
/// element has been popped (or whose heap was cleared) is detected and
/// rejected with [`HeapError::InvalidHandle`]. Passing a handle to a
/// different heap instance is a caller error that is not detected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeHandle {
    key: NodeKey,
}

impl Handle for NodeHandle {}

struct Node<T> {
    value: T,
    parent: Option<NodeKey>,
    child: Option<NodeKey>,
    next: NodeKey,
    prev: NodeKey,
    degree: usize,
    marked: bool,
}

impl<T> Node<T> {
    /// A node with no relatives, forming a ring of one.
    fn singleton(value: T, key: NodeKey) -> Self {
        Node {
            value,
            parent: None,
            child: None,
            next: key,
            prev: key,
            degree: 0,
            marked: false,
        }
    }
}

/// Node storage. Only the arena owns nodes; every link is a plain key.
struct NodeArena<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
}

impl<T> RingLinks<NodeKey> for NodeArena<T> {
    #[inline]
    fn next(&self, key: NodeKey) -> NodeKey {
        self.nodes[key].next
    }

    #[inline]
    fn prev(&self, key: NodeKey) -> NodeKey {
        self.nodes[key].prev
    }

    #[inline]
    fn set_next(&mut self, key: NodeKey, next: NodeKey) {
        self.nodes[key].next = next;
    }

    #[inline]
    fn set_prev(&mut self, key: NodeKey, prev: NodeKey) {
        self.nodes[key].prev = prev;
    }
}

/// Initial size of the degree table used by consolidation.
///
/// At least ⌈log₂ n⌉ + 1. Fibonacci trees can reach degree
/// log_φ n, so the table still grows on demand.
fn degree_table_len(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize + 1
}

/// Fibonacci Heap
///
/// With the default [`Less`] comparator this is a min-heap.
///
/// # Example
///
/// ```rust
/// use priority_heaps::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.push(5);
/// heap.push(3);
/// heap.decrease_key(&handle, 1).unwrap();
/// assert_eq!(heap.peek(), Ok(&1));
/// ```
pub struct FibonacciHeap<T, C = Less> {
    arena: NodeArena<T>,
    /// Entry point of the root list
    head: Option<NodeKey>,
    /// Root holding the first-ranked value
    min: Option<NodeKey>,
    compare: C,
}

impl<T> FibonacciHeap<T, Less> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<T, C> FibonacciHeap<T, C> {
    /// Creates an empty heap ordered by `compare`
    pub fn with_comparator(compare: C) -> Self {
        Self {
            arena: NodeArena {
                nodes: SlotMap::with_key(),
            },
            head: None,
            min: None,
            compare,
        }
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.arena.nodes.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.arena.nodes.is_empty()
    }

    /// Returns true if `handle` still refers to an element of this heap
    pub fn contains(&self, handle: &NodeHandle) -> bool {
        self.arena.nodes.contains_key(handle.key)
    }

    /// Returns the value of the element identified by `handle`
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] if the element has been popped.
    pub fn get(&self, handle: &NodeHandle) -> Result<&T, HeapError> {
        self.arena
            .nodes
            .get(handle.key)
            .map(|node| &node.value)
            .ok_or(HeapError::InvalidHandle)
    }

    /// Returns a mutable reference to the value identified by `handle`
    ///
    /// The value may only be lowered (per the comparator), and the change
    /// must be followed by [`notify_decreased`](Self::notify_decreased)
    /// before any other operation on the heap. Raising a value through this
    /// reference breaks the heap order; the heap stays memory-safe but its
    /// extraction order becomes unspecified.
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] if the element has been popped.
    pub fn get_mut(&mut self, handle: &NodeHandle) -> Result<&mut T, HeapError> {
        self.arena
            .nodes
            .get_mut(handle.key)
            .map(|node| &mut node.value)
            .ok_or(HeapError::InvalidHandle)
    }

    /// Returns the first-ranked element without removing it
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap holds no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.min
            .map(|min| &self.arena.nodes[min].value)
            .ok_or(HeapError::Empty)
    }

    /// Removes every element, invalidating all outstanding handles
    pub fn clear(&mut self) {
        self.arena.nodes.clear();
        self.head = None;
        self.min = None;
    }
}

impl<T, C: Compare<T>> FibonacciHeap<T, C> {
    /// Inserts an element, returning a handle that identifies it
    ///
    /// The new node becomes a root of its own; no trees are merged until the
    /// next [`pop`](Self::pop).
    pub fn push(&mut self, value: T) -> NodeHandle {
        let key = self
            .arena
            .nodes
            .insert_with_key(|key| Node::singleton(value, key));

        self.add_root(key);
        self.update_min(key);

        NodeHandle { key }
    }

    /// Removes and returns the first-ranked element
    ///
    /// Children of the removed node become roots, then roots of equal degree
    /// are linked until every root degree is distinct.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap holds no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let min = self.min.ok_or(HeapError::Empty)?;

        self.promote_children(min);

        let successor = RING.remove(&mut self.arena, min);
        if self.head == Some(min) {
            self.head = successor;
        }

        let node = self
            .arena
            .nodes
            .remove(min)
            .ok_or(HeapError::InvalidHandle)?;

        if successor.is_none() {
            debug_assert!(self.arena.nodes.is_empty());
            self.head = None;
            self.min = None;
        } else {
            self.consolidate();
            self.min = self.find_min_root();
        }

        Ok(node.value)
    }

    /// Lowers the value of the element identified by `handle` to `new_value`
    ///
    /// A value equal to the current one is accepted.
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the element has been popped.
    /// - [`HeapError::KeyIncreased`] if `new_value` ranks after the current
    ///   value. Nothing is modified and `new_value` is dropped.
    pub fn decrease_key(&mut self, handle: &NodeHandle, new_value: T) -> Result<(), HeapError> {
        let node = self
            .arena
            .nodes
            .get_mut(handle.key)
            .ok_or(HeapError::InvalidHandle)?;

        if self.compare.less(&node.value, &new_value) {
            return Err(HeapError::KeyIncreased);
        }

        node.value = new_value;
        self.notify_decreased(handle)
    }

    /// Restores the heap after the value behind `handle` was lowered in place
    ///
    /// Use this after modifying a value through [`get_mut`](Self::get_mut).
    /// If the node now ranks before its parent, it is cut into the root list,
    /// and marked ancestors are cut in turn.
    ///
    /// # Errors
    /// [`HeapError::InvalidHandle`] if the element has been popped.
    pub fn notify_decreased(&mut self, handle: &NodeHandle) -> Result<(), HeapError> {
        let key = handle.key;
        let parent = self
            .arena
            .nodes
            .get(key)
            .ok_or(HeapError::InvalidHandle)?
            .parent;

        match parent {
            Some(parent) => {
                if self.less(key, parent) {
                    self.cut(key, parent);
                    self.cascading_cut(parent);
                    self.update_min(key);
                }
            }
            None => self.update_min(key),
        }

        Ok(())
    }

    #[inline]
    fn less(&self, a: NodeKey, b: NodeKey) -> bool {
        self.compare
            .less(&self.arena.nodes[a].value, &self.arena.nodes[b].value)
    }

    /// Points `min` at `key` if it ranks before the current minimum.
    fn update_min(&mut self, key: NodeKey) {
        match self.min {
            Some(min) if !self.less(key, min) => {}
            _ => self.min = Some(key),
        }
    }

    /// Clears parent and mark, then appends `key` to the root list.
    ///
    /// `key` must be alone in its ring.
    fn add_root(&mut self, key: NodeKey) {
        let node = &mut self.arena.nodes[key];
        node.parent = None;
        node.marked = false;

        match self.head {
            Some(head) => RING.insert_before(&mut self.arena, head, key),
            None => self.head = Some(key),
        }
    }

    /// Moves every child of `key` into the root list.
    fn promote_children(&mut self, key: NodeKey) {
        let node = &mut self.arena.nodes[key];
        let Some(first) = node.child.take() else {
            return;
        };
        node.degree = 0;

        let mut current = first;
        loop {
            let child = &mut self.arena.nodes[current];
            child.parent = None;
            child.marked = false;
            current = child.next;
            if current == first {
                break;
            }
        }

        // The root list is never empty here: `key` itself is still a root.
        RING.splice(&mut self.arena, self.head, Some(first));
    }

    /// Makes `child` (a root) a child of `parent` (another root).
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        RING.remove(&mut self.arena, child);
        if self.head == Some(child) {
            self.head = Some(parent);
        }

        let node = &mut self.arena.nodes[child];
        node.parent = Some(parent);
        node.marked = false;

        match self.arena.nodes[parent].child {
            Some(first) => RING.insert_before(&mut self.arena, first, child),
            None => self.arena.nodes[parent].child = Some(child),
        }
        self.arena.nodes[parent].degree += 1;
    }

    /// Links roots of equal degree until every root degree is distinct.
    fn consolidate(&mut self) {
        let Some(head) = self.head else {
            return;
        };

        let roots: SmallVec<[NodeKey; 32]> = RING.iter(&self.arena, head).collect();
        let mut by_degree: SmallVec<[Option<NodeKey>; 32]> =
            smallvec![None; degree_table_len(self.len())];
        let mut links = 0usize;

        for root in roots.iter().copied() {
            let mut x = root;
            let mut degree = self.arena.nodes[x].degree;

            loop {
                if degree >= by_degree.len() {
                    by_degree.resize(degree + 1, None);
                }
                let Some(mut y) = by_degree[degree].take() else {
                    break;
                };

                // On a tie the root being processed stays on top.
                if self.less(y, x) {
                    std::mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                links += 1;
                degree += 1;
            }

            by_degree[degree] = Some(x);
        }

        debug!(
            "consolidated {} roots into {} with {} links",
            roots.len(),
            roots.len() - links,
            links
        );
    }

    /// Scans the root list for the first-ranked root.
    fn find_min_root(&self) -> Option<NodeKey> {
        let head = self.head?;
        let min = RING
            .iter(&self.arena, head)
            .fold(head, |best, key| if self.less(key, best) { key } else { best });
        Some(min)
    }

    /// Detaches `key` from `parent` and makes it an unmarked root.
    fn cut(&mut self, key: NodeKey, parent: NodeKey) {
        let successor = RING.remove(&mut self.arena, key);

        let parent_node = &mut self.arena.nodes[parent];
        if parent_node.child == Some(key) {
            parent_node.child = successor;
        }
        parent_node.degree -= 1;

        self.add_root(key);
    }

    /// Walks up from `key`: marks the first unmarked non-root, cutting every
    /// marked ancestor passed on the way.
    fn cascading_cut(&mut self, mut key: NodeKey) {
        while let Some(parent) = self.arena.nodes[key].parent {
            if !self.arena.nodes[key].marked {
                self.arena.nodes[key].marked = true;
                return;
            }

            trace!("cascading cut of {:?}", key);
            self.cut(key, parent);
            key = parent;
        }
    }
}

impl<T, C: Default> Default for FibonacciHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for FibonacciHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len())
            .field("min", &self.peek().ok())
            .finish_non_exhaustive()
    }
}

impl<T, C: Compare<T>> Extend<T> for FibonacciHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for FibonacciHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T> + Default> Heap<T> for FibonacciHeap<T, C> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        FibonacciHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FibonacciHeap::len(self)
    }

    fn push(&mut self, value: T) {
        FibonacciHeap::push(self, value);
    }

    fn peek(&self) -> Result<&T, HeapError> {
        FibonacciHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        FibonacciHeap::pop(self)
    }
}

impl<T, C: Compare<T> + Default> DecreaseKeyHeap<T> for FibonacciHeap<T, C> {
    type Handle = NodeHandle;

    fn push_with_handle(&mut self, value: T) -> NodeHandle {
        FibonacciHeap::push(self, value)
    }

    fn decrease_key(&mut self, handle: &NodeHandle, new_value: T) -> Result<(), HeapError> {
        FibonacciHeap::decrease_key(self, handle, new_value)
    }
}
