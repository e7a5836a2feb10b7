//! Binary heap priority queue
//!
//! [`PriorityQueue`] keeps its elements in a [`BackingStore`] laid out as an
//! implicit complete binary tree, ordered by a [`Compare`] relation so that no
//! element has lower priority than either of its children.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity      |
//! |----------------------|-----------------|
//! | `push`               | O(log n)        |
//! | `pop`                | O(log n)        |
//! | `top` / `peek`       | O(1)            |
//! | `with_store`         | O(n)            |
//! | `append`             | O(n + m) worst  |
//! | `swap`               | O(1)            |
//!
//! # Example
//!
//! ```rust
//! use rust_binary_pq::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! for n in [3, 1, 4, 1, 5, 9, 2, 6] {
//!     queue.push(n);
//! }
//!
//! assert_eq!(queue.top(), Ok(&9));
//! assert_eq!(queue.into_sorted_vec(), vec![9, 6, 5, 4, 3, 2, 1, 1]);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use log::{debug, trace};

use crate::compare::Natural;
use crate::heap_index::{last_interior, left_child, parent, right_child, to_storage, ROOT};
use crate::traits::{BackingStore, Compare, Heap, HeapError};

/// A priority queue backed by a binary heap
///
/// - `T`: the element type
/// - `S`: the backing store, `Vec<T>` unless stated otherwise
/// - `C`: the ordering relation, [`Natural`] (greatest element first) unless
///   stated otherwise
///
/// The queue owns its store exclusively. Cloning copies every element;
/// moving transfers the store wholesale.
pub struct PriorityQueue<T, S = Vec<T>, C = Natural> {
    store: S,
    cmp: C,
    _phantom: PhantomData<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty max-queue using `T`'s natural order
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, Vec<T>, C> {
    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            store: Vec::new(),
            cmp,
            _phantom: PhantomData,
        }
    }

    /// Creates an empty queue ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            cmp,
            _phantom: PhantomData,
        }
    }
}

impl<T, S: BackingStore<T>, C: Compare<T>> PriorityQueue<T, S, C> {
    /// Adopts an unordered store and heapifies it in place
    ///
    /// # Time Complexity
    /// O(n)
    ///
    /// ```rust
    /// use rust_binary_pq::compare::Natural;
    /// use rust_binary_pq::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::with_store(Natural, vec![5, 3, 8, 1]);
    /// assert_eq!(queue.top(), Ok(&8));
    /// queue.pop();
    /// assert_eq!(queue.top(), Ok(&5));
    /// ```
    pub fn with_store(cmp: C, store: S) -> Self {
        let mut queue = Self {
            store,
            cmp,
            _phantom: PhantomData,
        };
        trace!("adopting backing store of {} elements", queue.len());
        queue.heapify();
        queue
    }

    /// Copies an unordered store and heapifies the copy
    ///
    /// The caller's store is left untouched.
    pub fn from_store_ref(cmp: C, store: &S) -> Self
    where
        S: Clone,
    {
        Self::with_store(cmp, store.clone())
    }

    /// Builds a queue by pushing every element of `iter` in turn
    pub fn from_elements<I: IntoIterator<Item = T>>(cmp: C, iter: I) -> Self {
        let mut queue = Self {
            store: S::default(),
            cmp,
            _phantom: PhantomData,
        };
        queue.extend(iter);
        queue
    }

    /// Returns the number of elements in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the queue holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyContainer`] if the queue is empty.
    pub fn top(&self) -> Result<&T, HeapError> {
        if self.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        Ok(&self.store[to_storage(ROOT)])
    }

    /// Returns the highest-priority element, or `None` if the queue is empty
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.top().ok()
    }

    /// Inserts an element
    ///
    /// Growth of the store goes through its usual allocation path, so an
    /// allocation failure aborts like any `Vec::push` would. Use
    /// [`try_push`](Self::try_push) to observe the failure instead.
    pub fn push(&mut self, item: T) {
        self.store.push(item);
        let new_leaf = self.len();
        self.percolate_up(new_leaf);
    }

    /// Inserts an element, reporting allocation failure instead of aborting
    ///
    /// On error the queue is unchanged and `item` is dropped.
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailure`] if the store cannot grow.
    pub fn try_push(&mut self, item: T) -> Result<(), HeapError> {
        if let Err(err) = self.store.try_reserve(1) {
            debug!("push rejected at {} elements: {}", self.len(), err);
            return Err(err);
        }
        self.push(item);
        Ok(())
    }

    /// Removes and returns the highest-priority element
    ///
    /// Returns `None` without touching the queue when it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last = self.len();
        self.store.swap(to_storage(ROOT), to_storage(last));
        let top = self.store.pop();

        if !self.is_empty() {
            self.percolate_down(ROOT);
        }

        top
    }

    /// Exchanges the contents and ordering relations of two queues
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.store, &mut other.store);
        mem::swap(&mut self.cmp, &mut other.cmp);
    }

    /// Moves every element of `other` into `self`, leaving `other` empty
    ///
    /// The moved elements are ordered by `self`'s relation. Depending on the
    /// sizes involved the heap is either rebuilt from scratch or the new
    /// elements are percolated up one by one, whichever does fewer
    /// comparisons.
    pub fn append(&mut self, other: &mut Self) {
        let start = self.len();
        let tail_len = other.len();
        if tail_len == 0 {
            return;
        }

        while let Some(item) = other.store.pop() {
            self.store.push(item);
        }

        if better_to_rebuild(start, tail_len) {
            trace!("rebuilding heap of {} after appending {}", start, tail_len);
            self.heapify();
        } else {
            for leaf in start + 1..=self.len() {
                self.percolate_up(leaf);
            }
        }
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Returns the ordering relation
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the backing store, in heap order
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the queue, returning its backing store in heap order
    pub fn into_store(self) -> S {
        self.store
    }

    /// Consumes the queue, returning its elements highest priority first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks that no element has lower priority than either of its children
    pub fn check_invariant(&self) -> bool {
        (ROOT + 1..=self.len()).all(|child| match parent(child) {
            Some(up) => !self.less(up, child),
            None => true,
        })
    }

    /// Restores the heap property over the whole store
    fn heapify(&mut self) {
        let len = self.len();
        let adjusted = (ROOT..=last_interior(len))
            .rev()
            .filter(|&index| self.percolate_down(index))
            .count();
        trace!("heapified {} elements, {} subtrees adjusted", len, adjusted);
    }

    /// Compares two heap positions
    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.cmp
            .less(&self.store[to_storage(a)], &self.store[to_storage(b)])
    }

    /// Move the element at heap index down until neither child outranks it
    ///
    /// Returns true if anything moved.
    fn percolate_down(&mut self, mut index: usize) -> bool {
        let len = self.len();
        let mut moved = false;

        while let Some(left) = left_child(index, len) {
            // Ties go to the left child
            let bigger = match right_child(index, len) {
                Some(right) if self.less(left, right) => right,
                _ => left,
            };

            if !self.less(index, bigger) {
                break;
            }

            self.store.swap(to_storage(index), to_storage(bigger));
            index = bigger;
            moved = true;
        }

        moved
    }

    /// Move the element at heap index up while it outranks its parent
    fn percolate_up(&mut self, mut index: usize) {
        while let Some(up) = parent(index) {
            if !self.less(up, index) {
                break;
            }
            self.store.swap(to_storage(up), to_storage(index));
            index = up;
        }
    }
}

/// Above this many elements the comparison-count model stops predicting the
/// crossover, and [`LARGE_HEAP_DEPTH`] is used in place of `log2(start)`
const COMPARISON_MODEL_LIMIT: usize = 2048;

/// Measured crossover depth for large heaps, roughly `log2(COMPARISON_MODEL_LIMIT)`
const LARGE_HEAP_DEPTH: usize = 11;

/// Whether rebuilding `start + tail_len` elements beats percolating up the
/// `tail_len` new ones
///
/// In the worst case heapify does about `2 * len` comparisons and percolating
/// up does about `tail_len * log2(start)`, which holds while `start` is at
/// least `tail_len`. Past [`COMPARISON_MODEL_LIMIT`] elements cache effects
/// dominate, so the depth term is pinned to the empirically measured
/// [`LARGE_HEAP_DEPTH`] (the same cutoff `std`'s `BinaryHeap::append` uses).
fn better_to_rebuild(start: usize, tail_len: usize) -> bool {
    if tail_len == 0 {
        return false;
    }
    if start < tail_len {
        return true;
    }

    let len = start + tail_len;
    let depth = if len <= COMPARISON_MODEL_LIMIT {
        start.ilog2() as usize
    } else {
        LARGE_HEAP_DEPTH
    };
    2 * len < tail_len * depth
}

impl<T, S: BackingStore<T>, C: Compare<T> + Default> Heap<T> for PriorityQueue<T, S, C> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn push(&mut self, item: T) {
        PriorityQueue::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        PriorityQueue::pop(self)
    }

    fn merge(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}

impl<T, S: BackingStore<T>, C: Default> Default for PriorityQueue<T, S, C> {
    fn default() -> Self {
        Self {
            store: S::default(),
            cmp: C::default(),
            _phantom: PhantomData,
        }
    }
}

impl<T, S: Clone, C: Clone> Clone for PriorityQueue<T, S, C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            cmp: self.cmp.clone(),
            _phantom: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.store.clone_from(&source.store);
        self.cmp.clone_from(&source.cmp);
    }
}

impl<T, S: BackingStore<T> + fmt::Debug, C> fmt::Debug for PriorityQueue<T, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.store.len())
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<T, S: BackingStore<T>, C: Compare<T>> Extend<T> for PriorityQueue<T, S, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Reservation is only a hint here; push grows the store as needed
        let hint = iter.size_hint().0;
        if let Err(err) = self.store.try_reserve(hint) {
            trace!("could not reserve {} slots ahead of extend: {}", hint, err);
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, S: BackingStore<T>, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, S, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(C::default(), iter)
    }
}
