//! Common traits for the priority queue
//!
//! The queue is generic over three things, each with its own seam:
//!
//! - [`Compare`]: the ordering relation deciding which element has priority
//! - [`BackingStore`]: the resizable array the implicit binary tree lives in
//! - [`Heap`]: the plain push/peek/pop interface, shared by every queue
//!   configuration so that tests and callers can be written once
//!
//! Errors raised by queue operations are reported through [`HeapError`].

use std::fmt;
use std::ops::Index;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The top element was requested from a heap holding no elements
    EmptyContainer,
    /// The backing store could not grow to hold another element
    AllocationFailure,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => {
                write!(f, "cannot access the top of an empty heap")
            }
            HeapError::AllocationFailure => {
                write!(f, "backing store failed to allocate room for another element")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// An ordering relation between two elements
///
/// `less(a, b)` returns `true` when `a` has *lower* priority than `b`. The
/// element for which no other element is "greater" ends up on top of the heap.
///
/// Implementations must behave as a strict weak ordering for the lifetime of
/// the heap: irreflexive (`!less(a, a)`), asymmetric and transitive. Elements
/// for which neither `less(a, b)` nor `less(b, a)` holds are ties and come
/// out in an unspecified relative order.
///
/// Any `Fn(&T, &T) -> bool` closure is a `Compare<T>`:
///
/// ```rust
/// use rust_binary_pq::PriorityQueue;
///
/// // Shortest string first
/// let mut queue = PriorityQueue::with_comparator(|a: &&str, b: &&str| a.len() > b.len());
/// queue.push("three");
/// queue.push("one");
/// queue.push("eleven");
/// assert_eq!(queue.pop(), Some("one"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` has lower priority than `b`
    fn less(&self, a: &T, b: &T) -> bool;
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

/// A resizable, 0-indexed sequence the heap is laid out in
///
/// The heap only needs constant-time indexed reads, swaps of two positions,
/// append at the end and removal from the end. How the store grows is its own
/// business; [`try_reserve`](BackingStore::try_reserve) is the only window the
/// heap has into allocation, and is used to report growth failures instead of
/// aborting.
///
/// Implementations must preserve the relative order of untouched elements
/// across `push` and `pop`.
pub trait BackingStore<T>: Default + Index<usize, Output = T> {
    /// Returns the number of stored elements
    fn len(&self) -> usize;

    /// Returns true if the store holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an element at the end
    fn push(&mut self, value: T);

    /// Removes and returns the last element
    fn pop(&mut self) -> Option<T>;

    /// Exchanges the elements at two storage positions
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);

    /// Makes room for at least `additional` more elements
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailure`] if the store cannot grow.
    fn try_reserve(&mut self, additional: usize) -> Result<(), HeapError>;

    /// Removes every element
    fn clear(&mut self);
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the highest-priority element
/// - `peek` returns the highest-priority element without removing it
///
/// Which element counts as "highest priority" is decided by the heap's
/// [`Compare`] relation. With the default [`Natural`](crate::compare::Natural)
/// ordering that is the greatest element, as with `BinaryHeap`.
///
/// # Example
///
/// ```rust
/// use rust_binary_pq::{Heap, PriorityQueue};
///
/// let mut heap: PriorityQueue<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&3));
/// assert_eq!(heap.pop(), Some(3));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the highest-priority element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// O(n + m) when rebuilding is cheaper, otherwise O(m log(n + m)).
    fn merge(&mut self, other: Self);
}
