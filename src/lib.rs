//! Binary Heap Priority Queue for Rust
//!
//! This crate provides a binary-heap priority queue that is generic over the
//! three things callers most often want to choose themselves:
//!
//! - **Element type**: any `T`, no `Ord` bound unless the natural order is used
//! - **Ordering relation**: any [`Compare`] implementation, including plain
//!   closures; defaults to [`Natural`](compare::Natural) (greatest first)
//! - **Backing store**: any [`BackingStore`]; `Vec<T>` by default, with
//!   `VecDeque<T>` and (behind the `smallvec-storage` feature) `SmallVec`
//!   also supported
//!
//! # Features
//!
//! - O(1) access to the highest-priority element
//! - O(log n) insertion and removal
//! - O(n) construction from an unordered store
//! - Empty access reported as [`HeapError::EmptyContainer`] rather than a panic
//! - Allocation failure observable through [`PriorityQueue::try_push`]
//!
//! # Example
//!
//! ```rust
//! use rust_binary_pq::compare::Reversed;
//! use rust_binary_pq::PriorityQueue;
//!
//! // Earliest deadline first
//! let mut deadlines = PriorityQueue::with_comparator(Reversed);
//! deadlines.push(30);
//! deadlines.push(10);
//! deadlines.push(20);
//!
//! assert_eq!(deadlines.top(), Ok(&10));
//! assert_eq!(deadlines.pop(), Some(10));
//! assert_eq!(deadlines.pop(), Some(20));
//! ```

pub mod compare;
mod heap_index;
pub mod priority_queue;
pub mod stdlib_compat;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use priority_queue::PriorityQueue;
pub use traits::{BackingStore, Compare, Heap, HeapError};
