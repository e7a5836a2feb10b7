//! Standard library compatibility layer
//!
//! Conversions between [`PriorityQueue`] and `std::collections::BinaryHeap`.
//!
//! # Differences from BinaryHeap
//!
//! - **Ordering**: `BinaryHeap` is always ordered by `Ord`. A `PriorityQueue`
//!   with the [`Natural`] relation matches it exactly; one with [`Reversed`]
//!   corresponds to `BinaryHeap<Reverse<T>>`.
//! - **Empty access**: [`PriorityQueue::top`] reports
//!   [`HeapError::EmptyContainer`](crate::HeapError::EmptyContainer) where
//!   `BinaryHeap::peek` returns `None`. `peek` is available for the `Option`
//!   flavour.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BinaryHeap;
//! use rust_binary_pq::PriorityQueue;
//!
//! let std_heap = BinaryHeap::from(vec![5, 3, 7]);
//! let mut queue = PriorityQueue::from(std_heap);
//! assert_eq!(queue.pop(), Some(7));
//!
//! let back: BinaryHeap<i32> = queue.into();
//! assert_eq!(back.into_sorted_vec(), vec![3, 5]);
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::compare::{Natural, Reversed};
use crate::priority_queue::PriorityQueue;
use crate::traits::BackingStore;

/// Drains a store in storage order, without regard for the heap ordering
fn drain_store<T, S: BackingStore<T>>(mut store: S) -> Vec<T> {
    let mut items = Vec::with_capacity(store.len());
    while let Some(item) = store.pop() {
        items.push(item);
    }
    items
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T> {
    /// Heapifies `vec` in place
    fn from(vec: Vec<T>) -> Self {
        PriorityQueue::with_store(Natural, vec)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for PriorityQueue<T> {
    fn from(items: [T; N]) -> Self {
        PriorityQueue::with_store(Natural, Vec::from(items))
    }
}

impl<T: Ord> From<BinaryHeap<T>> for PriorityQueue<T> {
    fn from(heap: BinaryHeap<T>) -> Self {
        PriorityQueue::with_store(Natural, heap.into_vec())
    }
}

impl<T: Ord, S: BackingStore<T>> From<PriorityQueue<T, S, Natural>> for BinaryHeap<T> {
    fn from(queue: PriorityQueue<T, S, Natural>) -> Self {
        BinaryHeap::from(drain_store(queue.into_store()))
    }
}

impl<T: Ord> From<BinaryHeap<Reverse<T>>> for PriorityQueue<T, Vec<T>, Reversed> {
    fn from(heap: BinaryHeap<Reverse<T>>) -> Self {
        let items: Vec<T> = heap.into_vec().into_iter().map(|Reverse(item)| item).collect();
        PriorityQueue::with_store(Reversed, items)
    }
}

impl<T: Ord, S: BackingStore<T>> From<PriorityQueue<T, S, Reversed>> for BinaryHeap<Reverse<T>> {
    fn from(queue: PriorityQueue<T, S, Reversed>) -> Self {
        drain_store(queue.into_store())
            .into_iter()
            .map(Reverse)
            .collect()
    }
}
