//! Pluggable backing stores for the heap
//!
//! This module implements [`BackingStore`] for the array-like containers the
//! heap can be laid out in:
//!
//! - `Vec<T>`: Default, contiguous, amortized O(1) append
//! - `VecDeque<T>`: Ring buffer, useful when the caller already holds one
//! - `SmallVec<[T; N]>`: Inline storage for small queues, avoiding a heap
//!   allocation until more than `N` elements are queued
//!
//! # Example
//!
//! ```rust,ignore
//! // Using the default Vec store
//! let mut queue: PriorityQueue<i32> = PriorityQueue::new();
//!
//! // Using an inline SmallVec store (requires feature flag)
//! #[cfg(feature = "smallvec-storage")]
//! let mut queue: PriorityQueue<i32, SmallVec<[i32; 16]>> = PriorityQueue::default();
//! ```

use std::collections::VecDeque;

#[cfg(feature = "smallvec-storage")]
use smallvec::{Array, SmallVec};

use crate::traits::{BackingStore, HeapError};

// ============================================================================
// Vec - Default implementation
// ============================================================================

impl<T> BackingStore<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), HeapError> {
        Vec::try_reserve(self, additional).map_err(|_| HeapError::AllocationFailure)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

// ============================================================================
// VecDeque
// ============================================================================

impl<T> BackingStore<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), HeapError> {
        VecDeque::try_reserve(self, additional).map_err(|_| HeapError::AllocationFailure)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

// ============================================================================
// SmallVec - Inline storage
// ============================================================================

/// Inline storage for small queues
///
/// Elements live inside the queue itself until the inline capacity `A::size()`
/// is exceeded, after which the `SmallVec` spills to the heap.
///
/// # Feature Flag
/// Requires the `smallvec-storage` feature to be enabled.
#[cfg(feature = "smallvec-storage")]
impl<A: Array> BackingStore<A::Item> for SmallVec<A> {
    #[inline]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    #[inline]
    fn push(&mut self, value: A::Item) {
        SmallVec::push(self, value);
    }

    #[inline]
    fn pop(&mut self) -> Option<A::Item> {
        SmallVec::pop(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn try_reserve(&mut self, additional: usize) -> Result<(), HeapError> {
        SmallVec::try_reserve(self, additional).map_err(|_| HeapError::AllocationFailure)
    }

    fn clear(&mut self) {
        SmallVec::clear(self);
    }
}
