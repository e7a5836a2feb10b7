//! Implicit binary tree arithmetic
//!
//! The heap reasons in 1-based *heap indices*: the root is 1 and the children
//! of `i` are `2i` and `2i + 1`. The backing store is 0-based. Every
//! conversion between the two goes through this module, and child lookups
//! are bounds-checked against the current length before anything is read.

/// Heap index of the root
pub(crate) const ROOT: usize = 1;

/// Storage position of a heap index
#[inline]
pub(crate) fn to_storage(index: usize) -> usize {
    debug_assert!(index >= ROOT, "heap index {index} is not 1-based");
    index - 1
}

/// Parent of `index`, or `None` for the root
#[inline]
pub(crate) fn parent(index: usize) -> Option<usize> {
    if index > ROOT {
        Some(index / 2)
    } else {
        None
    }
}

/// Left child of `index` if it exists in a heap of `len` elements
#[inline]
pub(crate) fn left_child(index: usize, len: usize) -> Option<usize> {
    index.checked_mul(2).filter(|&child| child <= len)
}

/// Right child of `index` if it exists in a heap of `len` elements
#[inline]
pub(crate) fn right_child(index: usize, len: usize) -> Option<usize> {
    index
        .checked_mul(2)
        .and_then(|left| left.checked_add(1))
        .filter(|&child| child <= len)
}

/// Last heap index with at least one child; 0 when there is none
#[inline]
pub(crate) fn last_interior(len: usize) -> usize {
    len / 2
}
