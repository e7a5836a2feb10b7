//! Ready-made ordering relations
//!
//! | Relation        | Top of the heap                      |
//! |-----------------|--------------------------------------|
//! | [`Natural`]     | greatest element (`Ord`), the default |
//! | [`Reversed`]    | smallest element (`Ord`)             |
//! | [`ByKey`]       | element with the greatest key        |
//! | any closure     | whatever `less` says                 |
//!
//! Closures of type `Fn(&T, &T) -> bool` implement [`Compare`] directly, so
//! there is no wrapper type for them.

use crate::traits::Compare;

/// The element type's own `Ord`: greater elements have higher priority
///
/// This turns the queue into a max-heap, like `std::collections::BinaryHeap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// The reverse of the element type's `Ord`: smaller elements have higher priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed;

impl<T: Ord + ?Sized> Compare<T> for Reversed {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

/// Orders elements by a key extracted from each one; greater keys win
///
/// ```rust
/// use rust_binary_pq::compare::ByKey;
/// use rust_binary_pq::PriorityQueue;
///
/// let mut jobs = PriorityQueue::with_comparator(ByKey(|job: &(&str, u8)| job.1));
/// jobs.push(("compile", 2));
/// jobs.push(("deploy", 9));
/// jobs.push(("lint", 1));
/// assert_eq!(jobs.pop(), Some(("deploy", 9)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Compare<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}
