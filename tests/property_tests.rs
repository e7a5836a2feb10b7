//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap invariant, the pop order and the size accounting hold after every
//! single operation.

use proptest::prelude::*;
use rust_binary_pq::compare::{Natural, Reversed};
use rust_binary_pq::{BackingStore, Compare, HeapError, PriorityQueue};

use std::collections::VecDeque;

/// Test that push and pop keep the invariant and always expose the best element
fn test_push_pop_invariant<S, C>(cmp: C, ops: Vec<(bool, i32)>) -> Result<(), TestCaseError>
where
    S: BackingStore<i32>,
    C: Compare<i32> + Clone,
{
    let mut queue: PriorityQueue<i32, S, C> = PriorityQueue::with_store(cmp.clone(), S::default());
    let mut inserted: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop {
            let popped = queue.pop();
            if let Some(top) = popped {
                let pos = inserted.iter().position(|&n| n == top);
                prop_assert!(pos.is_some(), "popped {} which was never pushed", top);
                if let Some(pos) = pos {
                    inserted.remove(pos);
                }
            } else {
                prop_assert!(inserted.is_empty());
            }
        } else {
            queue.push(value);
            inserted.push(value);
        }

        prop_assert!(queue.check_invariant());
        prop_assert_eq!(queue.len(), inserted.len());

        // No element still queued may outrank the top
        match queue.top() {
            Ok(top) => {
                for other in &inserted {
                    prop_assert!(!cmp.less(top, other), "{} outranks top {}", other, top);
                }
            }
            Err(err) => {
                prop_assert_eq!(err, HeapError::EmptyContainer);
                prop_assert!(inserted.is_empty());
            }
        }
    }

    Ok(())
}

/// Test that all popped elements come out in non-increasing priority
fn test_pop_order_invariant<S, C>(cmp: C, values: Vec<i32>) -> Result<(), TestCaseError>
where
    S: BackingStore<i32>,
    C: Compare<i32> + Clone,
{
    let mut queue: PriorityQueue<i32, S, C> = PriorityQueue::from_elements(cmp.clone(), values.clone());

    let mut popped = Vec::with_capacity(values.len());
    while let Some(top) = queue.pop() {
        if let Some(last) = popped.last() {
            prop_assert!(!cmp.less(last, &top), "popped {} after {}", top, last);
        }
        popped.push(top);
    }

    let mut expected = values;
    expected.sort_unstable();
    popped.sort_unstable();
    prop_assert_eq!(popped, expected);

    Ok(())
}

/// Test that heapifying an arbitrary permutation matches one-by-one insertion
fn test_heapify_invariant<S, C>(cmp: C, values: Vec<i32>) -> Result<(), TestCaseError>
where
    S: BackingStore<i32>,
    C: Compare<i32> + Clone,
{
    let mut store = S::default();
    for &value in &values {
        store.push(value);
    }

    let heapified = PriorityQueue::with_store(cmp.clone(), store);
    prop_assert!(heapified.check_invariant());
    prop_assert_eq!(heapified.len(), values.len());

    let pushed: PriorityQueue<i32, S, C> = PriorityQueue::from_elements(cmp, values);
    prop_assert_eq!(heapified.into_sorted_vec(), pushed.into_sorted_vec());

    Ok(())
}

/// Test append keeps every element and the invariant
fn test_append_invariant(left: Vec<i32>, right: Vec<i32>) -> Result<(), TestCaseError> {
    let mut queue: PriorityQueue<i32> = left.iter().copied().collect();
    let mut other: PriorityQueue<i32> = right.iter().copied().collect();

    queue.append(&mut other);
    prop_assert!(other.is_empty());
    prop_assert!(queue.check_invariant());
    prop_assert_eq!(queue.len(), left.len() + right.len());

    let mut expected: Vec<i32> = left.into_iter().chain(right).collect();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    prop_assert_eq!(queue.into_sorted_vec(), expected);

    Ok(())
}

/// Test that the queue agrees with the standard library heap step by step
fn test_matches_std_binary_heap(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut queue: PriorityQueue<i32> = PriorityQueue::new();
    let mut reference = std::collections::BinaryHeap::new();

    for (should_pop, value) in ops {
        if should_pop {
            prop_assert_eq!(queue.pop(), reference.pop());
        } else {
            queue.push(value);
            reference.push(value);
        }
        prop_assert_eq!(queue.peek(), reference.peek());
        prop_assert_eq!(queue.len(), reference.len());
    }

    Ok(())
}

// Generate test cases for each configuration

proptest! {
    #[test]
    fn test_vec_natural_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_push_pop_invariant::<Vec<i32>, _>(Natural, ops)?;
    }

    #[test]
    fn test_vec_reversed_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_push_pop_invariant::<Vec<i32>, _>(Reversed, ops)?;
    }

    #[test]
    fn test_vecdeque_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_push_pop_invariant::<VecDeque<i32>, _>(Natural, ops)?;
    }

    #[test]
    fn test_closure_push_pop_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        // Highest absolute value first, ties resolved towards the positive one
        let by_magnitude = |a: &i32, b: &i32| (a.abs(), *a) < (b.abs(), *b);
        test_push_pop_invariant::<Vec<i32>, _>(by_magnitude, ops)?;
    }

    #[test]
    fn test_vec_natural_pop_order(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_pop_order_invariant::<Vec<i32>, _>(Natural, values)?;
    }

    #[test]
    fn test_vec_reversed_pop_order(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_pop_order_invariant::<Vec<i32>, _>(Reversed, values)?;
    }

    #[test]
    fn test_vecdeque_pop_order(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_pop_order_invariant::<VecDeque<i32>, _>(Reversed, values)?;
    }

    #[test]
    fn test_vec_natural_heapify(values in prop::collection::vec(-50i32..50, 0..300)) {
        test_heapify_invariant::<Vec<i32>, _>(Natural, values)?;
    }

    #[test]
    fn test_vecdeque_reversed_heapify(values in prop::collection::vec(-50i32..50, 0..300)) {
        test_heapify_invariant::<VecDeque<i32>, _>(Reversed, values)?;
    }

    #[test]
    fn test_append(
        left in prop::collection::vec(-100i32..100, 0..150),
        right in prop::collection::vec(-100i32..100, 0..150)
    ) {
        test_append_invariant(left, right)?;
    }

    #[test]
    fn test_std_equivalence(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..300)) {
        test_matches_std_binary_heap(ops)?;
    }
}
