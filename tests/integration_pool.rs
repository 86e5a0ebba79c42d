//! Integration tests for the trampoline pool
//!
//! Every test shares the process-wide pool, so tests serialize on a local
//! mutex and leave the pool fully released before returning.

use parking_lot::{Mutex, MutexGuard};
use springboard::error::Error;
use springboard::{
    is_sorted, pseudo_random_values, sort_by_callback, CallbackHandle, OrderComparator, SlotPool,
    SortDirection, POOL_CAPACITY,
};
use std::sync::Arc;

fn pool_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock()
}

fn comparator(direction: SortDirection) -> Arc<OrderComparator> {
    Arc::new(OrderComparator::new(direction))
}

fn bind(pool: &'static SlotPool, comparator: &Arc<OrderComparator>) -> CallbackHandle {
    CallbackHandle::bind(pool, comparator, OrderComparator::compare_i32)
        .expect("pool should have a free slot")
}

/// Two comparators with opposite state, bound at the same time, sorting the
/// same input to opposite orders.
#[test]
fn test_ascending_and_descending_bindings() {
    let _guard = pool_lock();
    let pool = SlotPool::global();

    let ascending = comparator(SortDirection::Ascending);
    let descending = comparator(SortDirection::Descending);

    let ascending_handle = bind(pool, &ascending);
    let descending_handle = bind(pool, &descending);
    assert_eq!(ascending_handle.slot_index().index(), 0);
    assert_eq!(descending_handle.slot_index().index(), 1);

    let mut values = vec![3, 1, 2];
    sort_by_callback(&mut values, ascending_handle.entry_point());
    assert_eq!(values, vec![1, 2, 3]);

    let mut values = vec![3, 1, 2];
    sort_by_callback(&mut values, descending_handle.entry_point());
    assert_eq!(values, vec![3, 2, 1]);
}

/// With the pool full, the next bind reports exhaustion; releasing the
/// slot-0 handle makes exactly slot 0 available again.
#[test]
fn test_exhaustion_and_slot_reuse() {
    let _guard = pool_lock();
    let pool = SlotPool::global();
    let ascending = comparator(SortDirection::Ascending);

    let mut handles: Vec<_> = (0..POOL_CAPACITY).map(|_| bind(pool, &ascending)).collect();

    let err = CallbackHandle::bind(pool, &ascending, OrderComparator::compare_i32).unwrap_err();
    assert!(matches!(err, Error::Exhausted { capacity } if capacity == POOL_CAPACITY));

    handles.remove(0).release();
    let replacement = bind(pool, &ascending);
    assert_eq!(replacement.slot_index().index(), 0);

    // Full again: one more bind fails.
    assert!(CallbackHandle::bind(pool, &ascending, OrderComparator::compare_i32).is_err());
}

/// Handles dropped without an explicit release still free their slots.
#[test]
fn test_scope_exit_frees_slots() {
    let _guard = pool_lock();
    let pool = SlotPool::global();
    let ascending = comparator(SortDirection::Ascending);

    {
        let _handles: Vec<_> = (0..POOL_CAPACITY).map(|_| bind(pool, &ascending)).collect();
        assert_eq!(pool.stats().free, 0);
    }
    assert_eq!(pool.stats().free, POOL_CAPACITY);

    // The pool can be filled to capacity again.
    let handles: Vec<_> = (0..POOL_CAPACITY).map(|_| bind(pool, &ascending)).collect();
    assert_eq!(handles.len(), POOL_CAPACITY);
}

/// Sequential acquisition from an empty pool yields indices in increasing
/// order.
#[test]
fn test_acquisition_order_is_deterministic() {
    let _guard = pool_lock();
    let pool = SlotPool::global();
    let ascending = comparator(SortDirection::Ascending);

    let handles: Vec<_> = (0..POOL_CAPACITY).map(|_| bind(pool, &ascending)).collect();
    for (expected, handle) in handles.iter().enumerate() {
        assert_eq!(handle.slot_index().index(), expected);
    }
}

/// The entry point for a slot keeps its address across acquire/release
/// cycles while its behavior follows the newly bound state.
#[test]
fn test_entry_point_identity_across_rebinds() {
    let _guard = pool_lock();
    let pool = SlotPool::global();

    let ascending = comparator(SortDirection::Ascending);
    let first = bind(pool, &ascending);
    let address = first.entry_point() as usize;
    first.release();

    let descending = comparator(SortDirection::Descending);
    let second = bind(pool, &descending);
    assert_eq!(second.slot_index().index(), 0);
    assert_eq!(second.entry_point() as usize, address);

    let mut values = vec![1, 3, 2];
    sort_by_callback(&mut values, second.entry_point());
    assert_eq!(values, vec![3, 2, 1]);
}

/// Concurrent acquire/sort/release cycles never hand two callers the same
/// slot and leave the pool fully free at the end.
#[test]
fn test_concurrent_acquire_and_release() {
    let _guard = pool_lock();
    let pool = SlotPool::global();

    let threads: Vec<_> = (0..8u64)
        .map(|thread_id| {
            std::thread::spawn(move || {
                let pool = SlotPool::global();
                let direction = if thread_id % 2 == 0 {
                    SortDirection::Ascending
                } else {
                    SortDirection::Descending
                };
                let comparator = Arc::new(OrderComparator::new(direction));

                for round in 0..50u64 {
                    let handle = loop {
                        match CallbackHandle::bind(
                            pool,
                            &comparator,
                            OrderComparator::compare_i32,
                        ) {
                            Ok(handle) => break handle,
                            Err(Error::Exhausted { .. }) => std::thread::yield_now(),
                            Err(err) => panic!("unexpected error: {}", err),
                        }
                    };

                    let mut values = pseudo_random_values(thread_id * 1000 + round, 64);
                    sort_by_callback(&mut values, handle.entry_point());
                    assert!(is_sorted(&values, direction));
                }
            })
        })
        .collect();

    for thread in threads {
        thread.join().unwrap();
    }

    assert_eq!(pool.stats().free, POOL_CAPACITY);
}
