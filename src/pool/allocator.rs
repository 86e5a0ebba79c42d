//! Slot pool: allocation, release, and dispatch
//!
//! The pool owns the fixed table of slot bindings. Each slot sits behind its
//! own `RwLock`, so checking "is this slot free" and installing a binding is
//! atomic with respect to concurrent acquires, while dispatch only takes a
//! read lock. Acquisition never blocks: it either binds the lowest free
//! index immediately or reports exhaustion.

use super::slot::{Slot, SlotBinding, SlotIndex};
use super::trampoline::{CompareFn, ENTRY_POINTS};
use super::POOL_CAPACITY;
use crate::comparator::CompareMethod;
use crate::error::{Error, Result};
use parking_lot::RwLock;
use serde::Serialize;
use std::os::raw::{c_int, c_void};
use std::sync::{Arc, Weak};
use tracing::debug;

lazy_static::lazy_static! {
    /// The process-wide pool, constructed on first use.
    static ref GLOBAL_POOL: SlotPool = SlotPool::new();
}

/// Fixed-capacity pool of trampoline slots
///
/// The pool is necessarily process-wide shared state: a context-free entry
/// point has no way to carry a pool reference, so each trampoline reaches
/// the binding table through [`SlotPool::global`]. Library code should still
/// take the pool as an explicit parameter instead of reaching for the global
/// directly.
pub struct SlotPool {
    slots: Vec<RwLock<Slot>>,
}

impl SlotPool {
    fn new() -> Self {
        let slots = (0..POOL_CAPACITY)
            .map(|_| RwLock::new(Slot::new()))
            .collect();
        Self { slots }
    }

    /// The process-wide slot pool
    pub fn global() -> &'static SlotPool {
        &GLOBAL_POOL
    }

    /// Number of slots in this pool
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Bind the lowest-index free slot to a (comparator, method) pair
    ///
    /// Returns the slot index together with the slot's fixed entry point.
    /// The pool keeps only a weak reference: the comparator stays owned by
    /// the caller and must outlive the binding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] when every slot is bound. This is a
    /// normal outcome under load; the caller decides whether to retry, shed
    /// work, or fail the sort.
    pub fn acquire<C>(
        &self,
        comparator: &Arc<C>,
        method: CompareMethod<C>,
    ) -> Result<(SlotIndex, CompareFn)>
    where
        C: Send + Sync + 'static,
    {
        for (index, slot) in self.slots.iter().enumerate() {
            let mut slot = slot.write();
            if slot.is_bound() {
                continue;
            }
            slot.bind(erase(Arc::downgrade(comparator), method));
            drop(slot);

            debug!("Bound trampoline slot {}", index);
            metrics::counter!("springboard_acquires_total").increment(1);
            metrics::gauge!("springboard_slots_bound").increment(1.0);
            return Ok((SlotIndex::new(index), ENTRY_POINTS[index]));
        }

        debug!("Pool exhausted: all {} slots bound", self.capacity());
        metrics::counter!("springboard_exhausted_total").increment(1);
        Err(Error::Exhausted {
            capacity: self.capacity(),
        })
    }

    /// Clear the binding of a slot, making it available again
    ///
    /// Releasing an already-unbound slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlot`] if the index is out of range.
    pub fn release(&self, index: SlotIndex) -> Result<()> {
        let slot = self.slots.get(index.index()).ok_or(Error::InvalidSlot {
            index: index.index(),
            capacity: self.capacity(),
        })?;

        if slot.write().clear() {
            debug!("Released trampoline slot {}", index.index());
            metrics::counter!("springboard_releases_total").increment(1);
            metrics::gauge!("springboard_slots_bound").decrement(1.0);
        }
        Ok(())
    }

    /// Forward a trampoline invocation to its slot's bound comparator method
    ///
    /// # Panics
    ///
    /// Panics when the slot is unbound or its comparator has been dropped.
    /// Both are contract violations (invoking a released callback), not
    /// recoverable runtime conditions.
    pub(crate) fn dispatch(&self, index: usize, a: *const c_void, b: *const c_void) -> c_int {
        let slot = self.slots[index].read();
        slot.invoke(a, b)
            .unwrap_or_else(|| panic!("trampoline for unbound slot {} invoked", index))
    }

    /// Snapshot of pool occupancy
    pub fn stats(&self) -> PoolStats {
        let bound = self
            .slots
            .iter()
            .filter(|slot| slot.read().is_bound())
            .count();
        PoolStats {
            capacity: self.capacity(),
            bound,
            free: self.capacity() - bound,
        }
    }
}

/// Erase a typed (comparator, method) pair into a slot binding
fn erase<C>(comparator: Weak<C>, method: CompareMethod<C>) -> SlotBinding
where
    C: Send + Sync + 'static,
{
    Box::new(move |a, b| {
        let comparator = comparator
            .upgrade()
            .expect("comparator dropped while its trampoline slot was still bound");
        method(&comparator, a, b)
    })
}

/// Occupancy statistics for the slot pool
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PoolStats {
    /// Total number of slots
    pub capacity: usize,
    /// Slots currently bound
    pub bound: usize,
    /// Slots available for acquisition
    pub free: usize,
}
