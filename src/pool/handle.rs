//! Scoped adapter handles
//!
//! A [`CallbackHandle`] owns the binding of exactly one slot for its
//! lifetime and releases it on drop, on every exit path including
//! unwinding. Handles are move-only: copying one would leave two owners
//! racing to release the same slot.

use super::allocator::SlotPool;
use super::slot::SlotIndex;
use super::trampoline::CompareFn;
use crate::comparator::CompareMethod;
use crate::error::Result;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Move-only owner of one bound trampoline slot
///
/// Produced by [`CallbackHandle::bind`]; a constructed handle is always
/// usable, since exhaustion surfaces as an error at bind time instead of an
/// invalid-handle state.
pub struct CallbackHandle {
    pool: &'static SlotPool,
    slot: SlotIndex,
    entry: CompareFn,
}

impl CallbackHandle {
    /// Acquire a slot and bind it to `method` on `comparator`
    ///
    /// The comparator stays owned by the caller and must outlive the handle;
    /// the slot holds only a weak reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`](crate::error::Error::Exhausted) when the
    /// pool has no free slot. The caller may retry after another handle is
    /// released.
    ///
    /// # Examples
    ///
    /// ```
    /// use springboard::{CallbackHandle, OrderComparator, SlotPool, SortDirection};
    /// use std::sync::Arc;
    ///
    /// let comparator = Arc::new(OrderComparator::new(SortDirection::Ascending));
    /// let handle = CallbackHandle::bind(
    ///     SlotPool::global(),
    ///     &comparator,
    ///     OrderComparator::compare_i32,
    /// )?;
    ///
    /// let mut values = vec![3, 1, 2];
    /// springboard::sort_by_callback(&mut values, handle.entry_point());
    /// assert_eq!(values, vec![1, 2, 3]);
    /// # Ok::<(), springboard::error::Error>(())
    /// ```
    pub fn bind<C>(
        pool: &'static SlotPool,
        comparator: &Arc<C>,
        method: CompareMethod<C>,
    ) -> Result<Self>
    where
        C: Send + Sync + 'static,
    {
        let (slot, entry) = pool.acquire(comparator, method)?;
        Ok(Self { pool, slot, entry })
    }

    /// The context-free function pointer for this binding
    ///
    /// Valid only while the handle is alive; invoking the pointer after the
    /// handle is dropped is a contract violation.
    pub fn entry_point(&self) -> CompareFn {
        self.entry
    }

    /// Index of the slot this handle owns
    pub fn slot_index(&self) -> SlotIndex {
        self.slot
    }

    /// Release the slot before end of scope
    ///
    /// Equivalent to dropping the handle.
    pub fn release(self) {}
}

impl fmt::Debug for CallbackHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackHandle")
            .field("slot", &self.slot)
            .field("entry", &(self.entry as usize as *const ()))
            .finish()
    }
}

impl Drop for CallbackHandle {
    fn drop(&mut self) {
        if let Err(err) = self.pool.release(self.slot) {
            warn!("Failed to release {}: {}", self.slot, err);
        }
    }
}
