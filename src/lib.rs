// Springboard - bounded callback-adaptation pool
// Hands out context-free C-style function pointers that dispatch to
// instance comparison methods through a fixed table of trampolines.

#![warn(rust_2018_idioms)]

pub mod comparator;
pub mod pool;
pub mod sort;

// Re-exports for convenience
pub use comparator::{CompareMethod, OrderComparator, SortDirection};
pub use pool::{CallbackHandle, CompareFn, PoolStats, SlotIndex, SlotPool, POOL_CAPACITY};
pub use sort::{is_sorted, pseudo_random_values, sort_by_callback};

/// Springboard error types
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum Error {
        /// Every trampoline slot is currently bound. A normal outcome under
        /// load; the caller may retry once another handle is released.
        #[error("Pool exhausted: all {capacity} trampoline slots are bound")]
        Exhausted {
            /// Fixed capacity of the pool
            capacity: usize,
        },

        /// A slot index outside the pool was passed to `release`.
        #[error("Invalid slot index {index} (pool capacity is {capacity})")]
        InvalidSlot {
            /// Offending index
            index: usize,
            /// Fixed capacity of the pool
            capacity: usize,
        },
    }

    pub type Result<T> = std::result::Result<T, Error>;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serializes unit tests that mutate the process-wide slot pool.
#[cfg(test)]
pub(crate) fn pool_test_lock() -> parking_lot::MutexGuard<'static, ()> {
    static LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());
    LOCK.lock()
}
