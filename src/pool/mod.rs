//! Trampoline slot pool
//!
//! Adapts instance comparison methods to context-free C-style function
//! pointers through a fixed table of statically generated trampolines.
//!
//! # Architecture
//!
//! ```text
//! CallbackHandle (RAII, move-only)
//!   └─→ SlotPool (process-wide, fixed capacity)
//!         ├─→ Slot 0   ← ENTRY_POINTS[0]   (extern "C" fn)
//!         ├─→ Slot 1   ← ENTRY_POINTS[1]
//!         ├─→ ...
//!         └─→ Slot 15  ← ENTRY_POINTS[15]
//!
//! sort driver calls ENTRY_POINTS[k](a, b)
//!   └─→ SlotPool::dispatch(k, a, b)
//!         └─→ bound (comparator, method) → signed ordering result
//! ```
//!
//! Each entry point is a distinct function with its slot index baked into
//! its identity at compile time; only the slot bindings are runtime-mutable.
//! Acquisition scans lowest index first and either succeeds immediately or
//! reports exhaustion; nothing in the pool blocks or waits.

pub mod allocator;
pub mod handle;
pub mod slot;
pub mod trampoline;

pub use allocator::{PoolStats, SlotPool};
pub use handle::CallbackHandle;
pub use slot::SlotIndex;
pub use trampoline::CompareFn;

/// Number of trampoline slots in the pool
///
/// Fixed at build time. Exceeding it at runtime is observable as
/// [`Error::Exhausted`](crate::error::Error::Exhausted), never a silent
/// failure.
pub const POOL_CAPACITY: usize = 16;
