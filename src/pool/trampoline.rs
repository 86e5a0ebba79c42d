//! Statically generated trampoline entry points
//!
//! One `extern "C"` function per slot, generated at compile time with the
//! slot index baked into the function body. A trampoline carries no state of
//! its own; it reaches the current binding of its slot through the global
//! pool. No runtime code generation is involved.

use super::allocator::SlotPool;
use super::POOL_CAPACITY;
use std::os::raw::{c_int, c_void};

/// Context-free comparison signature expected by C-style sort routines
///
/// Matches the classic `qsort` contract: negative if the first element
/// orders before the second, positive if after, zero if equivalent.
pub type CompareFn = extern "C" fn(*const c_void, *const c_void) -> c_int;

macro_rules! entry_points {
    ($($index:literal),+ $(,)?) => {
        /// Fixed entry-point table, one distinct function per slot index.
        /// The array type pins the count to [`POOL_CAPACITY`].
        pub(crate) const ENTRY_POINTS: [CompareFn; POOL_CAPACITY] = [
            $(
                {
                    extern "C" fn trampoline(a: *const c_void, b: *const c_void) -> c_int {
                        SlotPool::global().dispatch($index, a, b)
                    }
                    trampoline as CompareFn
                }
            ),+
        ];
    };
}

// Must enumerate exactly 0..POOL_CAPACITY.
entry_points!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);
