//! Slot state for the trampoline pool

use serde::Serialize;
use std::fmt;
use std::os::raw::{c_int, c_void};

/// Index of a slot in the trampoline pool
///
/// Handed out by the pool on acquisition. The entry-point address associated
/// with an index never changes for the lifetime of the process; only the
/// slot's binding does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SlotIndex(usize);

impl SlotIndex {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this slot in the pool (0-based)
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Type-erased (comparator, method) pair stored in a bound slot
pub(crate) type SlotBinding = Box<dyn Fn(*const c_void, *const c_void) -> c_int + Send + Sync>;

/// Runtime-mutable state of one trampoline slot
///
/// Holds at most one binding at a time. The matching entry-point function
/// lives in the static trampoline table, not here.
pub(crate) struct Slot {
    binding: Option<SlotBinding>,
}

impl Slot {
    /// Create an unbound slot
    pub fn new() -> Self {
        Self { binding: None }
    }

    /// Whether a binding is currently installed
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Install a binding; the slot must be unbound
    pub fn bind(&mut self, binding: SlotBinding) {
        debug_assert!(!self.is_bound(), "rebinding a bound slot");
        self.binding = Some(binding);
    }

    /// Drop the binding if present; returns whether one was present
    pub fn clear(&mut self) -> bool {
        self.binding.take().is_some()
    }

    /// Forward to the bound comparator method, or `None` when unbound
    pub fn invoke(&self, a: *const c_void, b: *const c_void) -> Option<c_int> {
        self.binding.as_ref().map(|binding| binding(a, b))
    }
}
