//! Stateful comparators and method selectors
//!
//! A comparator owns its ordering policy as per-instance state. The pool
//! binds a comparator together with a *method selector*: a plain function
//! naming which comparison method to invoke on the bound instance.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::os::raw::{c_int, c_void};

/// Selects which comparison method to invoke on a bound comparator
///
/// The selector receives the comparator instance and the two opaque element
/// pointers handed in by the sort driver. [`OrderComparator::compare_i32`]
/// and [`OrderComparator::compare_f64`] both have this shape.
pub type CompareMethod<C> = fn(&C, *const c_void, *const c_void) -> c_int;

/// Ordering direction for [`OrderComparator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest value first
    Ascending,
    /// Largest value first
    Descending,
}

/// A comparator whose ordering direction is per-instance state
///
/// The methods take opaque element pointers so they fit the context-free
/// comparison contract. Callers must pass pointers to valid values of the
/// method's element type.
#[derive(Debug, Clone)]
pub struct OrderComparator {
    direction: SortDirection,
}

impl OrderComparator {
    /// Create a comparator with the given direction
    pub fn new(direction: SortDirection) -> Self {
        Self { direction }
    }

    /// The configured direction
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compare two `i32` values behind opaque pointers
    ///
    /// Negative if `a` orders before `b`, positive if after, zero if
    /// equivalent. Both pointers must reference valid `i32` values.
    pub fn compare_i32(&self, a: *const c_void, b: *const c_void) -> c_int {
        let (a, b) = unsafe { (*(a as *const i32), *(b as *const i32)) };
        self.directed(a.cmp(&b))
    }

    /// Compare two `f64` values behind opaque pointers, using total order
    ///
    /// Both pointers must reference valid `f64` values.
    pub fn compare_f64(&self, a: *const c_void, b: *const c_void) -> c_int {
        let (a, b) = unsafe { (*(a as *const f64), *(b as *const f64)) };
        self.directed(a.total_cmp(&b))
    }

    fn directed(&self, ordering: Ordering) -> c_int {
        let signed = ordering as c_int;
        match self.direction {
            SortDirection::Ascending => signed,
            SortDirection::Descending => -signed,
        }
    }
}
