//! Sort driver integration and data helpers
//!
//! The driver is the standard in-place slice sort, adapted here to the
//! context-free comparison signature so it plays the role `qsort` plays in
//! C: repeated invocations with pairs of element pointers, with no guarantee
//! about their number or order beyond a correctly ordered result.

use crate::comparator::SortDirection;
use crate::pool::CompareFn;
use std::os::raw::c_void;

/// Sort a contiguous sequence in place through a context-free comparator
///
/// `compare` receives the addresses of two elements and returns negative,
/// zero, or positive per the classic `qsort` contract.
pub fn sort_by_callback<T>(items: &mut [T], compare: CompareFn) {
    items.sort_by(|a, b| {
        let result = compare(
            a as *const T as *const c_void,
            b as *const T as *const c_void,
        );
        result.cmp(&0)
    });
}

/// Deterministic pseudo-random values for demos and tests
///
/// Plain 64-bit LCG; the same seed always yields the same sequence.
pub fn pseudo_random_values(seed: u64, count: usize) -> Vec<i32> {
    // The odd increment keeps the LCG well-defined for every seed, zero
    // included, so the seed feeds in unmodified.
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as i32
        })
        .collect()
}

/// Whether `values` are ordered according to `direction`
pub fn is_sorted(values: &[i32], direction: SortDirection) -> bool {
    values.windows(2).all(|pair| match direction {
        SortDirection::Ascending => pair[0] <= pair[1],
        SortDirection::Descending => pair[0] >= pair[1],
    })
}
