// SPDX-License-Identifier: MIT

//! Failure-function (LPS table) construction.
//!
//! `lps[i]` is the length of the longest proper prefix of
//! `pattern[0..=i]` that is also a suffix of it. The automaton matcher
//! uses the table to fall back on a mismatch without re-reading consumed
//! stream symbols. Invariants: `lps[0] == 0` and `0 <= lps[i] <= i`.

/// Builds the LPS table for `pattern`.
///
/// Returns an empty table for an empty pattern.
#[must_use]
pub fn failure_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    failure_table_counting(pattern).0
}

/// Builds the LPS table and reports the symbol comparisons spent on it.
///
/// Every comparison in the construction loop counts, including ones that
/// only trigger a fallback without producing a table entry. Total
/// comparisons are bounded by `2m`.
#[must_use]
pub fn failure_table_counting<T: PartialEq>(pattern: &[T]) -> (Vec<usize>, u64) {
    let m = pattern.len();
    if m == 0 {
        return (Vec::new(), 0);
    }

    let mut lps = vec![0_usize; m];
    let mut length = 0; // longest prefix-suffix matched so far
    let mut i = 1;
    let mut comparisons = 0_u64;

    while i < m {
        comparisons += 1;
        if pattern[i] == pattern[length] {
            length += 1;
            lps[i] = length;
            i += 1;
        } else if length != 0 {
            length = lps[length - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    (lps, comparisons)
}
