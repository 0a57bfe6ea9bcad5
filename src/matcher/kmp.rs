// SPDX-License-Identifier: MIT

//! KMP automaton matcher.
//!
//! Maintains a single integer state `j` in `0..=m`, the length of the
//! pattern prefix currently matched against the trailing suffix of
//! consumed symbols. Each stream symbol is processed exactly once at the
//! outer level; on a mismatch the state falls back through the LPS table
//! instead of re-reading consumed symbols, so the stream's single-pass
//! contract holds by construction. Total comparisons, failure-table
//! construction included, are bounded by `2(n + m)` regardless of how
//! repetitive the alphabet is.

use crate::common::trace::{MatchObserver, NopObserver};
use crate::matcher::lps::failure_table_counting;
use crate::matcher::MatchOutcome;

/// Runs the automaton matcher over `stream`.
///
/// Equivalent to [`match_stream_observed`] with a no-op observer.
#[must_use]
pub fn match_stream<T, I>(pattern: &[T], stream: I) -> MatchOutcome
where
    T: PartialEq,
    I: Iterator<Item = T>,
{
    match_stream_observed(pattern, stream, &mut NopObserver)
}

/// Runs the automaton matcher, reporting progress to `observer`.
///
/// Per consumed symbol `c` in state `j`:
///
/// 1. while `j > 0` and `c != pattern[j]`, fall back to `j = lps[j - 1]`
///    (each test counts as one comparison);
/// 2. test `c == pattern[j]` once (counts as one comparison) and advance
///    on success;
/// 3. in state `m`, record a match at `position - m + 1` and reset to
///    `lps[m - 1]` so overlapping occurrences are found.
///
/// The failure table is built once per run, when the first symbol arrives;
/// its comparison cost is summed into the reported total. An empty stream
/// therefore reports zero comparisons, and an empty pattern returns an
/// empty outcome without consuming the stream at all.
pub fn match_stream_observed<T, I, O>(
    pattern: &[T],
    mut stream: I,
    observer: &mut O,
) -> MatchOutcome
where
    T: PartialEq,
    I: Iterator<Item = T>,
    O: MatchObserver<T> + ?Sized,
{
    let m = pattern.len();
    if m == 0 {
        return MatchOutcome::empty();
    }
    let Some(first) = stream.next() else {
        return MatchOutcome::empty();
    };

    let (lps, mut comparisons) = failure_table_counting(pattern);
    let mut matches = Vec::new();
    let mut state = 0_usize;

    for (position, symbol) in std::iter::once(first).chain(stream).enumerate() {
        observer.on_symbol(position, &symbol);

        while state > 0 && symbol != pattern[state] {
            comparisons += 1;
            state = lps[state - 1];
        }
        comparisons += 1;
        if symbol == pattern[state] {
            state += 1;
        }
        if state == m {
            let start = position + 1 - m;
            matches.push(start);
            observer.on_match(start);
            state = lps[m - 1];
        }
        observer.on_transition(position, state);
    }

    MatchOutcome {
        matches,
        comparisons,
    }
}
