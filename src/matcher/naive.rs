// SPDX-License-Identifier: MIT

//! Naive sliding-window matcher.
//!
//! Keeps the last `m` consumed symbols in a bounded FIFO window and
//! re-compares the full window against the pattern every time it is full.
//! Worst case is `O(n·m)` symbol comparisons on repetitive alphabets; that
//! quadratic blowup relative to the automaton matcher is the property the
//! comparison sweeps exist to measure, not a defect.

use std::collections::VecDeque;

use crate::common::trace::{MatchObserver, NopObserver};
use crate::matcher::MatchOutcome;

/// Runs the sliding-window matcher over `stream`.
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

/// Runs the sliding-window matcher, reporting progress to `observer`.
///
/// Consumes one symbol at a time, evicting the oldest window symbol once
/// the window holds `m`. A full window is compared against the pattern
/// position by position, stopping at the first mismatch; every comparison
/// performed up to and including the mismatch is counted. A full match is
/// recorded at `position - m + 1`.
///
/// An empty pattern returns an empty outcome without consuming the stream.
pub fn match_stream_observed<T, I, O>(pattern: &[T], stream: I, observer: &mut O) -> MatchOutcome
where
    T: PartialEq,
    I: Iterator<Item = T>,
    O: MatchObserver<T> + ?Sized,
{
    let m = pattern.len();
    if m == 0 {
        return MatchOutcome::empty();
    }

    let mut window: VecDeque<T> = VecDeque::with_capacity(m);
    let mut matches = Vec::new();
    let mut comparisons = 0_u64;

    for (position, symbol) in stream.enumerate() {
        observer.on_symbol(position, &symbol);
        if window.len() == m {
            window.pop_front();
        }
        window.push_back(symbol);
        if window.len() < m {
            continue;
        }

        let mut matched = true;
        for (seen, expected) in window.iter().zip(pattern) {
            comparisons += 1;
            if seen != expected {
                matched = false;
                break;
            }
        }
        if matched {
            let start = position + 1 - m;
            matches.push(start);
            observer.on_match(start);
        }
    }

    MatchOutcome {
        matches,
        comparisons,
    }
}
