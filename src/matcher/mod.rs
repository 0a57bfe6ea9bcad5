// SPDX-License-Identifier: MIT

//! Streaming substring matchers.
//!
//! Two algorithms share one contract: consume a finite symbol stream once,
//! front to back, and report every starting position at which a fixed
//! pattern occurs, together with the exact number of symbol-equality
//! comparisons performed.
//!
//! | Algorithm | Strategy | Comparisons |
//! |-----------|----------|-------------|
//! | [`Algorithm::Naive`] | re-compare a bounded window of the last `m` symbols | `O(n·m)` worst case |
//! | [`Algorithm::Automaton`] | KMP failure-function automaton, one integer state | `≤ 2(n + m)` always |
//!
//! Both matchers find overlapping occurrences and return positions in
//! strictly increasing order; for every input they produce identical match
//! sets. [`match_stream`] selects the implementation by tag; the
//! per-algorithm modules expose the same entry points directly.

pub mod kmp;
pub mod lps;
pub mod naive;

use crate::common::trace::MatchObserver;

/// Strategy tag selecting a matcher implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Sliding-window comparison of the last `m` consumed symbols.
    Naive,
    /// KMP automaton driven by the failure table.
    Automaton,
}

impl Algorithm {
    /// Short lowercase name used in logs and sweep records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Automaton => "kmp",
        }
    }
}

/// Result of one matcher pass over a stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    /// Zero-based starting positions of every occurrence, strictly
    /// increasing, duplicates impossible by construction.
    pub matches: Vec<usize>,
    /// Symbol-equality comparisons performed during the pass. For the
    /// automaton this includes failure-table construction.
    pub comparisons: u64,
}

impl MatchOutcome {
    /// Outcome with no matches and no comparisons.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            matches: Vec::new(),
            comparisons: 0,
        }
    }
}

/// Runs the selected matcher over `stream`.
#[must_use]
pub fn match_stream<T, I>(algorithm: Algorithm, pattern: &[T], stream: I) -> MatchOutcome
where
    T: PartialEq,
    I: Iterator<Item = T>,
{
    match algorithm {
        Algorithm::Naive => naive::match_stream(pattern, stream),
        Algorithm::Automaton => kmp::match_stream(pattern, stream),
    }
}

/// Runs the selected matcher, reporting progress to `observer`.
pub fn match_stream_observed<T, I, O>(
    algorithm: Algorithm,
    pattern: &[T],
    stream: I,
    observer: &mut O,
) -> MatchOutcome
where
    T: PartialEq,
    I: Iterator<Item = T>,
    O: MatchObserver<T> + ?Sized,
{
    match algorithm {
        Algorithm::Naive => naive::match_stream_observed(pattern, stream, observer),
        Algorithm::Automaton => kmp::match_stream_observed(pattern, stream, observer),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::common::stream::SymbolStream;
    use proptest::prelude::*;

    /// Positions of every occurrence, computed offline over the full text.
    fn reference_matches(pattern: &[u8], text: &[u8]) -> Vec<usize> {
        if pattern.is_empty() || text.len() < pattern.len() {
            return Vec::new();
        }
        text.windows(pattern.len())
            .enumerate()
            .filter_map(|(i, w)| (w == pattern).then_some(i))
            .collect()
    }

    fn symbol() -> impl Strategy<Value = u8> {
        // Small alphabet to force overlaps and fallbacks.
        prop::sample::select(vec![b'a', b'b', b'c'])
    }

    proptest! {
        #[test]
        fn matchers_agree_with_reference(
            pattern in prop::collection::vec(symbol(), 0..8),
            text in prop::collection::vec(symbol(), 0..150),
        ) {
            let expected = reference_matches(&pattern, &text);
            let naive = match_stream(
                Algorithm::Naive, &pattern, SymbolStream::new(text.clone()));
            let kmp = match_stream(
                Algorithm::Automaton, &pattern, SymbolStream::new(text.clone()));
            prop_assert_eq!(&naive.matches, &expected);
            prop_assert_eq!(&kmp.matches, &expected);
        }

        #[test]
        fn comparison_bounds_hold(
            pattern in prop::collection::vec(symbol(), 0..8),
            text in prop::collection::vec(symbol(), 0..150),
        ) {
            let n = text.len() as u64;
            let m = pattern.len() as u64;
            let naive = match_stream(
                Algorithm::Naive, &pattern, SymbolStream::new(text.clone()));
            let kmp = match_stream(
                Algorithm::Automaton, &pattern, SymbolStream::new(text.clone()));
            prop_assert!(naive.comparisons <= n * m);
            prop_assert!(kmp.comparisons <= 2 * (n + m));
        }

        #[test]
        fn match_positions_strictly_increase(
            pattern in prop::collection::vec(symbol(), 1..6),
            text in prop::collection::vec(symbol(), 0..150),
        ) {
            for algorithm in [Algorithm::Naive, Algorithm::Automaton] {
                let outcome = match_stream(
                    algorithm, &pattern, SymbolStream::new(text.clone()));
                prop_assert!(outcome.matches.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
