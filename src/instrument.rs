// SPDX-License-Identifier: MIT

//! Timed, comparison-counted matcher runs.
//!
//! The collector drives exactly one full pass of a stream through the
//! selected matcher, measures wall-clock duration around the call with a
//! monotonic clock, and packages the uniform result record. It performs no
//! algorithmic work itself and never alters match results relative to
//! calling the matcher directly.

use std::time::{Duration, Instant};

use crate::common::trace::MatchObserver;
use crate::matcher::{self, Algorithm, MatchOutcome};

/// Uniform result record for one matcher run.
///
/// Produced fresh per run and owned by the caller. Two runs of the same
/// `(pattern, text)` pair with fresh zero-delay streams are identical
/// except for [`elapsed`](Self::elapsed).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RunReport {
    /// Zero-based starting positions of every occurrence, strictly
    /// increasing.
    pub matches: Vec<usize>,
    /// Total symbol comparisons performed (for the automaton, failure
    /// table construction included).
    pub comparisons: u64,
    /// Wall-clock duration of the pass, measured with a monotonic clock.
    pub elapsed: Duration,
}

impl RunReport {
    fn from_outcome(outcome: MatchOutcome, elapsed: Duration) -> Self {
        Self {
            matches: outcome.matches,
            comparisons: outcome.comparisons,
            elapsed,
        }
    }
}

/// Runs the selected matcher over `stream` and reports matches,
/// comparisons, and elapsed wall-clock time.
#[must_use]
pub fn run<T, I>(algorithm: Algorithm, pattern: &[T], stream: I) -> RunReport
where
    T: PartialEq,
    I: Iterator<Item = T>,
{
    let started = Instant::now();
    let outcome = matcher::match_stream(algorithm, pattern, stream);
    let elapsed = started.elapsed();
    log::debug!(
        "{} run: {} matches, {} comparisons in {elapsed:?}",
        algorithm.name(),
        outcome.matches.len(),
        outcome.comparisons,
    );
    RunReport::from_outcome(outcome, elapsed)
}

/// Same as [`run`] with an observer attached.
pub fn run_observed<T, I, O>(
    algorithm: Algorithm,
    pattern: &[T],
    stream: I,
    observer: &mut O,
) -> RunReport
where
    T: PartialEq,
    I: Iterator<Item = T>,
    O: MatchObserver<T> + ?Sized,
{
    let started = Instant::now();
    let outcome = matcher::match_stream_observed(algorithm, pattern, stream, observer);
    let elapsed = started.elapsed();
    log::debug!(
        "{} run (observed): {} matches, {} comparisons in {elapsed:?}",
        algorithm.name(),
        outcome.matches.len(),
        outcome.comparisons,
    );
    RunReport::from_outcome(outcome, elapsed)
}
