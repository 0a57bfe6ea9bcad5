// SPDX-License-Identifier: MIT

//! Observer hooks for matcher runs.
//!
//! Matchers accept an optional observer that is notified of consumed
//! symbols, automaton state transitions, and confirmed matches. Observer
//! calls sit outside the comparison logic: attaching one never changes
//! comparison counts or the match set.

use std::fmt;

/// Callback hook invoked by matchers as a run progresses.
///
/// Every method has an empty default body, so implementors override only
/// the events they care about.
pub trait MatchObserver<T> {
    /// Called once per consumed stream symbol, before it is matched.
    fn on_symbol(&mut self, position: usize, symbol: &T) {
        let _ = (position, symbol);
    }

    /// Called after the automaton state settles for a consumed symbol
    /// (including the overlap reset after a match). The sliding-window
    /// matcher has no state and emits no transitions.
    fn on_transition(&mut self, position: usize, state: usize) {
        let _ = (position, state);
    }

    /// Called when a full occurrence is confirmed starting at `start`.
    fn on_match(&mut self, start: usize) {
        let _ = start;
    }
}

/// Observer that ignores every event. The default for plain matcher calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopObserver;

impl<T> MatchObserver<T> for NopObserver {}

/// Observer that forwards events to the [`log`] facade: symbols and
/// transitions at trace level, matches at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<T: fmt::Debug> MatchObserver<T> for LogObserver {
    fn on_symbol(&mut self, position: usize, symbol: &T) {
        log::trace!("position {position}: consumed {symbol:?}");
    }

    fn on_transition(&mut self, position: usize, state: usize) {
        log::trace!("position {position}: automaton state {state}");
    }

    fn on_match(&mut self, start: usize) {
        log::debug!("match at position {start}");
    }
}
