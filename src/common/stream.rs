// SPDX-License-Identifier: MIT

//! Lazy, single-pass symbol streams.
//!
//! Matchers consume their input as a forward-only stream: one symbol per
//! pull, in arrival order, until exhaustion. [`SymbolStream`] owns a finite
//! symbol sequence and yields it one symbol at a time, optionally buffering
//! internally in fixed-size chunks and optionally sleeping before each
//! yielded symbol to simulate real-time arrival.
//!
//! A stream is not rewindable. Replaying the same logical text requires a
//! fresh instance built from the same source sequence. The delay and the
//! chunk size are pure delivery details: the yielded symbol sequence is
//! identical for every configuration, so neither can affect comparison
//! counts or match sets, only wall-clock timing.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

/// Delivery configuration for a [`SymbolStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Number of symbols pulled into the internal buffer per refill.
    /// A value of `0` is treated as `1`.
    pub chunk_size: usize,
    /// Blocking sleep applied before each yielded symbol. Demonstration
    /// only; must stay zero for correctness or performance measurement.
    pub delay: Duration,
}

impl StreamConfig {
    /// Default delivery: one symbol per chunk, no delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_size: 1,
            delay: Duration::ZERO,
        }
    }

    /// Chunked delivery with no delay.
    #[must_use]
    pub const fn chunked(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            delay: Duration::ZERO,
        }
    }

    /// Returns this configuration with the given inter-symbol delay.
    #[must_use]
    pub const fn with_delay(self, delay: Duration) -> Self {
        Self {
            chunk_size: self.chunk_size,
            delay,
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A finite, forward-only symbol stream.
///
/// Implements [`Iterator`]; each `next()` either yields the next symbol in
/// original order or signals end-of-stream. There is no error condition for
/// a well-formed finite input and no way to rewind.
#[derive(Debug)]
pub struct SymbolStream<T> {
    source: std::vec::IntoIter<T>,
    buffer: VecDeque<T>,
    config: StreamConfig,
}

impl<T> SymbolStream<T> {
    /// Creates a stream over `symbols` with the default configuration.
    #[must_use]
    pub fn new(symbols: Vec<T>) -> Self {
        Self::with_config(symbols, StreamConfig::new())
    }

    /// Creates a stream over `symbols` with an explicit configuration.
    #[must_use]
    pub fn with_config(symbols: Vec<T>, config: StreamConfig) -> Self {
        Self {
            source: symbols.into_iter(),
            buffer: VecDeque::with_capacity(config.chunk_size.max(1)),
            config,
        }
    }
}

impl SymbolStream<char> {
    /// Creates a character stream over `text` with the default
    /// configuration.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().collect())
    }
}

impl<T> Iterator for SymbolStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            let chunk = self.config.chunk_size.max(1);
            self.buffer.extend(self.source.by_ref().take(chunk));
        }
        let symbol = self.buffer.pop_front()?;
        if !self.config.delay.is_zero() {
            thread::sleep(self.config.delay);
        }
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len() + self.source.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for SymbolStream<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_in_order() {
        let stream = SymbolStream::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(stream.collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_source() {
        let mut stream = SymbolStream::<char>::new(Vec::new());
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None); // fused after exhaustion
    }

    #[test]
    fn test_from_text() {
        let stream = SymbolStream::from_text("abca");
        assert_eq!(stream.collect::<String>(), "abca");
    }

    #[test]
    fn test_chunk_size_does_not_change_sequence() {
        let base: Vec<u32> = (0..25).collect();
        for chunk_size in [0, 1, 2, 3, 7, 24, 25, 64] {
            let stream =
                SymbolStream::with_config(base.clone(), StreamConfig::chunked(chunk_size));
            assert_eq!(
                stream.collect::<Vec<_>>(),
                base,
                "chunk_size {chunk_size} changed the yielded sequence"
            );
        }
    }

    #[test]
    fn test_delay_does_not_change_sequence() {
        let config = StreamConfig::new().with_delay(Duration::from_micros(100));
        let stream = SymbolStream::with_config(vec!['x', 'y', 'z'], config);
        assert_eq!(stream.collect::<Vec<_>>(), vec!['x', 'y', 'z']);
    }

    #[test]
    fn test_zero_chunk_size_normalized() {
        let stream = SymbolStream::with_config(vec![1, 2, 3], StreamConfig::chunked(0));
        assert_eq!(stream.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_size_hint_exact() {
        let mut stream =
            SymbolStream::with_config((0..10).collect(), StreamConfig::chunked(4));
        assert_eq!(stream.len(), 10);
        stream.next();
        // one yielded, three still buffered from the first chunk
        assert_eq!(stream.len(), 9);
        assert_eq!(stream.by_ref().count(), 9);
    }

    #[test]
    fn test_default_config() {
        let config = StreamConfig::default();
        assert_eq!(config.chunk_size, 1);
        assert_eq!(config.delay, Duration::ZERO);
    }
}
