// SPDX-License-Identifier: MIT

//! Synthetic sequence generation for matcher evaluation.
//!
//! Real flow corpora are small and skewed, while evaluation sweeps need
//! larger and length-controlled inputs. Three generators cover that:
//! minority oversampling to a target corpus size, exact-length tiling,
//! and shuffled-chunk augmentation. All randomness flows through a
//! caller-supplied [`Rng`], so tests and reproductions seed it.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

/// Error returned when a generator precondition fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateError {
    /// Output was requested from an empty source corpus or sequence.
    EmptySource,
    /// No target lengths were supplied to choose from.
    NoTargetLengths,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource => write!(f, "cannot generate from an empty source"),
            Self::NoTargetLengths => write!(f, "no target lengths to choose from"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Oversamples `sequences` to `target_size` elements by appending
/// uniformly chosen duplicates.
///
/// The originals are preserved, in order, as a prefix of the result. A
/// `target_size` no larger than the corpus returns the corpus unchanged;
/// oversampling never truncates.
///
/// # Errors
///
/// Returns [`GenerateError::EmptySource`] if `sequences` is empty.
pub fn oversample<R: Rng + ?Sized>(
    rng: &mut R,
    sequences: &[String],
    target_size: usize,
) -> Result<Vec<String>, GenerateError> {
    if sequences.is_empty() {
        return Err(GenerateError::EmptySource);
    }
    let mut corpus = sequences.to_vec();
    while corpus.len() < target_size {
        let pick = rng.random_range(0..sequences.len());
        corpus.push(sequences[pick].clone());
    }
    Ok(corpus)
}

/// Tiles `seq` to exactly `target_len` symbols: whole repetitions
/// followed by a prefix of the next one.
///
/// # Errors
///
/// Returns [`GenerateError::EmptySource`] if `seq` is empty and
/// `target_len` is nonzero.
pub fn tile_to_length(seq: &str, target_len: usize) -> Result<String, GenerateError> {
    if target_len == 0 {
        return Ok(String::new());
    }
    let symbols: Vec<char> = seq.chars().collect();
    if symbols.is_empty() {
        return Err(GenerateError::EmptySource);
    }
    Ok(symbols.iter().cycle().take(target_len).collect())
}

/// Tiles each sequence of `corpus` to a length chosen uniformly from
/// `target_lengths`.
///
/// # Errors
///
/// Returns [`GenerateError::NoTargetLengths`] if `target_lengths` is
/// empty, or [`GenerateError::EmptySource`] if any corpus sequence is
/// empty while its chosen length is nonzero.
pub fn variable_length_corpus<R: Rng + ?Sized>(
    rng: &mut R,
    corpus: &[String],
    target_lengths: &[usize],
) -> Result<Vec<String>, GenerateError> {
    if target_lengths.is_empty() {
        return Err(GenerateError::NoTargetLengths);
    }
    corpus
        .iter()
        .map(|seq| {
            let len = target_lengths[rng.random_range(0..target_lengths.len())];
            tile_to_length(seq, len)
        })
        .collect()
}

/// Grows `seq` to exactly `target_len` symbols by repeatedly appending
/// shuffled copies of its symbols, truncating the final copy.
///
/// Each full copy preserves the source symbol multiset, so symbol
/// frequencies survive augmentation while local ordering varies.
///
/// # Errors
///
/// Returns [`GenerateError::EmptySource`] if `seq` is empty and
/// `target_len` is nonzero.
pub fn augment<R: Rng + ?Sized>(
    rng: &mut R,
    seq: &str,
    target_len: usize,
) -> Result<String, GenerateError> {
    if target_len == 0 {
        return Ok(String::new());
    }
    let symbols: Vec<char> = seq.chars().collect();
    if symbols.is_empty() {
        return Err(GenerateError::EmptySource);
    }
    let mut out = Vec::with_capacity(target_len + symbols.len());
    while out.len() < target_len {
        let mut copy = symbols.clone();
        copy.shuffle(rng);
        out.extend(copy);
    }
    out.truncate(target_len);
    Ok(out.into_iter().collect())
}
