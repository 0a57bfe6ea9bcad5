// SPDX-License-Identifier: MIT

//! # `flow_patterns` — Streaming substring matching for behavioral flow sequences
//!
//! Network-flow activity is encoded as sequences of categorical symbols
//! (daily flow-volume buckets, remote-ASN identifiers), and a suspected
//! compromise window becomes a fixed pattern searched for inside a long
//! symbol stream. This crate provides the online matching core together
//! with the encoding, synthetic-data, and reporting utilities around it.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`common::stream`] | Lazy single-pass symbol streams with optional chunking and delay |
//! | [`common::trace`] | Observer hooks for matcher progress |
//! | [`matcher`] | Naive sliding-window and KMP automaton matchers |
//! | [`instrument`] | Timed, comparison-counted matcher runs |
//! | [`encode`] | Flow-volume bucketing and ASN alphabet mapping |
//! | [`generate`] | Synthetic sequence oversampling and augmentation |
//! | [`sweep`] | Batch naive-vs-automaton comparison records |
//!
//! ## Example
//!
//! ```
//! use flow_patterns::common::stream::SymbolStream;
//! use flow_patterns::instrument;
//! use flow_patterns::matcher::Algorithm;
//!
//! let pattern: Vec<char> = "xxx".chars().collect();
//! let stream = SymbolStream::from_text("hxxxxxxm");
//! let report = instrument::run(Algorithm::Automaton, &pattern, stream);
//!
//! assert_eq!(report.matches, vec![1, 2, 3, 4]);
//! assert!(report.comparisons > 0);
//! ```
//!
//! Both matchers report overlapping occurrences and agree on the match set
//! for every input; they differ only in how many symbol comparisons they
//! spend finding it: `O(n·m)` worst case for the naive window against
//! `≤ 2(n + m)` for the automaton. The [`sweep`] records exist to measure
//! that difference.

pub mod common;
pub mod encode;
pub mod generate;
pub mod instrument;
pub mod matcher;
pub mod sweep;
