// SPDX-License-Identifier: MIT

//! Batch naive-vs-automaton comparison sweeps.
//!
//! A sweep runs both matchers over every `(pattern, target)` pair and
//! emits one tabular record per pair: lengths, match counts, comparison
//! counts, elapsed seconds, and the derived speedup/reduction ratios.
//! Records serialize (serde) for downstream CSV/JSON reporting.

use serde::Serialize;

use crate::common::stream::SymbolStream;
use crate::instrument::{self, RunReport};
use crate::matcher::Algorithm;

/// One row of a comparison sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct SweepRecord {
    /// Identifier of the pattern's source (e.g. the compromised host).
    pub pattern_id: String,
    /// Identifier of the searched sequence's source.
    pub target_id: String,
    /// Label for the encoding the pair came from (e.g. `"flow"`, `"asn"`).
    pub data_type: String,
    /// Symbols in the searched text.
    pub text_length: usize,
    /// Symbols in the pattern.
    pub pattern_length: usize,
    /// Occurrences found by the naive matcher.
    pub naive_match_count: usize,
    /// Naive matcher wall-clock seconds.
    pub naive_time_sec: f64,
    /// Naive matcher symbol comparisons.
    pub naive_comparisons: u64,
    /// Occurrences found by the automaton matcher.
    pub kmp_match_count: usize,
    /// Automaton matcher wall-clock seconds.
    pub kmp_time_sec: f64,
    /// Automaton matcher symbol comparisons, failure table included.
    pub kmp_comparisons: u64,
    /// `naive_time_sec / kmp_time_sec` under the degenerate-ratio policy.
    pub kmp_speedup_ratio_time: f64,
    /// `naive_comparisons / kmp_comparisons` under the degenerate-ratio
    /// policy.
    pub kmp_reduction_ratio_comps: f64,
}

impl SweepRecord {
    fn build(
        pattern_id: &str,
        target_id: &str,
        data_type: &str,
        text_length: usize,
        pattern_length: usize,
        naive: &RunReport,
        kmp: &RunReport,
    ) -> Self {
        let naive_time_sec = naive.elapsed.as_secs_f64();
        let kmp_time_sec = kmp.elapsed.as_secs_f64();
        Self {
            pattern_id: pattern_id.to_string(),
            target_id: target_id.to_string(),
            data_type: data_type.to_string(),
            text_length,
            pattern_length,
            naive_match_count: naive.matches.len(),
            naive_time_sec,
            naive_comparisons: naive.comparisons,
            kmp_match_count: kmp.matches.len(),
            kmp_time_sec,
            kmp_comparisons: kmp.comparisons,
            kmp_speedup_ratio_time: ratio(naive_time_sec, kmp_time_sec),
            kmp_reduction_ratio_comps: ratio(naive.comparisons as f64, kmp.comparisons as f64),
        }
    }
}

/// Divides `numerator / denominator` under the degenerate-ratio policy:
/// `0 / 0` is defined as `1.0` and `x / 0` as `+∞` for `x > 0`.
#[must_use]
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        if numerator == 0.0 {
            1.0
        } else {
            f64::INFINITY
        }
    } else {
        numerator / denominator
    }
}

/// Runs both matchers over one `(pattern, text)` pair and builds its
/// record.
///
/// Each matcher consumes its own fresh zero-delay stream of the same
/// text, honoring the single-pass stream contract.
#[must_use]
pub fn compare_pair(
    pattern_id: &str,
    target_id: &str,
    data_type: &str,
    pattern: &str,
    text: &str,
) -> SweepRecord {
    let pattern_symbols: Vec<char> = pattern.chars().collect();
    let naive = instrument::run(
        Algorithm::Naive,
        &pattern_symbols,
        SymbolStream::from_text(text),
    );
    let kmp = instrument::run(
        Algorithm::Automaton,
        &pattern_symbols,
        SymbolStream::from_text(text),
    );
    SweepRecord::build(
        pattern_id,
        target_id,
        data_type,
        text.chars().count(),
        pattern_symbols.len(),
        &naive,
        &kmp,
    )
}

/// Runs every `(pattern, target)` pair and collects the records.
///
/// Pairs with an empty pattern or an empty text are skipped with a
/// warning; the sweep itself never fails.
#[must_use]
pub fn run_sweep(
    patterns: &[(&str, &str)],
    targets: &[(&str, &str)],
    data_type: &str,
) -> Vec<SweepRecord> {
    let mut records = Vec::with_capacity(patterns.len() * targets.len());
    for &(pattern_id, pattern) in patterns {
        if pattern.is_empty() {
            log::warn!("skipping pattern {pattern_id}: empty pattern");
            continue;
        }
        for &(target_id, text) in targets {
            if text.is_empty() {
                log::warn!("skipping target {target_id}: empty text");
                continue;
            }
            records.push(compare_pair(pattern_id, target_id, data_type, pattern, text));
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_ordinary_division() {
        assert_eq!(ratio(6.0, 3.0), 2.0);
        assert_eq!(ratio(1.0, 4.0), 0.25);
    }

    #[test]
    fn test_ratio_degenerate_policy() {
        assert_eq!(ratio(0.0, 0.0), 1.0);
        assert_eq!(ratio(5.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_compare_pair_counts() {
        let record = compare_pair("p1", "t1", "flow", "aa", "aaaa");
        assert_eq!(record.text_length, 4);
        assert_eq!(record.pattern_length, 2);
        assert_eq!(record.naive_match_count, 3);
        assert_eq!(record.kmp_match_count, 3);
        // Naive: three full windows of two comparisons. Automaton: one
        // table comparison plus one scan comparison per symbol.
        assert_eq!(record.naive_comparisons, 6);
        assert_eq!(record.kmp_comparisons, 5);
        assert_eq!(record.kmp_reduction_ratio_comps, 6.0 / 5.0);
    }

    #[test]
    fn test_compare_pair_agrees_with_matchers() {
        use crate::common::stream::SymbolStream;
        use crate::matcher::{match_stream, Algorithm};

        let pattern: Vec<char> = "xxx".chars().collect();
        let record = compare_pair("p", "t", "flow", "xxx", "hxxxxxxm");
        let naive = match_stream(Algorithm::Naive, &pattern, SymbolStream::from_text("hxxxxxxm"));
        let kmp = match_stream(
            Algorithm::Automaton,
            &pattern,
            SymbolStream::from_text("hxxxxxxm"),
        );
        assert_eq!(record.naive_match_count, naive.matches.len());
        assert_eq!(record.naive_comparisons, naive.comparisons);
        assert_eq!(record.kmp_match_count, kmp.matches.len());
        assert_eq!(record.kmp_comparisons, kmp.comparisons);
    }

    #[test]
    fn test_run_sweep_full_cross_product() {
        let patterns = [("p1", "ab"), ("p2", "ba")];
        let targets = [("t1", "abab"), ("t2", "bbbb")];
        let records = run_sweep(&patterns, &targets, "flow");
        assert_eq!(records.len(), 4);
        assert!(records
            .iter()
            .all(|r| r.data_type == "flow" && r.text_length == 4));
    }

    #[test]
    fn test_run_sweep_skips_empty_inputs() {
        let patterns = [("p1", ""), ("p2", "ab")];
        let targets = [("t1", "abab"), ("t2", "")];
        let records = run_sweep(&patterns, &targets, "asn");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pattern_id, "p2");
        assert_eq!(records[0].target_id, "t1");
    }

    #[test]
    fn test_record_serializes() {
        let record = compare_pair("p", "t", "flow", "aa", "aaaa");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"pattern_id\":\"p\""));
        assert!(json.contains("\"naive_comparisons\":6"));
        assert!(json.contains("\"kmp_comparisons\":5"));
    }
}
