// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two-phase match ranker: containment first, fuzzy fallback.
//!
//! Phase one is a cheap containment test of the lowercased query against
//! each candidate's name shadow. When any candidate contains the query as a
//! substring, those candidates become the entire scoring universe - an exact
//! fragment hit is assumed more relevant than anything fuzzy matching could
//! dig up from the rest. Only when nothing contains the query does phase two
//! score the full candidate set.
//!
//! After scoring: drop below-threshold candidates, stable-sort descending,
//! cap at `max_results`, then collapse duplicate names keeping the
//! highest-scoring record. The whole pipeline is a pure function of its
//! inputs - same query, same candidates, same parameters, same output.
//!
//! **Invariants**: result length never exceeds `max_results`; every returned
//! score is at least `threshold`; no two results share a name.

mod scorer;

pub use scorer::{Scorer, WeightedRatio};

use crate::types::{MatchResult, SchoolRecord};
use std::collections::HashSet;

/// Ranking parameters.
///
/// The default threshold of 75 favors precision; 60 is the usual relaxed
/// setting when recall matters more.
#[derive(Debug, Clone, Copy)]
pub struct RankParams {
    /// Minimum confidence (0..=100) for a candidate to be returned.
    pub threshold: u8,
    /// Cap on the number of returned results.
    pub max_results: usize,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            threshold: 75,
            max_results: 5,
        }
    }
}

/// Rank `candidates` against `query`.
///
/// An empty or whitespace-only query returns an empty result without
/// invoking the scorer at all - "no search performed" rather than "searched,
/// found nothing".
pub fn rank(
    query: &str,
    candidates: &[SchoolRecord],
    params: &RankParams,
    scorer: &dyn Scorer,
) -> Vec<MatchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    // Phase one: prefer candidates containing the query verbatim.
    let query_lower = query.to_lowercase();
    let contained: Vec<&SchoolRecord> = candidates
        .iter()
        .filter(|r| r.name_contains(&query_lower))
        .collect();
    let universe: Vec<&SchoolRecord> = if contained.is_empty() {
        candidates.iter().collect()
    } else {
        contained
    };

    // Phase two: score, filter, order, cap.
    let mut results: Vec<MatchResult> = universe
        .into_iter()
        .filter_map(|record| {
            let score = scorer.score(query, &record.name);
            (score >= params.threshold).then(|| MatchResult {
                record: record.clone(),
                score,
            })
        })
        .collect();

    // Stable sort: ties keep discovery order, which makes the output fully
    // deterministic for identical inputs.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(params.max_results);

    // Duplicate names collapse to the first occurrence, which after the
    // sort is the highest-scoring one.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut deduped: Vec<MatchResult> = Vec::with_capacity(results.len());
    for result in &results {
        if seen.insert(result.record.name.as_str()) {
            deduped.push(result.clone());
        }
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Scorer stub with a call counter and a fixed score per name prefix.
    struct SpyScorer {
        calls: Cell<usize>,
    }

    impl SpyScorer {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl Scorer for SpyScorer {
        fn score(&self, _query: &str, name: &str) -> u8 {
            self.calls.set(self.calls.get() + 1);
            // Encode the desired score in the name for test control.
            name.rsplit('#')
                .next()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0)
        }
    }

    fn record(name: &str) -> SchoolRecord {
        SchoolRecord::new(name, "Mysuru", "", "", "", "", "", "", "")
    }

    #[test]
    fn test_empty_query_never_invokes_scorer() {
        let candidates = vec![record("A#90"), record("B#80")];
        let spy = SpyScorer::new();
        assert!(rank("", &candidates, &RankParams::default(), &spy).is_empty());
        assert!(rank("   ", &candidates, &RankParams::default(), &spy).is_empty());
        assert_eq!(spy.calls.get(), 0);
    }

    #[test]
    fn test_threshold_filters() {
        let candidates = vec![record("A#90"), record("B#74"), record("C#75")];
        let results = rank("x", &candidates, &RankParams::default(), &SpyScorer::new());
        let names: Vec<&str> = results.iter().map(|m| m.record.name.as_str()).collect();
        assert_eq!(names, vec!["A#90", "C#75"]);
    }

    #[test]
    fn test_sorted_descending_and_capped() {
        let candidates = vec![
            record("A#80"),
            record("B#99"),
            record("C#85"),
            record("D#90"),
            record("E#95"),
            record("F#88"),
        ];
        let params = RankParams {
            threshold: 75,
            max_results: 3,
        };
        let results = rank("x", &candidates, &params, &SpyScorer::new());
        let scores: Vec<u8> = results.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![99, 95, 90]);
    }

    #[test]
    fn test_duplicate_names_keep_highest_score() {
        // Same name twice with different scores: only the higher survives.
        let mut low = record("Govt High School");
        let mut high = record("Govt High School");
        // Distinguish rows by block so we can tell which record survived.
        low.block = "low".to_string();
        high.block = "high".to_string();

        // Identical names can't be told apart by a name-keyed scorer, so
        // score by call order: the low-score row comes first, proving the
        // sort (not discovery order) decides which row wins.
        struct Alternating {
            next: Cell<u8>,
        }
        impl Scorer for Alternating {
            fn score(&self, _q: &str, _name: &str) -> u8 {
                let v = self.next.get();
                self.next.set(v + 10);
                v
            }
        }
        let candidates = vec![low, high];
        let results = rank(
            "x",
            &candidates,
            &RankParams {
                threshold: 75,
                max_results: 5,
            },
            &Alternating {
                next: Cell::new(80),
            },
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 90);
        assert_eq!(results[0].record.block, "high");
    }

    #[test]
    fn test_containment_restricts_universe() {
        // One candidate contains the query verbatim; the near-miss must not
        // be scored at all.
        let candidates = vec![record("Central School#90"), record("Centrl School#95")];
        let spy = SpyScorer::new();
        let results = rank("central", &candidates, &RankParams::default(), &spy);
        assert_eq!(spy.calls.get(), 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.name, "Central School#90");
    }

    #[test]
    fn test_no_containment_scores_everything() {
        let candidates = vec![record("A#90"), record("B#80")];
        let spy = SpyScorer::new();
        let results = rank("zzz", &candidates, &RankParams::default(), &spy);
        assert_eq!(spy.calls.get(), 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_all_below_threshold_is_empty() {
        let candidates = vec![record("A#10"), record("B#20")];
        assert!(rank("x", &candidates, &RankParams::default(), &SpyScorer::new()).is_empty());
    }

    #[test]
    fn test_default_params() {
        let params = RankParams::default();
        assert_eq!(params.threshold, 75);
        assert_eq!(params.max_results, 5);
    }
}
