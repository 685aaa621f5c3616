// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Rank a list of candidate names by their similarity to a query.

use crate::config::Config;
use crate::similarity::{score_similarity, SimilarityResult};
use crate::util::BoundedKeyedHeap;
use serde::Serialize;
use std::cmp::Reverse;

/// Options that control which candidates are returned by [`rank_candidates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    /// Candidates with a lower score are dropped.
    pub min_score: u8,
    /// Maximum number of returned candidates (`None` means unlimited).
    pub limit: Option<usize>,
    /// Candidates with at least this score are flagged as conflicts.
    pub conflict_threshold: u8,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RankingOptions {
    /// Derive the ranking options from a configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        RankingOptions {
            min_score: config.min_score(),
            limit: config.limit(),
            conflict_threshold: config.notification_threshold(),
        }
    }
}

/// A candidate together with its similarity to the query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate<'a> {
    /// Position of the candidate in the input.
    pub index: usize,
    /// The candidate name.
    pub candidate: &'a str,
    /// The similarity result.
    #[serde(flatten)]
    pub result: SimilarityResult,
    /// Whether the score reaches the conflict threshold.
    pub conflict: bool,
}

/// Score every candidate against the query and return the best ones.
///
/// The result is ordered by descending score. Candidates with equal scores keep their input order.
#[must_use]
pub fn rank_candidates<'a, I>(
    query: &str,
    candidates: I,
    options: &RankingOptions,
) -> Vec<RankedCandidate<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut heap = BoundedKeyedHeap::new(options.limit, |ranked: &RankedCandidate<'a>| {
        (ranked.result.score, Reverse(ranked.index))
    });

    let mut scored = 0usize;
    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            scored += 1;
            let result = score_similarity(query, candidate);
            let conflict = result.score >= options.conflict_threshold;
            RankedCandidate {
                index,
                candidate,
                result,
                conflict,
            }
        })
        .filter(|ranked| ranked.result.score >= options.min_score)
        .for_each(|ranked| heap.push(ranked));

    log::debug!(
        "Ranked {scored} candidates for {query:?}, keeping {}",
        heap.len()
    );
    heap.into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNLIMITED: RankingOptions = RankingOptions {
        min_score: 0,
        limit: None,
        conflict_threshold: 65,
    };

    #[test]
    fn test_rank_orders_by_score() {
        let candidates = ["tamamen farklı", "ahmetler", "ahmet", "ahmet holding"];
        let ranked = rank_candidates("ahmet", candidates, &UNLIMITED);
        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked[0].candidate, "ahmet");
        assert_eq!(ranked[0].result.score, 100);
        assert_eq!(ranked[0].index, 2);
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].result.score >= pair[1].result.score));
        assert_eq!(ranked.last().map(|r| r.candidate), Some("tamamen farklı"));
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let candidates = ["mekanika", "ahmet", "ahmet"];
        let ranked = rank_candidates("ahmet", candidates, &UNLIMITED);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[1].index, 2);
    }

    #[test]
    fn test_rank_min_score_and_limit() {
        let candidates = ["ahmet", "ahmetler", "ahmet ltd", "xyz", "qwerty"];
        let options = RankingOptions {
            min_score: 50,
            limit: Some(2),
            conflict_threshold: 90,
        };
        let ranked = rank_candidates("ahmet", candidates, &options);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].candidate, "ahmet");
        assert_eq!(ranked[1].candidate, "ahmet ltd");
        assert!(ranked.iter().all(|r| r.result.score >= 50));
    }

    #[test]
    fn test_rank_conflict_flag() {
        let candidates = ["ahmet", "xyz"];
        let ranked = rank_candidates("ahmet", candidates, &UNLIMITED);
        assert!(ranked[0].conflict);
        assert!(!ranked[1].conflict);
    }

    #[test]
    fn test_rank_empty_input() {
        let ranked = rank_candidates("ahmet", Vec::<&str>::new(), &UNLIMITED);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ranked_candidate_json() {
        let ranked = rank_candidates("ahmet", ["ahmet"], &UNLIMITED);
        let value = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(value["candidate"], "ahmet");
        assert_eq!(value["score"], 100);
        assert_eq!(value["conflict"], true);
        assert!(value["details"]["tokenScore"].is_number());
    }

    #[test]
    fn test_default_options() {
        let options = RankingOptions::default();
        assert_eq!(options.min_score, 0);
        assert_eq!(options.limit, Some(25));
        assert_eq!(options.conflict_threshold, 65);
    }
}
