// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! The four partial scores (token, character, phonetic and morphological), each in the range 0
//! to 100.

use super::tokens::{tokens_equal, TokenMatch};
use super::Reason;
use crate::distance::{
    edit_distance, edit_similarity, jaro_winkler, length_ratio, weighted_similarity,
};
use crate::text::{ascii_variant, phonetic_key};

/// Score for a match on a generic word of a multi-word candidate.
const GENERIC_WORD_SCORE: f64 = 20.0;
/// Weight of an additional generic candidate word when diluting a single word match.
const GENERIC_DILUTION: f64 = 0.25;
/// Weight of an additional distinctive candidate word when diluting a single word match.
const DISTINCTIVE_DILUTION: f64 = 1.0;
/// Weight of the query coverage for multi-word queries (the candidate gets the rest).
const QUERY_COVERAGE_WEIGHT: f64 = 0.7;

/// Whole strings with a lower Jaro-Winkler similarity do not get a character score.
const MIN_WHOLE_JARO_WINKLER: f64 = 0.6;
/// Whole strings with a lower length ratio only get half of their character score.
const MIN_WHOLE_LENGTH_RATIO: f64 = 0.5;
/// Token pairs with a lower Jaro-Winkler similarity are skipped (unless one edit apart).
const MIN_TOKEN_JARO_WINKLER: f64 = 0.75;
/// Score for a token pair that is one edit apart.
const SINGLE_EDIT_SCORE: f64 = 95.0;
/// Minimum score for a token pair that only differs in diacritics.
const DIACRITIC_SCORE: f64 = 98.0;
/// Averaged token scores below this value are discarded.
const MIN_TOKEN_AVERAGE: f64 = 50.0;

/// Phonetic comparison is skipped unless the length ratio is higher than this.
const MIN_PHONETIC_LENGTH_RATIO: f64 = 0.6;
/// Score for identical phonetic keys.
const SAME_PHONETIC_KEY_SCORE: f64 = 90.0;
/// Minimum edit similarity of two phonetic keys.
const MIN_PHONETIC_SIMILARITY: f64 = 0.8;
/// Scale applied to the edit similarity of two close phonetic keys.
const PHONETIC_SCALE: f64 = 85.0;

/// Score if a candidate word extends the query.
const STEM_EXTENSION_SCORE: f64 = 85.0;
/// Score if the query extends a candidate word.
const STEM_CONTAINED_SCORE: f64 = 80.0;

/// A partial score together with the reason describing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplainedScore {
    /// The score.
    pub value: f64,
    /// The reason.
    pub reason: Reason,
}

impl ExplainedScore {
    /// Create a new score.
    const fn new(value: f64, reason: Reason) -> Self {
        Self { value, reason }
    }
}

/// Character score with the information whether it is driven by a single edit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CharScore {
    /// The score.
    pub value: f64,
    /// `true` if the whole strings, or the best matching token pair, are one edit apart.
    pub single_edit: bool,
}

/// Calculate the token score.
///
/// A single query word is diluted by the other words of the candidate, where generic words
/// dilute much less than distinctive ones. For multiple query words, the coverage of the query
/// weighs more than the coverage of the candidate.
#[expect(clippy::cast_precision_loss)]
pub fn token_score(query: &[&str], candidate: &[&str], matches: &TokenMatch<'_>) -> ExplainedScore {
    if !matches.has_any() {
        return ExplainedScore::new(0.0, Reason::NoCommonWords);
    }

    if let [query_token] = query {
        let Some(index) = candidate
            .iter()
            .position(|candidate_token| tokens_equal(query_token, candidate_token))
        else {
            return ExplainedScore::new(0.0, Reason::FuzzyWord);
        };

        if candidate.len() == 1 {
            return ExplainedScore::new(100.0, Reason::SingleWord);
        }

        if matches.candidate_generic[index] {
            return ExplainedScore::new(GENERIC_WORD_SCORE, Reason::GenericWord);
        }

        let weighted_count: f64 = 1.0
            + matches
                .candidate_generic
                .iter()
                .enumerate()
                .filter(|&(other_index, _)| other_index != index)
                .map(|(_, &generic)| {
                    if generic {
                        GENERIC_DILUTION
                    } else {
                        DISTINCTIVE_DILUTION
                    }
                })
                .sum::<f64>();
        return ExplainedScore::new(
            100.0 / weighted_count,
            Reason::WordAmongOthers {
                others: candidate.len() - 1,
            },
        );
    }

    let matched_count = matches.matched_count() as f64;
    let query_coverage = (matched_count / query.len() as f64 * 100.0).min(100.0);
    let candidate_coverage = (matched_count / candidate.len() as f64 * 100.0).min(100.0);
    let value = QUERY_COVERAGE_WEIGHT * query_coverage
        + (1.0 - QUERY_COVERAGE_WEIGHT) * candidate_coverage;
    let reason = if matches.exact {
        Reason::WordCoverage {
            matched: matches.matched_count(),
            total: query.len(),
        }
    } else {
        Reason::FuzzyWord
    };

    ExplainedScore::new(value, reason)
}

/// Character score of the whole normalized strings.
fn whole_string_score(query: &str, candidate: &str) -> f64 {
    if jaro_winkler(query, candidate) < MIN_WHOLE_JARO_WINKLER {
        return 0.0;
    }

    let score = weighted_similarity(query, candidate) * 100.0;
    if length_ratio(query, candidate) < MIN_WHOLE_LENGTH_RATIO {
        score * 0.5
    } else {
        score
    }
}

/// Score a single token pair and return it with the edit distance, or `None` if the tokens are
/// too different to be considered.
fn token_pair_score(query_token: &str, candidate_token: &str) -> Option<(f64, usize)> {
    let distance = edit_distance(query_token, candidate_token);
    if distance == 0 {
        return Some((100.0, 0));
    }

    if distance > 1 && jaro_winkler(query_token, candidate_token) < MIN_TOKEN_JARO_WINKLER {
        return None;
    }

    let mut score = if distance == 1 {
        SINGLE_EDIT_SCORE
    } else {
        weighted_similarity(query_token, candidate_token) * 100.0
    };
    if ascii_variant(query_token) == ascii_variant(candidate_token) {
        score = score.max(DIACRITIC_SCORE);
    }

    Some((score, distance))
}

/// Average of the best candidate token score for every query token.
#[expect(clippy::cast_precision_loss)]
fn per_token_score(query: &[&str], candidate: &[&str]) -> CharScore {
    let mut total = 0.0;
    let mut single_edit = false;
    for query_token in query {
        let best = candidate
            .iter()
            .filter_map(|candidate_token| token_pair_score(query_token, candidate_token))
            .fold(None, |best: Option<(f64, usize)>, current| match best {
                Some((score, _)) if score >= current.0 => best,
                _ => Some(current),
            });
        if let Some((score, distance)) = best {
            total += score;
            single_edit |= distance == 1;
        }
    }

    let average = total / query.len().max(1) as f64;
    if average < MIN_TOKEN_AVERAGE {
        return CharScore::default();
    }

    CharScore {
        value: average,
        single_edit,
    }
}

/// Calculate the character score, which is the better one of the whole string and the per-token
/// score.
pub fn char_score(
    query: &str,
    candidate: &str,
    query_tokens: &[&str],
    candidate_tokens: &[&str],
) -> CharScore {
    let whole = whole_string_score(query, candidate);
    let per_token = per_token_score(query_tokens, candidate_tokens);

    CharScore {
        value: whole.max(per_token.value),
        single_edit: per_token.single_edit || edit_distance(query, candidate) == 1,
    }
}

/// Calculate the phonetic score of the two normalized strings.
pub fn phonetic_score(query: &str, candidate: &str) -> f64 {
    if length_ratio(query, candidate) <= MIN_PHONETIC_LENGTH_RATIO {
        return 0.0;
    }

    let query_key = phonetic_key(query);
    let candidate_key = phonetic_key(candidate);
    if query_key == candidate_key {
        return SAME_PHONETIC_KEY_SCORE;
    }

    let similarity = edit_similarity(&query_key, &candidate_key);
    if similarity > MIN_PHONETIC_SIMILARITY {
        similarity * PHONETIC_SCALE
    } else {
        0.0
    }
}

/// Calculate the morphological score for a single-word query.
///
/// Returns `None` if the query has more than one word or no candidate word shares a prefix
/// relation with it. If several candidate words qualify, the highest score wins.
pub fn morph_score(query: &[&str], candidate: &[&str]) -> Option<ExplainedScore> {
    let [query_token] = query else {
        return None;
    };

    candidate
        .iter()
        .filter_map(|candidate_token| {
            if candidate_token.len() > query_token.len() && candidate_token.starts_with(query_token)
            {
                Some(ExplainedScore::new(
                    STEM_EXTENSION_SCORE,
                    Reason::StemExtension,
                ))
            } else if query_token.len() > candidate_token.len()
                && query_token.starts_with(candidate_token)
            {
                Some(ExplainedScore::new(
                    STEM_CONTAINED_SCORE,
                    Reason::StemContained,
                ))
            } else {
                None
            }
        })
        .fold(None, |best: Option<ExplainedScore>, current| match best {
            Some(score) if score.value >= current.value => best,
            _ => Some(current),
        })
}
