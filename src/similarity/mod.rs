// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Similarity scoring between a search query and a candidate mark name.
//!
//! The score combines four partial scores (token, character, phonetic and morphological) and then
//! applies a number of caps and floors:
//!
//! 1. The final score is the maximum of the partial scores.
//! 2. If no query word matches any candidate word, the score is capped at 15.
//! 3. A single query word matching one word of a multi-word candidate is capped relative to the
//!    token score.
//! 4. If the first words of both names match, the score is raised to at least 65.

mod reason;
mod scores;
mod tokens;

pub use reason::Reason;

use crate::distance::{char_len, edit_distance};
use crate::text::{self, ascii_variant};
use scores::{char_score, morph_score, phonetic_score, token_score, CharScore};
use serde::Serialize;
use tokens::match_tokens;

/// Upper bound for the score if no words match at all.
const NO_TOKEN_MATCH_CAP: f64 = 15.0;
/// Headroom above the token score for a single query word in a multi-word candidate.
const SINGLE_WORD_HEADROOM: f64 = 15.0;
/// Headroom above the per-word share if the single query word only matched fuzzily.
const FUZZY_SINGLE_WORD_HEADROOM: f64 = 10.0;
/// Minimum score if the first words of query and candidate match.
const FIRST_WORD_FLOOR: f64 = 65.0;
/// Minimum character score if the names consist of the same words written together.
const COMBINED_FORM_SCORE: f64 = 95.0;
/// Minimum length of the first query word to match the first candidate word as a prefix.
const FIRST_WORD_MIN_PREFIX_LENGTH: usize = 3;
/// Minimum length of both first words to match with a single edit.
const FIRST_WORD_MIN_EDIT_LENGTH: usize = 4;

/// The partial scores a similarity score is made of.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    /// Score derived from matching words.
    pub token_score: f64,
    /// Score derived from character-level string similarity.
    pub char_score: f64,
    /// Score derived from comparing phonetic keys.
    pub phonetic_score: f64,
    /// Score derived from shared word stems.
    pub morph_score: f64,
}

impl ScoreDetails {
    /// Details where every partial score is at its maximum.
    const EXACT: Self = Self {
        token_score: 100.0,
        char_score: 100.0,
        phonetic_score: 100.0,
        morph_score: 100.0,
    };

    /// The highest partial score.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.token_score
            .max(self.char_score)
            .max(self.phonetic_score)
            .max(self.morph_score)
    }
}

/// Result of comparing a query with a candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    /// The similarity score between 0 and 100.
    pub score: u8,
    /// Explanation for the score.
    pub reason: Reason,
    /// Query words that matched a candidate word.
    pub matched_tokens: Vec<String>,
    /// The partial scores.
    pub details: ScoreDetails,
}

impl SimilarityResult {
    /// A result with score zero.
    fn zero(reason: Reason) -> Self {
        SimilarityResult {
            score: 0,
            reason,
            matched_tokens: Vec::new(),
            details: ScoreDetails::default(),
        }
    }
}

/// Returns `true` if the first words of query and candidate refer to the same name.
///
/// Both words are compared after ASCII folding. They match if they are equal, if the query word
/// (with at least 3 characters) is a prefix of the candidate word, or if both have at least 4
/// characters and are one edit apart.
///
/// The one-edit rule is an addition to the equality and prefix checks. It lets a misspelt first
/// word (e.g. "ahmet" and "ahmed") reach the floor, and also raises pairs like "abcd" and
/// "abce xyz" from the single-word cap to the floor.
fn first_words_match(query_token: &str, candidate_token: &str) -> bool {
    let query_token = ascii_variant(query_token);
    let candidate_token = ascii_variant(candidate_token);
    let query_len = char_len(&query_token);

    query_token == candidate_token
        || (query_len >= FIRST_WORD_MIN_PREFIX_LENGTH
            && candidate_token.starts_with(&query_token))
        || (query_len.min(char_len(&candidate_token)) >= FIRST_WORD_MIN_EDIT_LENGTH
            && edit_distance(&query_token, &candidate_token) == 1)
}

/// Pick the reason for the final score.
fn explain(
    query: &str,
    candidate: &str,
    details: &ScoreDetails,
    token_reason: Reason,
    char_details: CharScore,
    combined_form: bool,
    morph_reason: Option<Reason>,
) -> Reason {
    if ascii_variant(query) == ascii_variant(candidate) {
        return Reason::DiacriticDifference;
    }

    let ScoreDetails {
        token_score,
        char_score,
        phonetic_score,
        morph_score,
    } = *details;

    if char_score > token_score && char_score >= phonetic_score && char_score >= morph_score {
        if combined_form {
            return Reason::CombinedForm;
        }
        if char_details.single_edit {
            return Reason::SingleEdit;
        }
    }

    if phonetic_score > token_score && phonetic_score > char_score && phonetic_score >= morph_score
    {
        return Reason::Phonetic;
    }

    if let Some(reason) = morph_reason {
        if morph_score > token_score && morph_score > char_score && morph_score > phonetic_score {
            return reason;
        }
    }

    token_reason
}

/// Calculate the similarity between a search query and a candidate name.
///
/// This function is deterministic and never fails. Empty input results in a score of zero,
/// names that are equal after normalization result in a score of 100.
#[expect(clippy::cast_precision_loss)]
#[expect(clippy::cast_possible_truncation)]
#[expect(clippy::cast_sign_loss)]
#[must_use]
pub fn score_similarity(query: &str, candidate: &str) -> SimilarityResult {
    if query.is_empty() || candidate.is_empty() {
        return SimilarityResult::zero(Reason::EmptyInput);
    }

    let query = text::normalize(query);
    let candidate = text::normalize(candidate);
    if query == candidate {
        return SimilarityResult {
            score: 100,
            reason: Reason::ExactMatch,
            matched_tokens: text::meaningful_tokens(&query)
                .into_iter()
                .map(String::from)
                .collect(),
            details: ScoreDetails::EXACT,
        };
    }

    let query_tokens = text::meaningful_tokens(&query);
    let candidate_tokens = text::meaningful_tokens(&candidate);
    let (Some(first_query_token), Some(first_candidate_token)) =
        (query_tokens.first(), candidate_tokens.first())
    else {
        return SimilarityResult::zero(Reason::NoCommonWords);
    };

    let matches = match_tokens(&query_tokens, &candidate_tokens);
    let has_token_match = matches.has_any();

    let token = token_score(&query_tokens, &candidate_tokens, &matches);
    let mut char_details = if has_token_match {
        char_score(&query, &candidate, &query_tokens, &candidate_tokens)
    } else {
        CharScore::default()
    };
    let phonetic = if has_token_match {
        phonetic_score(&query, &candidate)
    } else {
        0.0
    };
    let morph = morph_score(&query_tokens, &candidate_tokens);

    let combined_form = query_tokens.concat() == candidate_tokens.concat();
    if combined_form {
        char_details.value = char_details.value.max(COMBINED_FORM_SCORE);
    }

    let details = ScoreDetails {
        token_score: token.value,
        char_score: char_details.value,
        phonetic_score: phonetic,
        morph_score: morph.map_or(0.0, |score| score.value),
    };

    let mut final_score = details.max();
    if !has_token_match {
        final_score = final_score.min(NO_TOKEN_MATCH_CAP);
    }

    if has_token_match && query_tokens.len() == 1 && candidate_tokens.len() > 1 {
        let max_allowed = if details.token_score > 0.0 {
            details.token_score + SINGLE_WORD_HEADROOM
        } else {
            100.0 / candidate_tokens.len() as f64 + FUZZY_SINGLE_WORD_HEADROOM
        };
        final_score = final_score.min(max_allowed);
    }

    if has_token_match && first_words_match(first_query_token, first_candidate_token) {
        final_score = final_score.max(FIRST_WORD_FLOOR);
    }

    let score = final_score.round().clamp(0.0, 100.0) as u8;
    // Without a common word, the partial scores only feed the capped remainder.
    let reason = if has_token_match {
        explain(
            &query,
            &candidate,
            &details,
            token.reason,
            char_details,
            combined_form,
            morph.map(|score| score.reason),
        )
    } else if score > 0 {
        Reason::Similarity
    } else {
        Reason::NoCommonWords
    };

    log::trace!(
        "{query:?} vs {candidate:?}: {score} ({reason}), token={:.2} char={:.2} phonetic={:.2} morph={:.2}",
        details.token_score,
        details.char_score,
        details.phonetic_score,
        details.morph_score,
    );

    SimilarityResult {
        score,
        reason,
        matched_tokens: matches
            .matched_tokens
            .into_iter()
            .map(String::from)
            .collect(),
        details,
    }
}
