// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Word-level matching between query and candidate tokens.

use crate::distance::{char_len, edit_distance, length_ratio};
use crate::text::{ascii_variant, is_generic_term};

/// Minimum length of the shorter token for a containment match.
const MIN_CONTAINMENT_LENGTH: usize = 4;

/// Query tokens shorter than this may differ by one edit, longer ones by two.
const LONG_TOKEN_LENGTH: usize = 6;

/// Minimum length ratio between two tokens for an edit distance match.
const MIN_FUZZY_LENGTH_RATIO: f64 = 0.7;

/// Outcome of matching the query tokens against the candidate tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch<'a> {
    /// Query tokens that found a match, in query order.
    pub matched_tokens: Vec<&'a str>,
    /// `true` if the matches come from the exact pass, `false` if from the fuzzy pass.
    pub exact: bool,
    /// For every candidate token, `true` if it is a generic term.
    pub candidate_generic: Vec<bool>,
}

impl TokenMatch<'_> {
    /// Number of query tokens that found a match.
    pub fn matched_count(&self) -> usize {
        self.matched_tokens.len()
    }

    /// Returns `true` if at least one query token was matched by either pass.
    pub fn has_any(&self) -> bool {
        !self.matched_tokens.is_empty()
    }
}

/// Returns `true` if both tokens are equal, either as spelled or after ASCII folding.
pub fn tokens_equal(lhs: &str, rhs: &str) -> bool {
    lhs == rhs || ascii_variant(lhs) == ascii_variant(rhs)
}

/// Returns `true` if the tokens are close enough to count as a fuzzy match.
///
/// A token that contains the other one always matches as long as the shorter one has at least
/// [`MIN_CONTAINMENT_LENGTH`] characters. Otherwise the edit distance must be small and the
/// lengths must be comparable.
fn is_fuzzy_match(query_token: &str, candidate_token: &str) -> bool {
    let query_len = char_len(query_token);
    let shorter = query_len.min(char_len(candidate_token));
    let contains =
        candidate_token.contains(query_token) || query_token.contains(candidate_token);
    if contains && shorter >= MIN_CONTAINMENT_LENGTH {
        return true;
    }

    let max_distance = if query_len < LONG_TOKEN_LENGTH { 1 } else { 2 };
    length_ratio(query_token, candidate_token) >= MIN_FUZZY_LENGTH_RATIO
        && edit_distance(query_token, candidate_token) <= max_distance
}

/// Match query tokens against candidate tokens.
///
/// Every query token with an exact counterpart is counted. Only if there is none at all, a fuzzy
/// pass runs, which stops at the first query token that matches.
pub fn match_tokens<'a>(query: &[&'a str], candidate: &[&str]) -> TokenMatch<'a> {
    let candidate_generic = candidate
        .iter()
        .map(|token| is_generic_term(token))
        .collect();

    let exact_matches: Vec<&'a str> = query
        .iter()
        .copied()
        .filter(|query_token| {
            candidate
                .iter()
                .any(|candidate_token| tokens_equal(query_token, candidate_token))
        })
        .collect();
    if !exact_matches.is_empty() {
        return TokenMatch {
            matched_tokens: exact_matches,
            exact: true,
            candidate_generic,
        };
    }

    let fuzzy_match = query.iter().copied().find(|query_token| {
        candidate
            .iter()
            .any(|candidate_token| is_fuzzy_match(query_token, candidate_token))
    });
    if let Some(query_token) = fuzzy_match {
        log::trace!("Fuzzy token match for {query_token:?}");
    }

    TokenMatch {
        matched_tokens: fuzzy_match.into_iter().collect(),
        exact: false,
        candidate_generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pass_counts_every_token() {
        let matches = match_tokens(&["foo", "bar", "baz"], &["bar", "foo"]);
        assert!(matches.exact);
        assert_eq!(matches.matched_tokens, vec!["foo", "bar"]);
        assert_eq!(matches.matched_count(), 2);
    }

    #[test]
    fn test_exact_pass_folded() {
        let matches = match_tokens(&["şirket"], &["sirket"]);
        assert!(matches.exact);
        assert_eq!(matches.matched_tokens, vec!["şirket"]);
        assert_eq!(matches.candidate_generic, vec![true]);
    }

    #[test]
    fn test_fuzzy_single_edit() {
        let matches = match_tokens(&["ahmet"], &["ahmed", "farouki"]);
        assert!(!matches.exact);
        assert_eq!(matches.matched_tokens, vec!["ahmet"]);
        assert_eq!(matches.candidate_generic, vec![false, false]);
    }

    #[test]
    fn test_fuzzy_short_token_allows_one_edit() {
        assert!(match_tokens(&["ahmet"], &["ahmat", "x"]).has_any());
        assert!(!match_tokens(&["ahmet"], &["ahmadd"]).has_any());
    }

    #[test]
    fn test_fuzzy_long_token_allows_two_edits() {
        assert!(match_tokens(&["yildizlar"], &["yildizar"]).has_any());
        assert!(match_tokens(&["kuyumcu"], &["kuyamco"]).has_any());
    }

    #[test]
    fn test_fuzzy_length_ratio() {
        // Two deletions are within the allowed distance, but the lengths differ too much.
        assert!(!match_tokens(&["abcdef"], &["abdf"]).has_any());
    }

    #[test]
    fn test_fuzzy_containment() {
        assert!(match_tokens(&["coca", "cola"], &["cocacola"]).has_any());
        assert!(match_tokens(&["ahmetler"], &["ahmet"]).has_any());
        // Shorter token has less than four characters.
        assert!(!match_tokens(&["abc"], &["abcdefgh"]).has_any());
    }

    #[test]
    fn test_fuzzy_pass_credits_one_token() {
        let matches = match_tokens(&["ahmet", "mehmet"], &["ahmed", "mehmed"]);
        assert_eq!(matches.matched_tokens, vec!["ahmet"]);
    }

    #[test]
    fn test_no_match() {
        let matches = match_tokens(&["ahmet"], &["altın", "yıldız", "kuyumculuk"]);
        assert!(!matches.has_any());
        assert_eq!(matches.matched_count(), 0);
    }
}
