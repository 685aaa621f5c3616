// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! N-gram overlap (Sørensen-Dice coefficient).

/// Calculate the Dice coefficient of the overlapping `n`-character substrings of two strings.
///
/// Every n-gram of the right hand side can only be matched once. Strings shorter than `n` are
/// considered fully similar if they are equal and dissimilar otherwise.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ngram_similarity(lhs: &str, rhs: &str, n: usize) -> f64 {
    let lhs: Vec<char> = lhs.chars().collect();
    let rhs: Vec<char> = rhs.chars().collect();

    if n == 0 || lhs.len() < n || rhs.len() < n {
        return if lhs == rhs { 1.0 } else { 0.0 };
    }

    let lhs_grams: Vec<&[char]> = lhs.windows(n).collect();
    let rhs_grams: Vec<&[char]> = rhs.windows(n).collect();
    let mut consumed = vec![false; rhs_grams.len()];

    let mut matches = 0usize;
    for gram in &lhs_grams {
        let position = rhs_grams
            .iter()
            .zip(&consumed)
            .position(|(other, &used)| !used && other == gram);
        if let Some(index) = position {
            consumed[index] = true;
            matches += 1;
        }
    }

    2.0 * matches as f64 / (lhs_grams.len() + rhs_grams.len()) as f64
}

/// Calculate the bigram Dice coefficient of two strings.
#[must_use]
pub fn bigram_similarity(lhs: &str, rhs: &str) -> f64 {
    ngram_similarity(lhs, rhs, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_bigram_equal() {
        assert_float_eq!(bigram_similarity("ahmet", "ahmet"), 1.0, abs <= 0.000_1);
    }

    #[test]
    fn test_bigram_short_strings() {
        assert_float_eq!(bigram_similarity("a", "a"), 1.0, abs <= 0.000_1);
        assert_float_eq!(bigram_similarity("a", "b"), 0.0, abs <= 0.000_1);
        assert_float_eq!(bigram_similarity("a", "ab"), 0.0, abs <= 0.000_1);
        assert_float_eq!(bigram_similarity("", ""), 1.0, abs <= 0.000_1);
    }

    #[test]
    fn test_bigram_partial() {
        // ah hm me et / ah hm me et tl le er
        assert_float_eq!(bigram_similarity("ahmet", "ahmetler"), 8.0 / 11.0, abs <= 0.000_1);
        assert_float_eq!(bigram_similarity("şirket", "sirket"), 0.8, abs <= 0.000_1);
    }

    #[test]
    fn test_bigram_consumes_once() {
        // "aa" appears twice on the left, but only once on the right.
        assert_float_eq!(bigram_similarity("aaa", "aa"), 2.0 / 3.0, abs <= 0.000_1);
    }

    #[test]
    fn test_trigram() {
        assert_float_eq!(ngram_similarity("night", "nacht", 3), 0.0, abs <= 0.000_1);
        assert_float_eq!(ngram_similarity("abcd", "abce", 3), 0.5, abs <= 0.000_1);
    }
}
