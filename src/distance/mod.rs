// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! String distance and similarity primitives.

mod edit;
mod jaro_winkler;
mod ngram;

pub use edit::edit_distance;
pub use jaro_winkler::jaro_winkler;
pub use ngram::{bigram_similarity, ngram_similarity};

/// Weight of the Jaro-Winkler similarity in [`weighted_similarity`].
const JARO_WINKLER_WEIGHT: f64 = 0.45;
/// Weight of the bigram similarity in [`weighted_similarity`].
const BIGRAM_WEIGHT: f64 = 0.35;
/// Weight of the normalized edit distance in [`weighted_similarity`].
const EDIT_WEIGHT: f64 = 0.20;

/// Number of characters in a string.
#[must_use]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Ratio of the shorter to the longer length, in the range 0.0 to 1.0.
///
/// Two empty strings have a ratio of 1.0.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn length_ratio(lhs: &str, rhs: &str) -> f64 {
    let (lhs_len, rhs_len) = (char_len(lhs), char_len(rhs));
    let longest = lhs_len.max(rhs_len);
    if longest == 0 {
        return 1.0;
    }
    lhs_len.min(rhs_len) as f64 / longest as f64
}

/// Edit distance normalized by the length of the longer string and inverted, so that 1.0 means
/// equality and 0.0 means that every character differs.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn edit_similarity(lhs: &str, rhs: &str) -> f64 {
    let longest = char_len(lhs).max(char_len(rhs));
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(lhs, rhs) as f64 / longest as f64
}

/// Blend of Jaro-Winkler, bigram and edit similarity, in the range 0.0 to 1.0.
#[must_use]
pub fn weighted_similarity(lhs: &str, rhs: &str) -> f64 {
    JARO_WINKLER_WEIGHT * jaro_winkler(lhs, rhs)
        + BIGRAM_WEIGHT * bigram_similarity(lhs, rhs)
        + EDIT_WEIGHT * edit_similarity(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_length_ratio() {
        assert_float_eq!(length_ratio("ahmet", "ahmetler"), 0.625, abs <= 0.000_1);
        assert_float_eq!(length_ratio("ahmetler", "ahmet"), 0.625, abs <= 0.000_1);
        assert_float_eq!(length_ratio("", ""), 1.0, abs <= 0.000_1);
        assert_float_eq!(length_ratio("şş", "ss"), 1.0, abs <= 0.000_1);
    }

    #[test]
    fn test_edit_similarity() {
        assert_float_eq!(edit_similarity("foo", "foo"), 1.0, abs <= 0.000_1);
        assert_float_eq!(edit_similarity("foo", "bar"), 0.0, abs <= 0.000_1);
        assert_float_eq!(edit_similarity("foo", "foobar"), 0.5, abs <= 0.000_1);
        assert_float_eq!(edit_similarity("", ""), 1.0, abs <= 0.000_1);
    }

    #[test]
    fn test_weighted_similarity_equal() {
        assert_float_eq!(weighted_similarity("ahmet", "ahmet"), 1.0, abs <= 0.000_1);
    }

    #[test]
    fn test_weighted_similarity_distinct() {
        assert_float_eq!(weighted_similarity("abc", "xyz"), 0.0, abs <= 0.000_1);
    }

    #[test]
    fn test_weighted_similarity_partial() {
        // 0.45 * 0.925 + 0.35 * 8/11 + 0.20 * 5/8
        assert_float_eq!(
            weighted_similarity("ahmet", "ahmetler"),
            0.795_795,
            abs <= 0.000_1
        );
    }
}
