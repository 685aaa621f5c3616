// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Jaro-Winkler similarity.

/// Winkler prefix scaling factor.
const PREFIX_SCALE: f64 = 0.1;

/// Only this many leading characters are considered for the prefix bonus.
const MAX_PREFIX_LENGTH: usize = 4;

/// Calculate the Jaro similarity of two character slices, where 0.0 means no similarity and 1.0
/// means equality.
#[expect(clippy::cast_precision_loss)]
fn jaro(lhs: &[char], rhs: &[char]) -> f64 {
    let match_window = (lhs.len().max(rhs.len()) / 2).saturating_sub(1);

    let mut lhs_matched = vec![false; lhs.len()];
    let mut rhs_matched = vec![false; rhs.len()];
    let mut matches = 0usize;

    for (i, lhs_char) in lhs.iter().enumerate() {
        let start = i.saturating_sub(match_window);
        let end = (i + match_window + 1).min(rhs.len());
        for j in start..end {
            if rhs_matched[j] || rhs[j] != *lhs_char {
                continue;
            }
            lhs_matched[i] = true;
            rhs_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let lhs_sequence = lhs
        .iter()
        .zip(&lhs_matched)
        .filter_map(|(ch, &matched)| matched.then_some(ch));
    let rhs_sequence = rhs
        .iter()
        .zip(&rhs_matched)
        .filter_map(|(ch, &matched)| matched.then_some(ch));
    let transpositions = lhs_sequence
        .zip(rhs_sequence)
        .filter(|(lhs_char, rhs_char)| lhs_char != rhs_char)
        .count();

    let matches = matches as f64;
    let transpositions = transpositions as f64 / 2.0;
    (matches / lhs.len() as f64 + matches / rhs.len() as f64 + (matches - transpositions) / matches)
        / 3.0
}

/// Calculate the Jaro-Winkler similarity of two strings, where 0.0 means no similarity and 1.0
/// means equality.
///
/// Equal strings (including two empty strings) have a similarity of 1.0. If only one of them is
/// empty, the similarity is 0.0.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn jaro_winkler(lhs: &str, rhs: &str) -> f64 {
    if lhs == rhs {
        return 1.0;
    }

    let lhs: Vec<char> = lhs.chars().collect();
    let rhs: Vec<char> = rhs.chars().collect();
    if lhs.is_empty() || rhs.is_empty() {
        return 0.0;
    }

    let jaro = jaro(&lhs, &rhs);
    let prefix_length = lhs
        .iter()
        .zip(&rhs)
        .take(MAX_PREFIX_LENGTH)
        .take_while(|(lhs_char, rhs_char)| lhs_char == rhs_char)
        .count();

    jaro + PREFIX_SCALE * prefix_length as f64 * (1.0 - jaro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_jaro_winkler_equal() {
        assert_float_eq!(jaro_winkler("ahmet", "ahmet"), 1.0, abs <= 0.000_1);
        assert_float_eq!(jaro_winkler("", ""), 1.0, abs <= 0.000_1);
    }

    #[test]
    fn test_jaro_winkler_empty() {
        assert_float_eq!(jaro_winkler("", "ahmet"), 0.0, abs <= 0.000_1);
        assert_float_eq!(jaro_winkler("ahmet", ""), 0.0, abs <= 0.000_1);
    }

    #[test]
    fn test_jaro_winkler_distinct() {
        assert_float_eq!(jaro_winkler("abc", "xyz"), 0.0, abs <= 0.000_1);
    }

    #[test]
    fn test_jaro_winkler_martha() {
        assert_float_eq!(jaro_winkler("martha", "marhta"), 0.961_1, abs <= 0.000_1);
    }

    #[test]
    fn test_jaro_winkler_dwayne() {
        assert_float_eq!(jaro_winkler("dwayne", "duane"), 0.84, abs <= 0.000_1);
    }

    #[test]
    fn test_jaro_winkler_prefix() {
        assert_float_eq!(jaro_winkler("ahmet", "ahmetler"), 0.925, abs <= 0.000_1);
    }

    #[test]
    fn test_jaro_winkler_single_substitution() {
        assert_float_eq!(jaro_winkler("ahmet", "ahmed"), 0.92, abs <= 0.000_1);
    }
}
