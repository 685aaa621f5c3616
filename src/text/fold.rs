// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Character folding tables.

/// Turkish letters and their closest unaccented Latin counterpart.
const ASCII_FOLD: [(char, char); 12] = [
    ('ı', 'i'),
    ('İ', 'I'),
    ('ğ', 'g'),
    ('Ğ', 'G'),
    ('ş', 's'),
    ('Ş', 'S'),
    ('ç', 'c'),
    ('Ç', 'C'),
    ('ö', 'o'),
    ('Ö', 'O'),
    ('ü', 'u'),
    ('Ü', 'U'),
];

/// Fold a single character using [`ASCII_FOLD`].
fn fold_char(ch: char) -> char {
    ASCII_FOLD
        .iter()
        .find_map(|&(from, to)| (from == ch).then_some(to))
        .unwrap_or(ch)
}

/// Replace accented Turkish letters with their unaccented counterpart.
///
/// Characters that are not in the table are passed through unchanged. This is only used for
/// tolerant comparisons, the normalized text keeps its accents.
#[must_use]
pub fn ascii_variant(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

/// Map a lowercase character to the representative of its sound group.
fn phonetic_char(ch: char) -> char {
    match ch {
        'ş' => 's',
        'ç' => 'c',
        'ğ' | 'g' => 'k',
        'b' => 'p',
        'd' => 't',
        'ı' => 'i',
        'ö' => 'o',
        'ü' => 'u',
        _ => ch,
    }
}

/// Derive the phonetic key of a normalized string.
///
/// Letters that sound alike or are commonly confused in Turkish spelling collapse into a single
/// letter, so near-homophones end up with the same key. The key has the same number of characters
/// as the input.
#[must_use]
pub fn phonetic_key(normalized: &str) -> String {
    normalized.chars().map(phonetic_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_variant_lowercase() {
        assert_eq!(ascii_variant("ışık güneş çiçek ödül"), "isik gunes cicek odul");
    }

    #[test]
    fn test_ascii_variant_uppercase() {
        assert_eq!(ascii_variant("İĞŞÇÖÜ"), "IGSCOU");
    }

    #[test]
    fn test_ascii_variant_passthrough() {
        assert_eq!(ascii_variant("qualité 1894"), "qualité 1894");
    }

    #[test]
    fn test_phonetic_key() {
        assert_eq!(phonetic_key("doğan"), "tokan");
        assert_eq!(phonetic_key("tokan"), "tokan");
        assert_eq!(phonetic_key("bülbül"), "pulpul");
        assert_eq!(phonetic_key("şeker çay"), "seker cay");
    }
}
