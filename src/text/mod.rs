// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Text preparation: normalization, tokenization and character folding.

mod fold;
mod generic;

pub use fold::{ascii_variant, phonetic_key};
pub use generic::is_generic_term;

/// Characters that are treated as word separators during [`normalize`].
const SEPARATORS: [char; 7] = ['-', '_', '/', '.', '+', ',', '&'];

/// Minimum number of characters a token needs to take part in matching.
///
/// Single letters (e.g. the "a" in "a.ş.") produce false positives in legal names.
pub const MIN_TOKEN_LENGTH: usize = 2;

/// Lowercase a string using Turkish casing rules.
///
/// `I` becomes the dotless `ı` and `İ` becomes `i`. Everything else uses the default Unicode
/// lowercase mapping.
fn lowercase_tr(value: &str) -> String {
    let mut lowered = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            'I' => lowered.push('ı'),
            'İ' => lowered.push('i'),
            _ => lowered.extend(ch.to_lowercase()),
        }
    }
    lowered
}

/// Normalize a string for comparison.
///
/// The value is lowercased (Turkish locale), separator punctuation is replaced by spaces and runs
/// of whitespace are collapsed into a single space. The result never has leading or trailing
/// whitespace.
#[must_use]
pub fn normalize(value: &str) -> String {
    let lowered = lowercase_tr(value);
    let separated: String = lowered
        .chars()
        .map(|ch| if SEPARATORS.contains(&ch) { ' ' } else { ch })
        .collect();

    separated.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a normalized string into tokens.
#[must_use]
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|token| !token.is_empty()).collect()
}

/// Returns `true` if the token is long enough to take part in matching.
#[must_use]
pub fn is_meaningful(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_LENGTH
}

/// Split a normalized string into tokens and drop the ones that are too short to be meaningful.
#[must_use]
pub fn meaningful_tokens(normalized: &str) -> Vec<&str> {
    tokenize(normalized)
        .into_iter()
        .filter(|token| is_meaningful(token))
        .collect()
}
