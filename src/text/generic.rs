// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Generic business words that carry little distinctive weight in a mark name.

use super::ascii_variant;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Company-form suffixes and sector words, in normalized (lowercase) spelling.
const GENERIC_TERMS: [&str; 32] = [
    "ltd",
    "şti",
    "a.ş",
    "aş",
    "inc",
    "llc",
    "corp",
    "co",
    "limited",
    "anonim",
    "şirket",
    "şirketi",
    "holding",
    "grup",
    "group",
    "ticaret",
    "tic",
    "sanayi",
    "san",
    "ve",
    "tech",
    "teknoloji",
    "gıda",
    "inşaat",
    "yapı",
    "tekstil",
    "turizm",
    "enerji",
    "lojistik",
    "danışmanlık",
    "hizmetleri",
    "pazarlama",
];

/// The generic term set, including the ASCII-folded spelling of every term.
static GENERIC_TERM_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    GENERIC_TERMS
        .iter()
        .flat_map(|term| [(*term).to_string(), ascii_variant(term)])
        .collect()
});

/// Returns `true` if the (normalized) token is a generic term, either as spelled or after ASCII
/// folding.
#[must_use]
pub fn is_generic_term(token: &str) -> bool {
    GENERIC_TERM_SET.contains(token) || GENERIC_TERM_SET.contains(&ascii_variant(token))
}
