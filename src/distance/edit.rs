// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Edit distance with adjacent transpositions.

/// Calculate the edit distance between two strings.
///
/// Insertions, deletions and substitutions cost 1. Two adjacent characters that are swapped are
/// also counted as a single edit (optimal string alignment). The distance is computed on Unicode
/// scalar values, not bytes.
#[must_use]
pub fn edit_distance(lhs: &str, rhs: &str) -> usize {
    strsim::osa_distance(lhs, rhs)
}
