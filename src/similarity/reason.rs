// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! The [`Reason`] type explains which signal produced a similarity score.

use serde::{Serialize, Serializer};
use std::fmt;

/// Human-readable explanation attached to a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The query or the candidate was empty.
    EmptyInput,
    /// Both names are identical after normalization.
    ExactMatch,
    /// Both names only differ in Turkish diacritics (e.g. "ş" and "s").
    DiacriticDifference,
    /// The names differ in a single character edit.
    SingleEdit,
    /// The query words written together are the candidate words written together.
    CombinedForm,
    /// The names sound alike.
    Phonetic,
    /// A candidate word starts with the query and is longer than it.
    StemExtension,
    /// The query starts with a candidate word and is longer than it.
    StemContained,
    /// The single query word is the only candidate word.
    SingleWord,
    /// The single query word only matches a generic candidate word.
    GenericWord,
    /// The single query word matches one of several candidate words.
    WordAmongOthers {
        /// Number of other words in the candidate.
        others: usize,
    },
    /// Some query words match candidate words.
    WordCoverage {
        /// Number of matched query words.
        matched: usize,
        /// Number of query words.
        total: usize,
    },
    /// A query word matches a candidate word approximately.
    FuzzyWord,
    /// No query word matches any candidate word.
    NoCommonWords,
    /// Some similarity remains, but no query word matches a candidate word.
    Similarity,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::ExactMatch => write!(f, "exact match"),
            Self::DiacriticDifference => write!(f, "diacritic difference"),
            Self::SingleEdit => write!(f, "single character difference"),
            Self::CombinedForm => write!(f, "same words written together"),
            Self::Phonetic => write!(f, "phonetic similarity"),
            Self::StemExtension => write!(f, "candidate extends query word"),
            Self::StemContained => write!(f, "query extends candidate word"),
            Self::SingleWord => write!(f, "word match"),
            Self::GenericWord => write!(f, "generic word match"),
            Self::WordAmongOthers { others: 1 } => write!(f, "word match with 1 other word"),
            Self::WordAmongOthers { others } => write!(f, "word match with {others} other words"),
            Self::WordCoverage { matched, total } => write!(f, "{matched}/{total} words match"),
            Self::FuzzyWord => write!(f, "approximate word match"),
            Self::NoCommonWords => write!(f, "no common words"),
            Self::Similarity => write!(f, "similarity"),
        }
    }
}

impl Serialize for Reason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_display() {
        assert_eq!(Reason::ExactMatch.to_string(), "exact match");
        assert_eq!(Reason::DiacriticDifference.to_string(), "diacritic difference");
        assert_eq!(
            Reason::WordCoverage {
                matched: 2,
                total: 3
            }
            .to_string(),
            "2/3 words match"
        );
    }

    #[test]
    fn test_reason_display_plural() {
        assert_eq!(
            Reason::WordAmongOthers { others: 1 }.to_string(),
            "word match with 1 other word"
        );
        assert_eq!(
            Reason::WordAmongOthers { others: 4 }.to_string(),
            "word match with 4 other words"
        );
    }

    #[test]
    fn test_reason_serialize() {
        let value = serde_json::to_value(Reason::Phonetic).unwrap();
        assert_eq!(value, serde_json::json!("phonetic similarity"));
    }
}
