// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! User Interface (UI) utilities.

use crate::rank::RankedCandidate;
use crate::ScoreDetails;
use crossterm::style::{Color, Stylize};
use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

/// Candidate names wider than this are not padded further.
const MAX_NAME_WIDTH: usize = 40;

/// Get the color associated with the score.
///
/// Scores at or above the notification threshold are potential conflicts.
pub fn score_color(score: u8, threshold: u8) -> Color {
    if score >= threshold {
        Color::Red
    } else if score >= threshold / 2 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Format the score, optionally colored.
pub fn format_score(score: u8, threshold: u8, color: bool) -> String {
    let text = format!("{score:>3}");
    if color {
        text.with(score_color(score, threshold)).to_string()
    } else {
        text
    }
}

/// Pad the text with spaces to the given display width.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

/// Format the matched words as a comma-separated list.
pub fn format_matched_tokens(tokens: &[String]) -> String {
    tokens.iter().join(", ")
}

/// Format the partial scores.
pub fn format_details(details: &ScoreDetails) -> String {
    format!(
        "token {:.1} | char {:.1} | phonetic {:.1} | morph {:.1}",
        details.token_score, details.char_score, details.phonetic_score, details.morph_score
    )
}

/// Print the ranked candidates as aligned table.
pub fn print_ranked(ranked: &[RankedCandidate<'_>], threshold: u8, color: bool) {
    let name_width = ranked
        .iter()
        .map(|item| item.candidate.width())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);

    for item in ranked {
        let marker = if item.conflict { "!" } else { " " };
        println!(
            "{marker} {} {} {}",
            format_score(item.result.score, threshold, color),
            pad_to_width(item.candidate, name_width),
            item.result.reason,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color() {
        assert_eq!(score_color(100, 65), Color::Red);
        assert_eq!(score_color(65, 65), Color::Red);
        assert_eq!(score_color(40, 65), Color::Yellow);
        assert_eq!(score_color(10, 65), Color::Green);
    }

    #[test]
    fn test_format_score_plain() {
        assert_eq!(format_score(7, 65, false), "  7");
        assert_eq!(format_score(100, 65, false), "100");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ışık", 6), "ışık  ");
        assert_eq!(pad_to_width("ahmetler", 4), "ahmetler");
    }

    #[test]
    fn test_format_matched_tokens() {
        let tokens = vec![String::from("coca"), String::from("cola")];
        assert_eq!(format_matched_tokens(&tokens), "coca, cola");
        assert_eq!(format_matched_tokens(&[]), "");
    }

    #[test]
    fn test_format_details() {
        let details = ScoreDetails {
            token_score: 100.0,
            char_score: 95.0,
            phonetic_score: 0.0,
            morph_score: 85.0,
        };
        assert_eq!(
            format_details(&details),
            "token 100.0 | char 95.0 | phonetic 0.0 | morph 85.0"
        );
    }
}
