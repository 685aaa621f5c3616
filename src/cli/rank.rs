// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `rank` CLI subcommand.

use super::ui;
use crate::rank::{rank_candidates, RankingOptions};
use crate::{Config, OutputFormat};
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

/// Command line arguments for the `rank` CLI command.
#[derive(Parser, Debug)]
pub struct Args {
    /// The search query.
    query: String,
    /// File with one candidate name per line (reads from stdin if omitted).
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Print the results as JSON.
    #[arg(long)]
    json: bool,
    /// Hide candidates with a lower score.
    #[arg(long)]
    min_score: Option<u8>,
    /// Maximum number of listed candidates (`0` lists all of them).
    #[arg(long)]
    limit: Option<usize>,
}

impl Args {
    /// Ranking options from the configuration, overridden by the command line.
    fn ranking_options(&self, config: &Config) -> RankingOptions {
        let mut options = RankingOptions::from_config(config);
        if let Some(min_score) = self.min_score {
            options.min_score = min_score;
        }
        if let Some(limit) = self.limit {
            options.limit = Some(limit).filter(|&x| x != 0);
        }
        options
    }

    /// Read the candidate list from the input file or stdin.
    fn read_input(&self) -> io::Result<String> {
        if let Some(path) = &self.input {
            return std::fs::read_to_string(path);
        }

        let mut text = String::new();
        let _ = io::stdin().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Split the input into candidate names, skipping blank lines.
fn candidate_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Run the `rank` command.
#[expect(clippy::needless_pass_by_value)]
pub fn run(config: &Config, args: Args) -> crate::Result<()> {
    let text = args.read_input()?;
    let options = args.ranking_options(config);
    let ranked = rank_candidates(&args.query, candidate_lines(&text), &options);

    if args.json || config.output_format() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    let conflicts = ranked.iter().filter(|item| item.conflict).count();
    ui::print_ranked(&ranked, options.conflict_threshold, config.use_color());
    log::info!(
        "{} candidates listed, {conflicts} at or above the notification threshold",
        ranked.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_lines_skip_blank() {
        let text = "ahmet\n\n  \nahmetler  \r\n mekanika\n";
        assert_eq!(
            candidate_lines(text).collect::<Vec<_>>(),
            vec!["ahmet", "ahmetler", "mekanika"]
        );
    }

    #[test]
    fn test_ranking_options_override() {
        let args = Args::parse_from(["rank", "ahmet", "--min-score", "30", "--limit", "0"]);
        let options = args.ranking_options(&Config::default());
        assert_eq!(options.min_score, 30);
        assert_eq!(options.limit, None);
        assert_eq!(options.conflict_threshold, 65);
    }

    #[test]
    fn test_ranking_options_from_config() {
        let args = Args::parse_from(["rank", "ahmet"]);
        let options = args.ranking_options(&Config::default());
        assert_eq!(options, RankingOptions::default());
    }
}
