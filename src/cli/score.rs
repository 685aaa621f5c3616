// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `score` CLI subcommand.

use super::ui;
use crate::{score_similarity, Config, OutputFormat};
use clap::Parser;

/// Command line arguments for the `score` CLI command.
#[derive(Parser, Debug)]
pub struct Args {
    /// The search query.
    query: String,
    /// The candidate name to compare the query with.
    candidate: String,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

/// Run the `score` command.
#[expect(clippy::needless_pass_by_value)]
pub fn run(config: &Config, args: Args) -> crate::Result<()> {
    let result = score_similarity(&args.query, &args.candidate);

    if args.json || config.output_format() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let threshold = config.notification_threshold();
    let conflict = result.score >= threshold;
    println!(
        "{} {}{}",
        ui::format_score(result.score, threshold, config.use_color()),
        result.reason,
        if conflict { " (conflict)" } else { "" },
    );
    if !result.matched_tokens.is_empty() {
        println!(
            "matched: {}",
            ui::format_matched_tokens(&result.matched_tokens)
        );
    }
    println!("{}", ui::format_details(&result.details));

    Ok(())
}
