// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use shala::{Dataset, RankParams, Result, SchoolFinder, SearchOutcome};
use std::io::Read;
use std::path::Path;

mod cli;
use cli::{display, Cli, Commands, InputFormat};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            query,
            input,
            district,
            village,
            threshold,
            limit,
            format,
            json,
        } => {
            let dataset = load_dataset(&input, format)?;
            if dataset.is_empty() {
                display::warn_empty_dataset(&input);
                return Ok(());
            }

            // Village narrowing happens before the finder sees the data;
            // an emptied-out narrowing is its own user-visible state.
            let dataset = match village {
                Some(ref needle) => {
                    let narrowed = dataset.filter_by_village(needle);
                    if narrowed.is_empty() {
                        println!("No schools with village containing '{}'.", needle.trim());
                        return Ok(());
                    }
                    narrowed
                }
                None => dataset,
            };

            let finder = SchoolFinder::new(dataset);
            let params = RankParams {
                threshold,
                max_results: limit,
            };
            let outcome = finder.search(&query, &district, &params);

            if json {
                let results = match &outcome {
                    SearchOutcome::Matches(results) => results.as_slice(),
                    _ => &[],
                };
                println!("{}", serde_json::to_string_pretty(results)?);
            } else {
                display::render_outcome(&outcome, &query);
            }
        }

        Commands::Districts { input, format } => {
            let dataset = load_dataset(&input, format)?;
            if dataset.is_empty() {
                display::warn_empty_dataset(&input);
                return Ok(());
            }
            display::render_districts(&dataset);
        }

        Commands::Inspect { input, format } => {
            let dataset = load_dataset(&input, format)?;
            if dataset.is_empty() {
                display::warn_empty_dataset(&input);
                return Ok(());
            }
            display::render_inspect(&dataset);
        }
    }

    Ok(())
}

/// Load from a path, or from stdin bytes when `input` is `-`.
///
/// Path loading is soft-fail (an unreadable source is an empty dataset, the
/// caller prints the hint); only the stdin read itself can error here.
fn load_dataset(input: &str, format: InputFormat) -> Result<Dataset> {
    if input == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        Ok(Dataset::from_bytes(&bytes, format.into()))
    } else {
        Ok(Dataset::load(Path::new(input)))
    }
}
