// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for search results and dataset summaries.
//!
//! Colors are plain ANSI, gated on stdout being a TTY and `NO_COLOR` being
//! unset, so piped output stays clean. Each result renders as a short card:
//! name and confidence on the first line, location and management details
//! beneath, and the outbound verification link last. The link is pure
//! display glue - the identifier interpolated into a fixed URL template.

use shala::{classify_management, Dataset, MatchResult, SearchOutcome};
use std::collections::BTreeMap;

/// URL template for verifying a record against the national directory.
const VERIFY_URL: &str = "https://udiseplus.gov.in/school/SchoolDirectory?udisecode=";

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Colors only when stdout is a TTY and NO_COLOR is unset.
fn use_color() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none()
}

fn paint(text: &str, color: &str) -> String {
    if use_color() {
        format!("{}{}{}", color, text, RESET)
    } else {
        text.to_string()
    }
}

/// Confidence band color: 90+ green, threshold-ish yellow, below red.
fn confidence_color(score: u8) -> &'static str {
    match score {
        90..=100 => GREEN,
        75..=89 => YELLOW,
        _ => RED,
    }
}

/// Build the outbound verification link for a record identifier.
pub fn verify_link(udise_code: &str) -> String {
    format!("{}{}", VERIFY_URL, udise_code)
}

/// Report an empty dataset and point at the upload path.
pub fn warn_empty_dataset(input: &str) {
    eprintln!("⚠ No records loaded from '{}'.", input);
    eprintln!("  Check the path, or pipe the file in: shala search <QUERY> --input - --format xlsx < file.xlsx");
}

/// Render one search outcome. Every state prints something distinct - the
/// user can always tell "no search" from "searched, found nothing".
pub fn render_outcome(outcome: &SearchOutcome, query: &str) {
    match outcome {
        SearchOutcome::EmptyDataset => {
            // The CLI checks emptiness before searching; this state is
            // reachable through library-driven flows.
            eprintln!("⚠ No records loaded.");
        }
        SearchOutcome::NoQuery => {
            println!("Type a school name to search. Nothing was looked up.");
        }
        SearchOutcome::EmptyDistrict { district } => {
            println!(
                "No schools found in district '{}'. Try 'All Districts' or a different district.",
                district
            );
        }
        SearchOutcome::NoMatches { threshold } => {
            println!(
                "No strong matches for '{}' (>= {}%). Add more of the name or change district.",
                query, threshold
            );
        }
        SearchOutcome::Matches(results) => {
            println!(
                "{} match(es) for '{}', best first:\n",
                results.len(),
                query
            );
            for (index, result) in results.iter().enumerate() {
                render_result(index + 1, result);
            }
        }
    }
}

fn render_result(position: usize, result: &MatchResult) {
    let record = &result.record;
    let confidence = paint(
        &format!("{:>3}%", result.score),
        confidence_color(result.score),
    );
    println!("{:>2}. {} {}", position, paint(&record.name, BOLD), confidence);

    let mut location: Vec<&str> = Vec::new();
    for part in [&record.village, &record.block, &record.district] {
        if !part.is_empty() {
            location.push(part);
        }
    }
    if !location.is_empty() {
        println!("    {}", paint(&location.join(" / "), CYAN));
    }

    let mut details: Vec<String> = Vec::new();
    if !record.udise_code.is_empty() {
        details.push(format!("UDISE {}", record.udise_code));
    }
    details.push(format!("Management: {}", classify_management(&record.management)));
    if !record.status.is_empty() {
        details.push(format!("Status: {}", record.status));
    }
    println!("    {}", details.join("  ·  "));

    if !record.udise_code.is_empty() {
        println!("    {}", paint(&verify_link(&record.udise_code), DIM));
    }
    println!();
}

/// Sorted district list with record counts.
pub fn render_districts(dataset: &Dataset) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in dataset.records() {
        if !record.district.is_empty() {
            *counts.entry(record.district.as_str()).or_insert(0) += 1;
        }
    }
    println!("{} district(s), {} record(s):\n", counts.len(), dataset.len());
    for (district, count) in &counts {
        println!("  {:<30} {:>6}", district, count);
    }
}

/// Dataset summary: size, districts, management breakdown.
pub fn render_inspect(dataset: &Dataset) {
    println!("Records:   {}", dataset.len());
    println!("Districts: {}", dataset.districts().len());

    let mut managements: BTreeMap<String, usize> = BTreeMap::new();
    for record in dataset.records() {
        *managements
            .entry(classify_management(&record.management))
            .or_insert(0) += 1;
    }
    println!("\nManagement breakdown:");
    let mut rows: Vec<(String, usize)> = managements.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (label, count) in rows {
        println!("  {:<30} {:>6}", label, count);
    }
}
