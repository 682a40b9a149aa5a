// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: school records and match results.
//!
//! A `SchoolRecord` is one row of the source directory. Every text field is
//! stored trimmed; two lowercased shadow copies (`name_lower`,
//! `village_lower`) are derived at construction and used only for containment
//! pre-filtering. The shadows never serialize and never reach the display
//! layer - if you need the name, use `name`.

use serde::Serialize;

/// Sentinel district value that bypasses district filtering entirely.
pub const ALL_DISTRICTS: &str = "All Districts";

/// One row of the school directory.
///
/// No uniqueness is enforced on `name`; the ranker collapses duplicate names
/// to the highest-scoring record at result time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolRecord {
    /// School name - the only field required for matching.
    pub name: String,
    /// Administrative district, the exact-match filter key.
    pub district: String,
    /// Block within the district.
    pub block: String,
    /// Village or locality.
    pub village: String,
    /// Free-text management category as it appears in the source
    /// (see `store::classify_management` for the normalized label).
    pub management: String,
    /// School category (e.g. "Primary", "Upper Primary").
    pub category: String,
    /// School type (e.g. "Co-educational").
    pub school_type: String,
    /// Operational status.
    pub status: String,
    /// External identifier used to build the verification link.
    pub udise_code: String,

    // Shadow fields: lowercased copies for containment pre-filtering only.
    #[serde(skip)]
    name_lower: String,
    #[serde(skip)]
    village_lower: String,
}

impl SchoolRecord {
    /// Build a record from already-extracted field values.
    ///
    /// Fields are trimmed here so every downstream consumer can assume clean
    /// text, and the lowercase shadows are derived from the trimmed values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        district: &str,
        block: &str,
        village: &str,
        management: &str,
        category: &str,
        school_type: &str,
        status: &str,
        udise_code: &str,
    ) -> Self {
        let name = name.trim().to_string();
        let village = village.trim().to_string();
        let name_lower = name.to_lowercase();
        let village_lower = village.to_lowercase();
        Self {
            name,
            district: district.trim().to_string(),
            block: block.trim().to_string(),
            village,
            management: management.trim().to_string(),
            category: category.trim().to_string(),
            school_type: school_type.trim().to_string(),
            status: status.trim().to_string(),
            udise_code: udise_code.trim().to_string(),
            name_lower,
            village_lower,
        }
    }

    /// Containment test against the lowercased name shadow.
    ///
    /// `needle` must already be lowercased - the caller folds the query once
    /// instead of per record.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name_lower.contains(needle)
    }

    /// Containment test against the lowercased village shadow.
    pub fn village_contains(&self, needle: &str) -> bool {
        self.village_lower.contains(needle)
    }
}

/// A record paired with its match confidence.
///
/// Scores are integers in `0..=100`; higher means closer. Result sequences
/// are ordered score-descending with discovery order breaking ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub record: SchoolRecord,
    /// Confidence in `0..=100`.
    pub score: u8,
}
