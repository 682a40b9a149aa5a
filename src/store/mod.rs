// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: loading, normalizing, and filtering school records.
//!
//! Loading is soft-fail by design. A missing file, an unreadable workbook,
//! a truncated CSV - all of them come back as an *empty* dataset, never an
//! error. The caller checks `is_empty()` and offers the upload fallback
//! (`Dataset::from_bytes`). This mirrors the store's one real contract:
//! after `load`, you always hold a usable, immutable `Dataset`.
//!
//! Column handling is equally forgiving. Expected columns that are missing
//! substitute empty strings; placeholder index columns ("Unnamed: 0") are
//! dropped; headers and cells are whitespace-trimmed.

mod management;
mod table;

pub use management::{classify_management, NOT_AVAILABLE};
pub use table::Table;

use crate::types::{SchoolRecord, ALL_DISTRICTS};
use std::path::Path;

use table::is_placeholder_header;

// Expected source columns. Matched case-sensitively after header trimming;
// any of them may be absent.
const COL_NAME: &str = "school_name";
const COL_VILLAGE: &str = "village";
const COL_DISTRICT: &str = "district";
const COL_BLOCK: &str = "block";
const COL_MANAGEMENT: &str = "state_mgmt";
const COL_CATEGORY: &str = "school_category";
const COL_TYPE: &str = "school_type";
const COL_STATUS: &str = "school_status";
const COL_UDISE: &str = "udise_code";

/// How to parse an in-memory byte stream (the upload fallback path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Excel workbook (`.xlsx`/`.xls`), first worksheet.
    Workbook,
    /// Comma-separated values with a header row.
    Csv,
}

/// The normalized, read-only record collection.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SchoolRecord>,
}

impl Dataset {
    /// Load a dataset from a file path.
    ///
    /// Format is chosen by extension: `.csv` goes through the CSV reader,
    /// everything else is treated as a workbook. Any failure - missing
    /// file, corrupt content - yields an empty dataset.
    pub fn load(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        let parsed = if is_csv {
            std::fs::File::open(path).ok().and_then(table::read_csv)
        } else {
            table::read_workbook(path)
        };
        parsed.map(Self::from_table).unwrap_or_default()
    }

    /// Load a dataset from an uploaded byte stream.
    ///
    /// Identical normalization to `load`; only the byte source differs.
    pub fn from_bytes(bytes: &[u8], format: SourceFormat) -> Self {
        let parsed = match format {
            SourceFormat::Workbook => table::read_workbook_bytes(bytes),
            SourceFormat::Csv => table::read_csv(bytes),
        };
        parsed.map(Self::from_table).unwrap_or_default()
    }

    /// Build a dataset from records directly (tests, programmatic use).
    pub fn from_records(records: Vec<SchoolRecord>) -> Self {
        Self { records }
    }

    /// Normalize a parsed table into records.
    ///
    /// Placeholder columns are dropped, each expected column is located
    /// once, and every row is coerced with empty-string fallbacks - a row
    /// can never fail to convert.
    pub fn from_table(table: Table) -> Self {
        let locate = |name: &str| -> Option<usize> {
            table
                .headers
                .iter()
                .position(|h| !is_placeholder_header(h) && h == name)
        };
        let name_idx = locate(COL_NAME);
        let village_idx = locate(COL_VILLAGE);
        let district_idx = locate(COL_DISTRICT);
        let block_idx = locate(COL_BLOCK);
        let management_idx = locate(COL_MANAGEMENT);
        let category_idx = locate(COL_CATEGORY);
        let type_idx = locate(COL_TYPE);
        let status_idx = locate(COL_STATUS);
        let udise_idx = locate(COL_UDISE);

        let records = table
            .rows
            .iter()
            .map(|row| {
                let cell = |idx: Option<usize>| -> &str {
                    idx.and_then(|i| row.get(i)).map_or("", String::as_str)
                };
                SchoolRecord::new(
                    cell(name_idx),
                    cell(district_idx),
                    cell(block_idx),
                    cell(village_idx),
                    cell(management_idx),
                    cell(category_idx),
                    cell(type_idx),
                    cell(status_idx),
                    cell(udise_idx),
                )
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[SchoolRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted unique non-empty district names.
    pub fn districts(&self) -> Vec<String> {
        let mut districts: Vec<String> = self
            .records
            .iter()
            .filter(|r| !r.district.is_empty())
            .map(|r| r.district.clone())
            .collect();
        districts.sort();
        districts.dedup();
        districts
    }

    /// Restrict to one district: case-insensitive, whitespace-trimmed exact
    /// match. The `"All Districts"` sentinel returns the dataset unchanged.
    pub fn filter_by_district(&self, district: &str) -> Self {
        let wanted = district.trim();
        if wanted == ALL_DISTRICTS {
            return self.clone();
        }
        let wanted = wanted.to_lowercase();
        Self {
            records: self
                .records
                .iter()
                .filter(|r| r.district.to_lowercase() == wanted)
                .cloned()
                .collect(),
        }
    }

    /// Restrict to records whose village contains `needle`
    /// (case-insensitive, via the village shadow field). Blank input is a
    /// no-op.
    pub fn filter_by_village(&self, needle: &str) -> Self {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return self.clone();
        }
        Self {
            records: self
                .records
                .iter()
                .filter(|r| r.village_contains(&needle))
                .cloned()
                .collect(),
        }
    }
}
