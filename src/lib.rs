// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant school directory search.
//!
//! Point it at a tabular directory export (workbook or CSV), type an
//! approximate school name, get back the few records that plausibly match,
//! each with an integer confidence. District narrowing, duplicate-name
//! collapsing, and a hard result cap keep the output small enough to eyeball.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   store/     │────▶│    rank/     │────▶│  finder.rs   │
//! │ (Dataset:    │     │ (Scorer,     │     │ (SchoolFinder│
//! │ load/filter) │     │  rank)       │     │  + outcomes) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!         │                    │
//!         ▼                    ▼
//! ┌─────────────────────────────────────────┐
//! │               types.rs                  │
//! │   (SchoolRecord, MatchResult,           │
//! │    shadow fields, ALL_DISTRICTS)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use shala::{Dataset, RankParams, SchoolFinder, SearchOutcome};
//!
//! let finder = SchoolFinder::new(Dataset::load("schools.xlsx".as_ref()));
//! match finder.search("mysoor school", "Mysuru", &RankParams::default()) {
//!     SearchOutcome::Matches(results) => { /* render */ }
//!     other => { /* report the empty state */ }
//! }
//! ```

pub mod error;
mod finder;
pub mod rank;
pub mod store;
mod types;

// Re-exports for the public API
pub use error::{Result, ShalaError};
pub use finder::{SchoolFinder, SearchOutcome};
pub use rank::{rank, RankParams, Scorer, WeightedRatio};
pub use store::{classify_management, Dataset, SourceFormat};
pub use types::{MatchResult, SchoolRecord, ALL_DISTRICTS};
