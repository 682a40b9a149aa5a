// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search context: one dataset, one scorer, explicit replacement.
//!
//! `SchoolFinder` is the object callers hold for the lifetime of a session.
//! It owns the immutable dataset and the scorer; swapping in an uploaded
//! dataset is a wholesale `replace_dataset`, never a partial mutation.
//!
//! `search` returns a `SearchOutcome` instead of a bare result list because
//! the caller has to tell four "nothing to show" situations apart: no data
//! loaded, no query typed, a district with no records, and a real search
//! that cleared nobody over the threshold. Each renders differently at the
//! presentation boundary.

use crate::rank::{rank, RankParams, Scorer, WeightedRatio};
use crate::store::Dataset;
use crate::types::MatchResult;

/// Outcome of one search interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The dataset is empty - nothing was loaded, offer the upload path.
    EmptyDataset,
    /// Empty or whitespace-only query: no search was performed.
    NoQuery,
    /// The selected district has no records; matching was not attempted.
    EmptyDistrict { district: String },
    /// Search ran but nothing scored at or above the threshold.
    NoMatches { threshold: u8 },
    /// Ordered matches, highest confidence first.
    Matches(Vec<MatchResult>),
}

/// Search context owning the dataset and the scorer.
pub struct SchoolFinder {
    dataset: Dataset,
    scorer: Box<dyn Scorer>,
}

impl SchoolFinder {
    /// Context with the default `WeightedRatio` scorer.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_scorer(dataset, Box::new(WeightedRatio))
    }

    /// Context with a custom scorer.
    pub fn with_scorer(dataset: Dataset, scorer: Box<dyn Scorer>) -> Self {
        Self { dataset, scorer }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Replace the dataset wholesale (the upload path). The previous
    /// dataset is dropped; there is no partial update.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    /// Run one query against one district selection.
    pub fn search(&self, query: &str, district: &str, params: &RankParams) -> SearchOutcome {
        if self.dataset.is_empty() {
            return SearchOutcome::EmptyDataset;
        }
        if query.trim().is_empty() {
            return SearchOutcome::NoQuery;
        }

        let subset = self.dataset.filter_by_district(district);
        if subset.is_empty() {
            return SearchOutcome::EmptyDistrict {
                district: district.trim().to_string(),
            };
        }

        let results = rank(query, subset.records(), params, self.scorer.as_ref());
        if results.is_empty() {
            SearchOutcome::NoMatches {
                threshold: params.threshold,
            }
        } else {
            SearchOutcome::Matches(results)
        }
    }
}
