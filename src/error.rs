// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI-boundary errors.
//!
//! Dataset problems are deliberately NOT errors: a missing or malformed
//! source loads as an empty `Dataset` and the caller reports it as a
//! recoverable state (see `store::Dataset::load`). This enum only covers
//! failures the process cannot recover from at its own boundary - a broken
//! stdin pipe, unwritable stdout.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShalaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShalaError>;
