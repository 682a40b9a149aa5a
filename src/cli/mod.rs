// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shala command-line interface.
//!
//! Three subcommands: `search` to query the directory, `districts` to list
//! the filterable districts, and `inspect` to summarize a dataset. Every
//! subcommand accepts `--input -` to read the source bytes from stdin (the
//! upload path), with `--format` choosing the parser since there is no file
//! extension to go by.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use shala::{SourceFormat, ALL_DISTRICTS};

#[derive(Parser)]
#[command(
    name = "shala",
    about = "Typo-tolerant school directory search",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for a school by approximate name (typos allowed)
    Search {
        /// Free-text school name query
        query: String,

        /// Directory export to search; `-` reads bytes from stdin
        #[arg(short, long, default_value = "schools.xlsx")]
        input: String,

        /// District to search within (exact name, case-insensitive)
        #[arg(short, long, default_value = ALL_DISTRICTS)]
        district: String,

        /// Keep only records whose village contains this text
        #[arg(long)]
        village: Option<String>,

        /// Minimum confidence (0-100) for a result to be shown
        ///
        /// 75 favors precision; drop to 60 when recall matters more than
        /// accuracy.
        #[arg(short, long, default_value = "75")]
        threshold: u8,

        /// Maximum number of results
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// Source format when reading from stdin
        #[arg(long, value_enum, default_value = "xlsx")]
        format: InputFormat,

        /// Emit results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List districts present in the dataset with record counts
    Districts {
        /// Directory export; `-` reads bytes from stdin
        #[arg(short, long, default_value = "schools.xlsx")]
        input: String,

        /// Source format when reading from stdin
        #[arg(long, value_enum, default_value = "xlsx")]
        format: InputFormat,
    },

    /// Summarize a dataset: size, districts, management breakdown
    Inspect {
        /// Directory export; `-` reads bytes from stdin
        #[arg(short, long, default_value = "schools.xlsx")]
        input: String,

        /// Source format when reading from stdin
        #[arg(long, value_enum, default_value = "xlsx")]
        format: InputFormat,
    },
}

/// Byte-stream format for `--input -`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InputFormat {
    /// Excel workbook (`.xlsx`/`.xls`)
    Xlsx,
    /// Comma-separated values with a header row
    Csv,
}

impl From<InputFormat> for SourceFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Xlsx => SourceFormat::Workbook,
            InputFormat::Csv => SourceFormat::Csv,
        }
    }
}
