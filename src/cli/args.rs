// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Trustlens.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::rank::{SortDirection, SortField};

/// Trustlens - trust metrics for language models in your terminal
#[derive(Parser, Debug)]
#[command(name = "trustlens")]
#[command(version, about = "Trust metrics for language models in your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog file to merge over the built-in defaults
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show featured models (default when no command given)
    Top(TopArgs),

    /// List the full dataset with search and sorting
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one model's full profile
    Show(ShowArgs),

    /// Compare two models side by side
    Compare(CompareArgs),

    /// Write a sample user catalog file to ~/.trustlens/catalog.toml
    Init,
}

/// Arguments for the top subcommand
#[derive(clap::Args, Debug)]
pub struct TopArgs {
    /// Number of featured models to show
    #[arg(short = 'n', long, default_value_t = 6)]
    pub count: usize,
}

impl Default for TopArgs {
    fn default() -> Self {
        Self { count: 6 }
    }
}

/// Arguments for the list subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Filter models by a case-insensitive name substring
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Field to sort by
    #[arg(short = 'f', long = "sort", value_enum)]
    pub sort_field: Option<SortField>,

    /// Sort direction
    #[arg(short, long, value_enum)]
    pub direction: Option<SortDirection>,
}

/// Arguments for the show subcommand
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Model slug (e.g. "gpt-4o")
    pub slug: String,
}

/// Arguments for the compare subcommand
#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    /// First model slug
    pub slug_a: String,

    /// Second model slug
    pub slug_b: String,
}

/// Output format for responses
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
