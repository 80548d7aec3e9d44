// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Trustlens - trust metrics explorer for language models.
//!
//! This crate exposes the query core used by the `trustlens` CLI
//! (`src/main.rs`):
//! - `catalog`: the fixed model catalog with slug lookup
//! - `tier`: trust-score badge classification
//! - `rank`: search filtering and stable multi-field sorting
//! - `compare`: head-to-head winner and radar axis scores
//! - `report`: narrative profile text for a single model
//!
//! Every query is a pure function over the read-only catalog; the only
//! state in the system is the per-view sort selection, which callers own
//! (see [`rank::SortSpec`]).

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod compare;
pub mod error;
pub mod rank;
pub mod report;
pub mod tier;

pub use error::{Result, TrustlensError};
