// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! CLI module for Trustlens
//!
//! Handles command-line argument parsing and command dispatch.

pub mod args;

pub use args::*;
