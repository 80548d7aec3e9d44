// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Error types for Trustlens
//!
//! The query core is total: lookups return `Option` and filters return
//! empty collections, so errors only arise at the boundaries (malformed
//! catalog files, unknown sort fields, unknown slugs passed to the CLI).

use thiserror::Error;

/// Main error type for Trustlens operations
#[derive(Error, Debug)]
pub enum TrustlensError {
    /// Catalog configuration errors (unreadable or invalid catalog.toml)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Requested model slug does not exist in the catalog
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Invalid input at the CLI boundary (e.g. an unknown sort field)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Trustlens operations
pub type Result<T> = std::result::Result<T, TrustlensError>;
