// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Model catalog
//!
//! The read-only repository of model trust records. Built once at startup
//! from built-in defaults plus an optional user override file, then served
//! unchanged to every view.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trustlens::catalog::Catalog;
//!
//! let catalog = Catalog::new();
//!
//! for model in catalog.list_all() {
//!     println!("{}: {:.1}", model.name, model.trust_score);
//! }
//!
//! if let Some(model) = catalog.find_by_slug("gpt-4o") {
//!     println!("{}", model.name);
//! }
//! ```

pub mod loader;
pub mod schema;

pub use loader::Catalog;
pub use schema::{CatalogConfig, ModelEntry, ModelRecord};
