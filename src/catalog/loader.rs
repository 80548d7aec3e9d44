// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Catalog loader
//!
//! Builds the in-memory model catalog from:
//! 1. Built-in defaults (always available)
//! 2. User config file (`~/.trustlens/catalog.toml`) for overrides/additions
//!
//! The catalog is constructed once at startup and read-only afterwards.
//! Definition order is the default display order and is stable across
//! calls to [`Catalog::list_all`].

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::schema::{CatalogConfig, ModelRecord};

/// The fixed, in-memory collection of model records.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Records in catalog-definition order
    models: Vec<ModelRecord>,
    /// Path to user config file (if one was loaded)
    config_path: Option<PathBuf>,
}

impl Catalog {
    /// Create a catalog with built-in defaults plus the user config, if any
    pub fn new() -> Self {
        let mut catalog = Self::with_defaults_only();

        if let Some(config_path) = Self::default_config_path() {
            if config_path.exists() {
                if let Err(e) = catalog.load_from_file(&config_path) {
                    tracing::warn!("Failed to load catalog.toml: {}", e);
                }
            }
        }

        catalog
    }

    /// Create a catalog with only built-in defaults (no user config)
    pub fn with_defaults_only() -> Self {
        Self {
            models: default_models(),
            config_path: None,
        }
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".trustlens/catalog.toml"))
    }

    /// Merge records from a TOML catalog file, user entries taking
    /// precedence by slug. Overridden records keep their catalog position;
    /// new slugs append in file order.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let config: CatalogConfig = toml::from_str(&content).map_err(|e| {
            crate::error::TrustlensError::Catalog(format!("Invalid catalog.toml: {}", e))
        })?;

        self.config_path = Some(path.to_path_buf());

        for entry in config.models {
            let record: ModelRecord = entry.into();
            match self.models.iter_mut().find(|m| m.slug == record.slug) {
                Some(existing) => *existing = record,
                None => self.models.push(record),
            }
        }

        Ok(())
    }

    /// Full record list in catalog-definition order
    pub fn list_all(&self) -> &[ModelRecord] {
        &self.models
    }

    /// Find a record by slug. Absence is a normal outcome, not an error.
    pub fn find_by_slug(&self, slug: &str) -> Option<&ModelRecord> {
        self.models.iter().find(|m| m.slug == slug)
    }

    /// First `count` records in catalog order, for the featured view
    pub fn featured(&self, count: usize) -> &[ModelRecord] {
        &self.models[..count.min(self.models.len())]
    }

    /// Path of the user config file that was merged in, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Generate a sample catalog.toml content
    pub fn generate_sample_config() -> String {
        r#"# Trustlens model catalog
# Entries here override or extend the built-in catalog, matched by slug.
# trust_score may be omitted; it defaults to
# factual_consistency - hallucination_rate.

# [[models]]
# slug = "my-model"
# name = "My Model"
# hallucination_rate = 3.2
# factual_consistency = 92.5
# answer_rate = 99.0
# avg_summary_length = 84.0
"#
        .to_string()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in default catalog.
///
/// Metric values are the precomputed benchmark snapshot this site
/// presents; they are not recomputed or refreshed at runtime.
fn default_models() -> Vec<ModelRecord> {
    vec![
        ModelRecord::new("gpt-4o", "GPT-4o")
            .with_hallucination_rate(1.5)
            .with_factual_consistency(96.8)
            .with_answer_rate(99.9)
            .with_summary_length(77.0),
        ModelRecord::new("gpt-4-turbo", "GPT-4 Turbo")
            .with_hallucination_rate(1.7)
            .with_factual_consistency(96.2)
            .with_answer_rate(100.0)
            .with_summary_length(86.0),
        ModelRecord::new("gpt-3-5-turbo", "GPT-3.5 Turbo")
            .with_hallucination_rate(1.9)
            .with_factual_consistency(95.8)
            .with_answer_rate(99.6)
            .with_summary_length(84.0),
        ModelRecord::new("claude-3-5-sonnet", "Claude 3.5 Sonnet")
            .with_hallucination_rate(4.6)
            .with_factual_consistency(94.1)
            .with_answer_rate(100.0)
            .with_summary_length(95.0),
        ModelRecord::new("llama-3-1-405b", "Llama 3.1 405B")
            .with_hallucination_rate(3.9)
            .with_factual_consistency(93.5)
            .with_answer_rate(99.6)
            .with_summary_length(85.0),
        ModelRecord::new("gemini-1-5-pro", "Gemini 1.5 Pro")
            .with_hallucination_rate(4.6)
            .with_factual_consistency(93.9)
            .with_answer_rate(98.8)
            .with_summary_length(82.0),
        ModelRecord::new("mistral-large-2", "Mistral Large 2")
            .with_hallucination_rate(4.1)
            .with_factual_consistency(92.8)
            .with_answer_rate(100.0)
            .with_summary_length(77.0),
        ModelRecord::new("llama-3-1-70b", "Llama 3.1 70B")
            .with_hallucination_rate(5.4)
            .with_factual_consistency(92.3)
            .with_answer_rate(99.9)
            .with_summary_length(79.0),
        ModelRecord::new("gemini-1-5-flash", "Gemini 1.5 Flash")
            .with_hallucination_rate(6.6)
            .with_factual_consistency(91.2)
            .with_answer_rate(99.3)
            .with_summary_length(60.0),
        ModelRecord::new("phi-3-mini", "Phi-3 Mini")
            .with_hallucination_rate(4.7)
            .with_factual_consistency(91.5)
            .with_answer_rate(98.9)
            .with_summary_length(69.0),
        ModelRecord::new("claude-3-opus", "Claude 3 Opus")
            .with_hallucination_rate(10.1)
            .with_factual_consistency(87.4)
            .with_answer_rate(95.5)
            .with_summary_length(92.0),
        ModelRecord::new("command-r-plus", "Command R+")
            .with_hallucination_rate(17.1)
            .with_factual_consistency(81.2)
            .with_answer_rate(99.4)
            .with_summary_length(71.0),
    ]
}
