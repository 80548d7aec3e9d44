// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Catalog record schema
//!
//! Defines the model record carried by the catalog and the TOML structure
//! for user catalog overrides (`~/.trustlens/catalog.toml`).

use serde::{Deserialize, Serialize};

/// A single model's trust metrics.
///
/// Records are immutable once the catalog is built. `trust_score` is
/// derived as `factual_consistency - hallucination_rate` and is the
/// single ordering key whenever two models are compared for "goodness".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Unique stable identifier, used as primary key and URL key
    pub slug: String,

    /// Human-readable display name (not guaranteed unique)
    pub name: String,

    /// Percentage in [0,100], lower is better
    pub hallucination_rate: f64,

    /// Percentage in [0,100], higher is better
    pub factual_consistency: f64,

    /// Percentage in [0,100], higher is better
    pub answer_rate: f64,

    /// Average response length in words, informational only
    pub avg_summary_length: f64,

    /// Derived score, `factual_consistency - hallucination_rate`
    pub trust_score: f64,
}

impl ModelRecord {
    /// Create a new record with zeroed metrics
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            hallucination_rate: 0.0,
            factual_consistency: 0.0,
            answer_rate: 0.0,
            avg_summary_length: 0.0,
            trust_score: 0.0,
        }
    }

    /// Builder: set hallucination rate (recomputes trust score)
    pub fn with_hallucination_rate(mut self, pct: f64) -> Self {
        self.hallucination_rate = pct;
        self.trust_score = self.factual_consistency - self.hallucination_rate;
        self
    }

    /// Builder: set factual consistency (recomputes trust score)
    pub fn with_factual_consistency(mut self, pct: f64) -> Self {
        self.factual_consistency = pct;
        self.trust_score = self.factual_consistency - self.hallucination_rate;
        self
    }

    /// Builder: set answer rate
    pub fn with_answer_rate(mut self, pct: f64) -> Self {
        self.answer_rate = pct;
        self
    }

    /// Builder: set average summary length in words
    pub fn with_summary_length(mut self, words: f64) -> Self {
        self.avg_summary_length = words;
        self
    }
}

/// A catalog entry as written in catalog.toml.
///
/// `trust_score` is optional in the file; when omitted it is derived
/// from the other two metrics on conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    pub slug: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub hallucination_rate: f64,

    #[serde(default)]
    pub factual_consistency: f64,

    #[serde(default)]
    pub answer_rate: f64,

    #[serde(default)]
    pub avg_summary_length: f64,

    #[serde(default)]
    pub trust_score: Option<f64>,
}

impl From<ModelEntry> for ModelRecord {
    fn from(entry: ModelEntry) -> Self {
        let trust_score = entry
            .trust_score
            .unwrap_or(entry.factual_consistency - entry.hallucination_rate);
        let name = if entry.name.is_empty() {
            entry.slug.clone()
        } else {
            entry.name
        };
        Self {
            slug: entry.slug,
            name,
            hallucination_rate: entry.hallucination_rate,
            factual_consistency: entry.factual_consistency,
            answer_rate: entry.answer_rate,
            avg_summary_length: entry.avg_summary_length,
            trust_score,
        }
    }
}

/// Root structure of catalog.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}
