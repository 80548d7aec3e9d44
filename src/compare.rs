// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Head-to-head model comparison
//!
//! Resolves a winner by trust score and builds the four normalized
//! radar axes used by the comparison view. An exact score tie is a
//! distinct outcome rather than a silent win for either side.

use serde::Serialize;

use crate::catalog::ModelRecord;

/// Axis labels in radar display order
pub const AXIS_LABELS: [&str; 4] = [
    "Factual Consistency",
    "Answer Rate",
    "Summary Length",
    "Low Hallucination",
];

/// Comparison outcome by trust score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    A,
    B,
    Tie,
}

/// The four radar axes for one model, each scaled to 0-100
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScores {
    /// Raw factual consistency, already a percentage
    pub factual_consistency: f64,
    /// Raw answer rate, already a percentage
    pub answer_rate: f64,
    /// Average summary length clamped to 100 for display; the record's
    /// own field is untouched
    pub summary_length: f64,
    /// Inverted hallucination rate, `100 - hallucination_rate`
    pub low_hallucination: f64,
}

impl AxisScores {
    /// Normalize one record onto the radar axes
    pub fn for_model(model: &ModelRecord) -> Self {
        Self {
            factual_consistency: model.factual_consistency,
            answer_rate: model.answer_rate,
            summary_length: model.avg_summary_length.min(100.0),
            low_hallucination: 100.0 - model.hallucination_rate,
        }
    }

    /// Axis values in [`AXIS_LABELS`] order
    pub fn values(&self) -> [f64; 4] {
        [
            self.factual_consistency,
            self.answer_rate,
            self.summary_length,
            self.low_hallucination,
        ]
    }
}

/// Result of comparing two models
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub winner: Winner,
    pub axes_a: AxisScores,
    pub axes_b: AxisScores,
}

/// Compare two models by trust score and build their radar axes.
///
/// Strictly greater trust score wins; an exact tie (including
/// self-comparison) reports [`Winner::Tie`].
pub fn compare(a: &ModelRecord, b: &ModelRecord) -> Comparison {
    let winner = match a.trust_score.total_cmp(&b.trust_score) {
        std::cmp::Ordering::Greater => Winner::A,
        std::cmp::Ordering::Less => Winner::B,
        std::cmp::Ordering::Equal => Winner::Tie,
    };

    Comparison {
        winner,
        axes_a: AxisScores::for_model(a),
        axes_b: AxisScores::for_model(b),
    }
}
