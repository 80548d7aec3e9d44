// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Trust tier classification
//!
//! Maps a trust score onto the three-tier badge shown next to every model.
//! Classification is a pure function, recomputed on every read; no record
//! stores its badge.

use serde::{Deserialize, Serialize};

/// Qualitative trust tier for a model's trust score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrustTier {
    /// Trust score of 90 or above
    Excellent,
    /// Trust score in [70, 90)
    Good,
    /// Trust score below 70
    NeedsReview,
}

impl TrustTier {
    /// Badge label shown next to the model
    pub fn label(&self) -> &'static str {
        match self {
            TrustTier::Excellent => "Excellent",
            TrustTier::Good => "Good",
            TrustTier::NeedsReview => "Needs Review",
        }
    }

    /// Display style tag consumed by the presentation layer
    pub fn style_tag(&self) -> &'static str {
        match self {
            TrustTier::Excellent => "green",
            TrustTier::Good => "yellow",
            TrustTier::NeedsReview => "red",
        }
    }
}

impl std::fmt::Display for TrustTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a trust score into its tier.
///
/// Total over all reals: out-of-range scores land on the nearest tier
/// edge. Checks are evaluated top-down, so the 90 boundary belongs to
/// Excellent and the 70 boundary to Good. NaN falls through to the
/// lowest tier.
pub fn classify(trust_score: f64) -> TrustTier {
    if trust_score >= 90.0 {
        TrustTier::Excellent
    } else if trust_score >= 70.0 {
        TrustTier::Good
    } else {
        TrustTier::NeedsReview
    }
}
