// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Command implementations
//!
//! Each subcommand gets the read-only catalog plus its parsed arguments
//! and renders to stdout in the selected output format. All domain logic
//! lives in the query modules; commands only resolve inputs and render.

use serde::Serialize;

use crate::catalog::ModelRecord;
use crate::tier::{classify, TrustTier};

pub mod compare;
pub mod init;
pub mod list;
pub mod show;
pub mod top;

/// A model decorated with its badge for rendering
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelView<'a> {
    #[serde(flatten)]
    pub model: &'a ModelRecord,
    pub tier: TrustTier,
    pub badge: &'static str,
}

impl<'a> ModelView<'a> {
    pub fn new(model: &'a ModelRecord) -> Self {
        let tier = classify(model.trust_score);
        Self {
            model,
            tier,
            badge: tier.label(),
        }
    }
}

/// Render one model as the card-style text block shared by `top` and `show`
pub(crate) fn print_model_card(model: &ModelRecord) {
    let tier = classify(model.trust_score);
    println!("{} [{}]", model.name, tier.label());
    println!("  Trust Score:         {:>6.1}", model.trust_score);
    println!("  Hallucination Rate:  {:>6.1}%", model.hallucination_rate);
    println!("  Factual Consistency: {:>6.1}%", model.factual_consistency);
    println!("  Answer Rate:         {:>6.1}%", model.answer_rate);
    println!(
        "  Avg Summary Length:  {:>6.0} words",
        model.avg_summary_length
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_view_flattens_record_fields() {
        let model = ModelRecord::new("gpt-4o", "GPT-4o")
            .with_hallucination_rate(1.5)
            .with_factual_consistency(96.8);
        let view = ModelView::new(&model);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["slug"], "gpt-4o");
        assert_eq!(json["badge"], "Excellent");
        assert_eq!(json["tier"], "excellent");
        assert!(json.get("trustScore").is_some());
    }

    #[test]
    fn test_model_view_badge_tracks_tier() {
        let weak = ModelRecord::new("weak", "Weak")
            .with_hallucination_rate(20.0)
            .with_factual_consistency(80.0);
        let view = ModelView::new(&weak);
        assert_eq!(view.tier, TrustTier::NeedsReview);
        assert_eq!(view.badge, "Needs Review");
    }
}
