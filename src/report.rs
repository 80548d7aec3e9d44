// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Narrative profile text
//!
//! Builds the templated description paragraph shown on a model's detail
//! view, closing with a sentence keyed to the model's trust tier.

use crate::catalog::ModelRecord;
use crate::tier::{classify, TrustTier};

/// Tier-specific closing sentence for the profile paragraph
fn tier_summary(tier: TrustTier) -> &'static str {
    match tier {
        TrustTier::Excellent => {
            "This model demonstrates excellent trustworthiness with very low \
             hallucination rates and high factual accuracy."
        }
        TrustTier::Good => {
            "This model shows good performance with moderate trustworthiness metrics."
        }
        TrustTier::NeedsReview => {
            "This model may require careful consideration due to higher \
             hallucination rates or lower factual consistency."
        }
    }
}

/// Build the narrative description for a model
pub fn narrative(model: &ModelRecord) -> String {
    format!(
        "{} demonstrates a Trust Score of {:.1}, calculated by subtracting the \
         hallucination rate ({:.1}%) from the factual consistency rate ({:.1}%). \
         This model shows {:.1}% answer completion rate and generates responses \
         with an average length of {:.0} words. {}",
        model.name,
        model.trust_score,
        model.hallucination_rate,
        model.factual_consistency,
        model.answer_rate,
        model.avg_summary_length,
        tier_summary(classify(model.trust_score)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(hallucination: f64, factual: f64) -> ModelRecord {
        ModelRecord::new("test-model", "Test Model")
            .with_hallucination_rate(hallucination)
            .with_factual_consistency(factual)
            .with_answer_rate(98.6)
            .with_summary_length(81.0)
    }

    #[test]
    fn test_narrative_includes_metrics() {
        let text = narrative(&model(2.5, 96.5));

        assert!(text.starts_with("Test Model demonstrates a Trust Score of 94.0"));
        assert!(text.contains("hallucination rate (2.5%)"));
        assert!(text.contains("factual consistency rate (96.5%)"));
        assert!(text.contains("98.6% answer completion rate"));
        assert!(text.contains("average length of 81 words"));
    }

    #[test]
    fn test_narrative_excellent_closing() {
        let text = narrative(&model(1.0, 96.0));
        assert!(text.contains("excellent trustworthiness"));
    }

    #[test]
    fn test_narrative_good_closing() {
        let text = narrative(&model(8.0, 90.0));
        assert!(text.contains("good performance with moderate"));
    }

    #[test]
    fn test_narrative_needs_review_closing() {
        let text = narrative(&model(20.0, 80.0));
        assert!(text.contains("careful consideration"));
    }
}
