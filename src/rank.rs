// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Search filtering and sorting for the full dataset view
//!
//! [`rank`] is a pure function of its four inputs and retains nothing
//! between calls. The sort-toggle state belongs to the caller and is
//! modeled by [`SortSpec`], which each view owns and passes back in.

use std::cmp::Ordering;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::ModelRecord;
use crate::error::TrustlensError;

/// Sortable record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    Name,
    HallucinationRate,
    FactualConsistency,
    AnswerRate,
    AvgSummaryLength,
    TrustScore,
}

impl FromStr for SortField {
    type Err = TrustlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "hallucination-rate" | "hallucination_rate" => Ok(SortField::HallucinationRate),
            "factual-consistency" | "factual_consistency" => Ok(SortField::FactualConsistency),
            "answer-rate" | "answer_rate" => Ok(SortField::AnswerRate),
            "avg-summary-length" | "avg_summary_length" => Ok(SortField::AvgSummaryLength),
            "trust-score" | "trust_score" => Ok(SortField::TrustScore),
            _ => Err(TrustlensError::InvalidInput(format!(
                "unknown sort field: {}",
                s
            ))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[value(alias = "asc")]
    Ascending,
    #[value(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Per-view sort selection.
///
/// Lives in the view layer: selecting the active field again flips the
/// direction, selecting a new field makes it active and resets the
/// direction to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Apply a column selection to the current sort state
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Descending;
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::TrustScore,
            direction: SortDirection::Descending,
        }
    }
}

/// Filter the records by a case-insensitive name search, then sort by the
/// chosen field and direction.
///
/// The sort is stable: records with equal keys keep their relative
/// catalog order in either direction. An empty search term matches
/// everything; no matches yields an empty list.
pub fn rank<'a>(
    records: &'a [ModelRecord],
    search_term: &str,
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a ModelRecord> {
    let needle = search_term.to_lowercase();

    let mut filtered: Vec<&ModelRecord> = records
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .collect();

    filtered.sort_by(|a, b| {
        let ord = compare_field(a, b, field);
        match direction {
            SortDirection::Ascending => ord,
            // Reversing the comparator keeps Equal as Equal, so the
            // stable sort preserves catalog order on ties either way.
            SortDirection::Descending => ord.reverse(),
        }
    });

    filtered
}

/// Ascending comparison on a single field. Strings compare
/// case-insensitively, numerics by value with a total order over f64.
fn compare_field(a: &ModelRecord, b: &ModelRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::HallucinationRate => a.hallucination_rate.total_cmp(&b.hallucination_rate),
        SortField::FactualConsistency => a.factual_consistency.total_cmp(&b.factual_consistency),
        SortField::AnswerRate => a.answer_rate.total_cmp(&b.answer_rate),
        SortField::AvgSummaryLength => a.avg_summary_length.total_cmp(&b.avg_summary_length),
        SortField::TrustScore => a.trust_score.total_cmp(&b.trust_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ModelRecord> {
        vec![
            ModelRecord::new("gpt-4", "GPT-4")
                .with_hallucination_rate(3.0)
                .with_factual_consistency(95.0)
                .with_answer_rate(99.0)
                .with_summary_length(80.0),
            ModelRecord::new("claude-3", "Claude 3")
                .with_hallucination_rate(4.0)
                .with_factual_consistency(93.0)
                .with_answer_rate(98.0)
                .with_summary_length(90.0),
            ModelRecord::new("gemini-pro", "Gemini Pro")
                .with_hallucination_rate(6.0)
                .with_factual_consistency(90.0)
                .with_answer_rate(97.0)
                .with_summary_length(70.0),
        ]
    }

    fn slugs(ranked: &[&ModelRecord]) -> Vec<String> {
        ranked.iter().map(|m| m.slug.clone()).collect()
    }

    #[test]
    fn test_filter_case_insensitive() {
        let records = sample();
        let ranked = rank(&records, "gpt", SortField::Name, SortDirection::Ascending);
        assert_eq!(slugs(&ranked), vec!["gpt-4"]);
    }

    #[test]
    fn test_empty_search_matches_all() {
        let records = sample();
        let ranked = rank(
            &records,
            "",
            SortField::TrustScore,
            SortDirection::Descending,
        );
        assert_eq!(ranked.len(), records.len());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let records = sample();
        let ranked = rank(
            &records,
            "mixtral",
            SortField::TrustScore,
            SortDirection::Descending,
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_sort_by_trust_score_descending() {
        let records = sample();
        let ranked = rank(
            &records,
            "",
            SortField::TrustScore,
            SortDirection::Descending,
        );
        assert_eq!(slugs(&ranked), vec!["gpt-4", "claude-3", "gemini-pro"]);
    }

    #[test]
    fn test_sort_by_summary_length_ascending() {
        let records = sample();
        let ranked = rank(
            &records,
            "",
            SortField::AvgSummaryLength,
            SortDirection::Ascending,
        );
        assert_eq!(slugs(&ranked), vec!["gemini-pro", "gpt-4", "claude-3"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let records = vec![
            ModelRecord::new("b", "beta"),
            ModelRecord::new("a", "Alpha"),
            ModelRecord::new("c", "CHARLIE"),
        ];
        let ranked = rank(&records, "", SortField::Name, SortDirection::Ascending);
        assert_eq!(slugs(&ranked), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_equal_keys_keep_catalog_order() {
        let records = vec![
            ModelRecord::new("first", "First")
                .with_hallucination_rate(5.0)
                .with_factual_consistency(90.0),
            ModelRecord::new("second", "Second")
                .with_hallucination_rate(5.0)
                .with_factual_consistency(90.0),
            ModelRecord::new("third", "Third")
                .with_hallucination_rate(2.0)
                .with_factual_consistency(97.0),
        ];

        let descending = rank(
            &records,
            "",
            SortField::TrustScore,
            SortDirection::Descending,
        );
        assert_eq!(slugs(&descending), vec!["third", "first", "second"]);

        let ascending = rank(
            &records,
            "",
            SortField::TrustScore,
            SortDirection::Ascending,
        );
        // Tied records stay in catalog order in both directions
        assert_eq!(slugs(&ascending), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_direction_flip_reverses_output_without_ties() {
        let records = sample();
        let desc = rank(
            &records,
            "",
            SortField::TrustScore,
            SortDirection::Descending,
        );
        let asc = rank(
            &records,
            "",
            SortField::TrustScore,
            SortDirection::Ascending,
        );

        let mut reversed = slugs(&desc);
        reversed.reverse();
        assert_eq!(slugs(&asc), reversed);
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let records = sample();
        let before: Vec<String> = records.iter().map(|m| m.slug.clone()).collect();
        let _ = rank(&records, "", SortField::Name, SortDirection::Ascending);
        let after: Vec<String> = records.iter().map(|m| m.slug.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_spec_toggle_same_field_flips() {
        let mut spec = SortSpec::default();
        assert_eq!(spec.field, SortField::TrustScore);
        assert_eq!(spec.direction, SortDirection::Descending);

        spec.toggle(SortField::TrustScore);
        assert_eq!(spec.direction, SortDirection::Ascending);

        spec.toggle(SortField::TrustScore);
        assert_eq!(spec.direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_spec_toggle_new_field_resets_descending() {
        let mut spec = SortSpec::default();
        spec.toggle(SortField::TrustScore); // now ascending

        spec.toggle(SortField::Name);
        assert_eq!(spec.field, SortField::Name);
        assert_eq!(spec.direction, SortDirection::Descending);
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!(
            <SortField as FromStr>::from_str("trust-score").unwrap(),
            SortField::TrustScore
        );
        assert_eq!(
            <SortField as FromStr>::from_str("hallucination_rate").unwrap(),
            SortField::HallucinationRate
        );
        assert_eq!(
            <SortField as FromStr>::from_str("Name").unwrap(),
            SortField::Name
        );
    }

    #[test]
    fn test_sort_field_from_str_unknown_fails_loudly() {
        let err = <SortField as FromStr>::from_str("vibes").unwrap_err();
        assert!(err.to_string().contains("unknown sort field"));
    }
}
