// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Full dataset command with search and sorting

use crate::catalog::Catalog;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::Result;
use crate::rank::{rank, SortSpec};

use super::ModelView;

/// Execute the list command
pub fn execute(args: &ListArgs, format: &OutputFormat, catalog: &Catalog) -> Result<()> {
    // Absent flags fall back to the default view state: trust score,
    // descending.
    let defaults = SortSpec::default();
    let field = args.sort_field.unwrap_or(defaults.field);
    let direction = args.direction.unwrap_or(defaults.direction);

    let ranked = rank(catalog.list_all(), &args.search, field, direction);

    if matches!(format, OutputFormat::Json) {
        let views: Vec<ModelView> = ranked.iter().map(|m| ModelView::new(m)).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No models found matching your search.");
        return Ok(());
    }

    println!(
        "{:<20} {:>8} {:>8} {:>8} {:>8} {:>8}  {}",
        "Name", "Halluc%", "Factual%", "Answer%", "AvgLen", "Trust", "Badge"
    );
    for model in &ranked {
        let view = ModelView::new(model);
        println!(
            "{:<20} {:>8.1} {:>8.1} {:>8.1} {:>8.0} {:>8.1}  {}",
            model.name,
            model.hallucination_rate,
            model.factual_consistency,
            model.answer_rate,
            model.avg_summary_length,
            model.trust_score,
            view.badge,
        );
    }

    Ok(())
}
