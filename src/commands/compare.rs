// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Side-by-side comparison command

use serde::Serialize;

use crate::catalog::{Catalog, ModelRecord};
use crate::cli::args::{CompareArgs, OutputFormat};
use crate::compare::{compare, Comparison, Winner, AXIS_LABELS};
use crate::error::{Result, TrustlensError};

use super::{print_model_card, ModelView};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonReport<'a> {
    model_a: ModelView<'a>,
    model_b: ModelView<'a>,
    #[serde(flatten)]
    comparison: Comparison,
}

/// Execute the compare command
pub fn execute(args: &CompareArgs, format: &OutputFormat, catalog: &Catalog) -> Result<()> {
    let model_a = resolve(catalog, &args.slug_a)?;
    let model_b = resolve(catalog, &args.slug_b)?;

    let result = compare(model_a, model_b);

    if matches!(format, OutputFormat::Json) {
        let report = ComparisonReport {
            model_a: ModelView::new(model_a),
            model_b: ModelView::new(model_b),
            comparison: result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n=== Model A ===");
    print_model_card(model_a);
    println!("\n=== Model B ===");
    print_model_card(model_b);

    println!("\nPerformance comparison:");
    println!("  {:<20} {:>10} {:>10}", "Axis", "Model A", "Model B");
    for ((label, a), b) in AXIS_LABELS
        .iter()
        .zip(result.axes_a.values())
        .zip(result.axes_b.values())
    {
        println!("  {:<20} {:>10.1} {:>10.1}", label, a, b);
    }

    println!();
    match result.winner {
        Winner::A => print_winner(model_a, model_b),
        Winner::B => print_winner(model_b, model_a),
        Winner::Tie => println!(
            "Tie: both models share a Trust Score of {:.1}",
            model_a.trust_score
        ),
    }

    Ok(())
}

fn resolve<'a>(catalog: &'a Catalog, slug: &str) -> Result<&'a ModelRecord> {
    catalog
        .find_by_slug(slug)
        .ok_or_else(|| TrustlensError::ModelNotFound(slug.to_string()))
}

fn print_winner(winner: &ModelRecord, loser: &ModelRecord) {
    println!(
        "Winner: {} (Trust Score {:.1} vs {:.1})",
        winner.name, winner.trust_score, loser.trust_score
    );
}
