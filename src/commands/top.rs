// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Featured models command (the landing view)

use crate::catalog::Catalog;
use crate::cli::args::{OutputFormat, TopArgs};
use crate::error::Result;

use super::{print_model_card, ModelView};

/// Execute the top command
pub fn execute(args: &TopArgs, format: &OutputFormat, catalog: &Catalog) -> Result<()> {
    let featured = catalog.featured(args.count);

    if matches!(format, OutputFormat::Json) {
        let views: Vec<ModelView> = featured.iter().map(ModelView::new).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("\n=== The Trust Index for AI ===\n");
    println!("Hallucination risk, factual accuracy & answer quality across");
    println!("today's top language models.\n");

    for model in featured {
        print_model_card(model);
        println!();
    }

    println!("Run `trustlens list` for the full dataset,");
    println!("or `trustlens compare <a> <b>` for a head-to-head view.");

    Ok(())
}
