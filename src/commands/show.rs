// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Single model profile command

use serde::Serialize;

use crate::catalog::{Catalog, ModelRecord};
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::compare::{AxisScores, AXIS_LABELS};
use crate::error::{Result, TrustlensError};
use crate::report::narrative;
use crate::tier::TrustTier;

use super::{print_model_card, ModelView};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelProfile<'a> {
    #[serde(flatten)]
    model: &'a ModelRecord,
    tier: TrustTier,
    badge: &'static str,
    axes: AxisScores,
    narrative: String,
}

/// Execute the show command
pub fn execute(args: &ShowArgs, format: &OutputFormat, catalog: &Catalog) -> Result<()> {
    let model = catalog
        .find_by_slug(&args.slug)
        .ok_or_else(|| TrustlensError::ModelNotFound(args.slug.clone()))?;

    let axes = AxisScores::for_model(model);

    if matches!(format, OutputFormat::Json) {
        let view = ModelView::new(model);
        let profile = ModelProfile {
            model,
            tier: view.tier,
            badge: view.badge,
            axes,
            narrative: narrative(model),
        };
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!();
    print_model_card(model);

    println!("\nPerformance radar:");
    for (label, value) in AXIS_LABELS.iter().zip(axes.values()) {
        println!("  {:<20} {:>6.1}", label, value);
    }

    println!("\n{}", narrative(model));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_unknown_slug_is_not_found() {
        let catalog = Catalog::with_defaults_only();
        let args = ShowArgs {
            slug: "no-such-model".to_string(),
        };

        let err = execute(&args, &OutputFormat::Text, &catalog).unwrap_err();
        assert!(matches!(err, TrustlensError::ModelNotFound(_)));
    }

    #[test]
    fn test_show_known_slug_succeeds() {
        let catalog = Catalog::with_defaults_only();
        let args = ShowArgs {
            slug: "gpt-4o".to_string(),
        };

        assert!(execute(&args, &OutputFormat::Json, &catalog).is_ok());
    }
}
