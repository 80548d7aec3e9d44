// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Trustlens - trust metrics for language models in your terminal
//!
//! Entry point for the Trustlens CLI application.

use clap::Parser;

use trustlens::catalog::Catalog;
use trustlens::cli::{Cli, Commands, TopArgs};
use trustlens::commands;
use trustlens::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables catalog diagnostics without
    // requiring users to know target names. `RUST_LOG` still takes
    // precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "trustlens=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build the catalog once; every command reads the same snapshot.
    // An explicit --catalog file is a hard error when malformed, unlike
    // the user config file which only warns.
    let catalog = match &cli.catalog {
        Some(path) => {
            let mut catalog = Catalog::with_defaults_only();
            catalog.load_from_file(path)?;
            catalog
        }
        None => Catalog::new(),
    };

    // Dispatch to the appropriate command
    match cli.command {
        None => commands::top::execute(&TopArgs::default(), &cli.format, &catalog)?,
        Some(Commands::Top(args)) => commands::top::execute(&args, &cli.format, &catalog)?,
        Some(Commands::List(args)) => commands::list::execute(&args, &cli.format, &catalog)?,
        Some(Commands::Show(args)) => commands::show::execute(&args, &cli.format, &catalog)?,
        Some(Commands::Compare(args)) => commands::compare::execute(&args, &cli.format, &catalog)?,
        Some(Commands::Init) => commands::init::execute()?,
    }

    Ok(())
}
