// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Trustlens Contributors

//! Init command: write the sample user catalog file

use crate::catalog::Catalog;
use crate::error::{Result, TrustlensError};

/// Execute the init command
pub fn execute() -> Result<()> {
    let path = Catalog::default_config_path().ok_or_else(|| {
        TrustlensError::Catalog("could not determine home directory".to_string())
    })?;

    if path.exists() {
        println!("Catalog file already exists: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, Catalog::generate_sample_config())?;

    println!("Wrote sample catalog to {}", path.display());
    println!("Entries there override or extend the built-in catalog by slug.");

    Ok(())
}
