//! The `tagsort validate` command.

use std::path::PathBuf;

use anyhow::Result;

use tagsort_core::catalog::{validate_catalog, CatalogFile};

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let file = CatalogFile::from_path(&catalog_path)?;

    for (name, tags) in &file.answer_sets {
        println!("Answer set: {name} ({} tags)", tags.len());
    }

    let warnings = validate_catalog(&file);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.answer_set, w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
