//! The `tagsort list-sets` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use tagsort_core::catalog::CatalogFile;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let file = CatalogFile::from_path(&catalog_path)?;

    let mut table = Table::new();
    table.set_header(vec!["Answer Set", "Tags", "Correct"]);

    for (name, tags) in &file.answer_sets {
        let correct = tags.iter().filter(|t| t.correct).count();
        table.add_row(vec![
            name.clone(),
            tags.len().to_string(),
            correct.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
