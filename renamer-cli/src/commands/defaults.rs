use anyhow::{Context, Result};
use std::path::PathBuf;

use renamer_core::{save_preset, RenameOptions};

use crate::output::OutputWriter;

/// Print the default rename preset, or write it to `write`
pub fn run(write: Option<PathBuf>, format: &crate::OutputFormat) -> Result<()> {
    let options = RenameOptions::default();

    match write {
        Some(path) => {
            save_preset(&options, &path)
                .with_context(|| format!("Failed to write preset: {}", path.display()))?;
            println!("✓ Wrote default preset to {}", path.display());
        }
        None => OutputWriter::new(format).write_options(&options)?,
    }

    Ok(())
}
