use std::path::Path;

use anyhow::{Context, Result};
use birthday_core::{backup_file, filter_contacts};
use owo_colors::OwoColorize;

use crate::render::Render;

/// Drop contacts without a birthday from `source`, writing the result to
/// `output`. With a backup path, `source` is first moved there and read back
/// from the backup.
pub fn run(source: &Path, output: &Path, backup: Option<&Path>) -> Result<()> {
    let input = match backup {
        Some(backup) => {
            backup_file(source, backup).with_context(|| {
                format!("Failed to back up {} to {}", source.display(), backup.display())
            })?;
            println!("  Backed up original to {}", backup.display());
            backup
        }
        None => source,
    };

    let stats = filter_contacts(input, output)
        .with_context(|| format!("Failed to filter contacts from {}", input.display()))?;

    println!("{}", stats.render());
    println!("{}", format!("  Saved filtered contacts to {}", output.display()).green());

    Ok(())
}
