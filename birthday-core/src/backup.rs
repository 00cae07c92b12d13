//! Backups of the working contacts export.

use std::path::Path;

use log::info;

use crate::error::{BirthdayError, BirthdayResult};

/// Move `source` to `backup`, replacing any previous backup.
pub fn backup_file(source: &Path, backup: &Path) -> BirthdayResult<()> {
    if !source.exists() {
        return Err(BirthdayError::Backup(format!(
            "{} does not exist",
            source.display()
        )));
    }
    if source == backup {
        return Err(BirthdayError::Backup(format!(
            "backup path is the same as {}",
            source.display()
        )));
    }

    std::fs::rename(source, backup)?;
    info!("Backed up {} to {}", source.display(), backup.display());
    Ok(())
}
