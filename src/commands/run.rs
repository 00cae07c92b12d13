use anyhow::Result;

use crate::config::{Config, expand_path};

/// Filter the configured export in place (keeping a backup), then build the
/// calendar from the filtered result.
pub fn run(config: &Config) -> Result<()> {
    let export = expand_path(&config.export);
    let backup = expand_path(&config.backup);
    let calendar = expand_path(&config.calendar);

    println!("Filtering {}", export.display());
    super::filter::run(&export, &export, Some(&backup))?;

    println!("\nBuilding {}", calendar.display());
    super::calendar::run(&export, &calendar, config)
}
