use std::path::Path;

use anyhow::{Context, Result};
use birthday_core::{BuildOptions, build_calendar};
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::render::Render;

/// Build the birthday calendar for `source` and write it to `output`.
pub fn run(source: &Path, output: &Path, config: &Config) -> Result<()> {
    let options = BuildOptions {
        prodid: config.prodid.clone(),
        reminder_minutes_before: config.reminder_minutes_before,
        ..BuildOptions::default()
    };

    let report = build_calendar(source, output, &options)
        .with_context(|| format!("Failed to build calendar from {}", source.display()))?;

    println!("{}", report.render());
    println!("{}", format!("  Calendar saved as: {}", output.display()).green());

    Ok(())
}
