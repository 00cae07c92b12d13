//! TUI rendering for birthday-core results.
//!
//! Extension trait that adds colored terminal rendering to the summary
//! types returned by the core library, using owo_colors.

use birthday_core::{BuildReport, FilterStats, SkippedContact};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for FilterStats {
    fn render(&self) -> String {
        [
            format!("  Total contacts processed: {}", self.total()),
            format!("  Contacts with birthdays kept: {}", self.kept.green()),
            format!("  Contacts without birthdays removed: {}", self.removed.yellow()),
        ]
        .join("\n")
    }
}

impl Render for SkippedContact {
    fn render(&self) -> String {
        format!(
            "  {} {} {}",
            "-".red(),
            self.name,
            format!("(invalid birthday: {})", self.birthday).dimmed()
        )
    }
}

impl Render for BuildReport {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "  Created birthday calendar with {} events",
            self.events.green()
        )];

        if !self.skipped.is_empty() {
            lines.push(format!(
                "  Skipped {} contacts with invalid birthdays:",
                self.skipped.len().yellow()
            ));
            lines.extend(self.skipped.iter().map(Render::render));
        }

        lines.join("\n")
    }
}
