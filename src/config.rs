use anyhow::{Context, Result};
use birthday_core::ics::DEFAULT_PRODID;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Working contacts export, filtered in place
    pub export: PathBuf,

    /// Where the unfiltered export is kept by `filter`
    pub backup: PathBuf,

    /// Generated calendar
    pub calendar: PathBuf,

    /// PRODID written to the calendar
    pub prodid: String,

    /// Minutes before the start of the day that reminders fire (0 = at event time)
    pub reminder_minutes_before: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: PathBuf::from("export.csv"),
            backup: PathBuf::from("export_backup.csv"),
            calendar: PathBuf::from("birthdays.ics"),
            prodid: DEFAULT_PRODID.to_string(),
            reminder_minutes_before: 0,
        }
    }
}

/// Get the config directory path (~/.config/birthday-liberator)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("birthday-liberator");
    Ok(config_dir)
}

/// Get the config file path (~/.config/birthday-liberator/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/birthday-liberator/config.toml, falling back
/// to defaults when the file does not exist
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
