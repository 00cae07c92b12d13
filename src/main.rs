mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::expand_path;
use env_logger::Env;

#[derive(Parser)]
#[command(name = "birthday-liberator")]
#[command(about = "Turn a contacts CSV export into a yearly birthday calendar")]
#[command(version)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove contacts without a birthday from a CSV export
    Filter {
        /// Contacts export to filter (defaults to `export` from config)
        source: Option<PathBuf>,

        /// Where to write the filtered contacts (defaults to the source)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Where to keep the unfiltered export (defaults to `backup` from config)
        #[arg(short, long, conflicts_with = "no_backup")]
        backup: Option<PathBuf>,

        /// Read the source directly without moving it to a backup first
        #[arg(long)]
        no_backup: bool,
    },
    /// Create an .ics calendar with a yearly event for every birthday
    Calendar {
        /// Contacts export to read (defaults to `export` from config)
        source: Option<PathBuf>,

        /// Calendar file to write (defaults to `calendar` from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Filter the export in place, then create the calendar
    Run,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cfg = config::load_config()?;

    match cli.command {
        Commands::Filter {
            source,
            output,
            backup,
            no_backup,
        } => {
            let source = expand_path(&source.unwrap_or_else(|| cfg.export.clone()));
            let output = output.map(|p| expand_path(&p)).unwrap_or_else(|| source.clone());
            let backup = if no_backup {
                None
            } else {
                Some(expand_path(&backup.unwrap_or_else(|| cfg.backup.clone())))
            };
            commands::filter::run(&source, &output, backup.as_deref())
        }
        Commands::Calendar { source, output } => {
            let source = expand_path(&source.unwrap_or_else(|| cfg.export.clone()));
            let output = expand_path(&output.unwrap_or_else(|| cfg.calendar.clone()));
            commands::calendar::run(&source, &output, &cfg)
        }
        Commands::Run => commands::run::run(&cfg),
    }
}
