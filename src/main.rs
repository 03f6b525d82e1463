mod config;
mod consts;
mod data;
mod error;
mod events;
mod logging;
mod patient;
mod session;
mod ui;
mod vitals;
mod workers;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::columns;
use crate::data::load_dataset;
use crate::session::{headless_mode::run_headless_mode, setup_session, tui_mode::run_tui_mode};
use clap::{Parser, Subcommand};
use std::{error::Error, path::Path, path::PathBuf};

/// Command-line arguments
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Patient data file (CSV or JSON). Falls back to the configured
        /// default when omitted.
        #[arg(long, value_name = "FILE")]
        data: Option<PathBuf>,

        /// Run one render pass as plain text instead of the TUI.
        #[arg(long)]
        headless: bool,

        /// Disable the dashboard background color.
        #[arg(long)]
        no_background_color: bool,
    },
    /// Load and validate a data file without starting the dashboard.
    Check {
        /// Patient data file (CSV or JSON)
        #[arg(long, value_name = "FILE")]
        data: PathBuf,
    },
    /// Clear the saved configuration.
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            data,
            headless,
            no_background_color,
        } => {
            // Missing or unreadable config means first run: start from defaults.
            let config = Config::load_from_file(&config_path).unwrap_or_default();
            let session = setup_session(data, config);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color, config_path).await
            }
        }
        Command::Check { data } => check_data_file(&data),
        Command::Reset => {
            println!("Clearing saved configuration file...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Load a data file and report what the dashboard would see.
fn check_data_file(path: &Path) -> Result<(), Box<dyn Error>> {
    let dataset = load_dataset(path).map_err(|e| {
        eprintln!("Data file check failed: {}", e);
        e
    })?;

    println!(
        "Loaded {}: format {}, {} rows, {} columns",
        dataset.source,
        dataset.format,
        dataset.row_count(),
        dataset.columns.len()
    );

    let conventional = [
        columns::DATE,
        columns::BLOOD_PRESSURE,
        columns::HEART_RATE,
        columns::WEIGHT,
    ];
    for column in conventional {
        if dataset.column_index(column).is_some() {
            println!("  column `{}`: present", column);
        } else {
            println!(
                "  column `{}`: missing (the matching chart will fail to render)",
                column
            );
        }
    }
    Ok(())
}
