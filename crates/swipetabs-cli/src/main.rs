use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use swipetabs_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "swipetabs")]
#[command(author, version, about = "A swipeable tab group for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Replay a JSON input script and print the emitted frames
    Simulate {
        /// Path to the script file
        script: PathBuf,
        /// Print one JSON object per frame
        #[arg(long)]
        json: bool,
        /// Drive the async service on a real frame clock
        #[arg(long)]
        realtime: bool,
    },
    /// Print the effective configuration
    Config {
        /// Write the configuration file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Simulate {
            script,
            json,
            realtime,
        }) => {
            if realtime {
                commands::simulate::run_realtime(&config, &script, json).await
            } else {
                commands::simulate::run(&config, &script, json)
            }
        }
        Some(Commands::Config { init }) => commands::config::run(&config, init),
    }
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so it logs to a file under the data directory.
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if tui {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
