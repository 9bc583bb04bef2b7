#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use msgtracker::{replay, Config, ConfigCommands};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// `msgtracker` - remember the most recently seen gossip messages.
#[derive(Parser, Debug)]
#[command(name = "msgtracker")]
#[command(version)]
#[command(about = "Bounded FIFO tracker for recently seen gossip messages.", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a JSON Lines message log through a tracker and report the outcome
    Replay {
        /// JSON Lines file, one message object per line
        input: PathBuf,

        /// Override `tracker.capacity`
        #[arg(long)]
        capacity: Option<usize>,

        /// Also print the retained message ids, oldest first
        #[arg(long)]
        list: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        config_command: ConfigCommands,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Schema export stays stdout-only: no config load, no logging.
    if let Commands::Config { config_command } = &cli.command {
        match config_command {
            ConfigCommands::Schema => {
                let schema = schemars::schema_for!(Config);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&schema).context("Failed to serialize JSON Schema")?
                );
                return Ok(());
            }
        }
    }

    // Initialize logging - respects RUST_LOG env var, defaults to INFO
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    match cli.command {
        Commands::Replay {
            input,
            capacity,
            list,
        } => {
            if let Some(capacity) = capacity {
                config.tracker.capacity = capacity;
                config.validate()?;
            }

            let tracker = config.build_tracker()?;
            info!(capacity = tracker.capacity(), input = %input.display(), "Replaying message log");

            let file = File::open(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            let summary = replay::replay(BufReader::new(file), &tracker, &config.replay)?;

            println!("{}", serde_json::to_string_pretty(&summary)?);
            if list {
                for message in tracker.messages() {
                    println!("{}", message.id);
                }
            }
            Ok(())
        }
        Commands::Config { .. } => Ok(()),
    }
}
