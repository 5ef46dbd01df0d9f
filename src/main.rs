//! HabboHub throttle command line
//!
//! Replays recorded interaction events through the throttle service and
//! prints the effective configuration.

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use habbohub_throttle::cli::replay;
use habbohub_throttle::utils::logging::init_logging;
use habbohub_throttle::{Config, Result};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "habbohub-throttle", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(long, env = "HABBOHUB_THROTTLE_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `habbohub_throttle=trace`
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a JSON-lines event file ("-" reads stdin)
    Replay { events: PathBuf },
    /// Print the effective configuration as YAML
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).await?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json_logs {
        config.logging.json = true;
    }
    init_logging(&config.logging)?;

    match cli.command {
        Command::Replay { events } => {
            info!("Replaying events from {:?}", events);
            let outcomes = if events.as_os_str() == "-" {
                replay(&config, io::stdin().lock())?
            } else {
                replay(&config, BufReader::new(File::open(&events)?))?
            };

            let mut stdout = io::stdout().lock();
            for outcome in &outcomes {
                writeln!(stdout, "{}", serde_json::to_string(outcome)?)?;
            }
        }
        Command::Config => {
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}
