//! Catalog server: venue listings and trivia over one HTTP API

mod config;
mod logging;
mod server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::AppConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "catalog-server", version, about)]
struct Cli {
    /// YAML configuration file; `CATALOG__*` variables override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Migrate the database and serve HTTP (default)
    Run,
    /// Apply pending migrations and exit
    Migrate,
    /// Print the effective configuration as JSON and exit
    PrintConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Run) {
        Command::PrintConfig => {
            let rendered =
                serde_json::to_string_pretty(&cfg).context("failed to render configuration")?;
            println!("{rendered}");
            Ok(())
        }
        Command::Migrate => {
            logging::init(&cfg.logging)?;
            let db = server::connect(&cfg.database).await?;
            server::migrate(&db).await?;
            tracing::info!("migrations applied");
            Ok(())
        }
        Command::Run => {
            logging::init(&cfg.logging)?;
            server::run(cfg).await
        }
    }
}
