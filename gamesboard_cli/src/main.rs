mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gamesboard_lib::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "gamesboard")]
#[command(about = "Collect CrossFit Games leaderboards into tables")]
struct Cli {
    /// Output format: table, markdown, csv or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// TOML file with default years, division and API host
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API host (also read from GAMESBOARD_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Competition metadata: pages, competitors and events per year/division
    Info(commands::PeriodArgs),
    /// Competitor profiles with metric height and weight
    Competitors(commands::PeriodArgs),
    /// Per-event scores with normalized ranks
    Scores(commands::PeriodArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gamesboard=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("GAMESBOARD_BASE_URL").ok())
        .unwrap_or_else(|| config.base_url.clone());
    tracing::debug!("using API at {}", base_url);
    let client = Client::with_base_url(&base_url);

    let table = match &cli.command {
        Commands::Info(args) => commands::info(args, &config, &client).await?,
        Commands::Competitors(args) => commands::competitors(args, &config, &client).await?,
        Commands::Scores(args) => commands::scores(args, &config, &client).await?,
    };
    output::print(&table, &format)?;

    Ok(())
}
