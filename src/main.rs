//! # linkchain CLI
//!
//! Times chain construction over a scenario table and prints the results.

use std::path::PathBuf;

use clap::Parser;
use linkchain::bench::run_all;
use linkchain::chain::{ChainBuilder, SystemClock};
use linkchain::config::{BenchConfig, ReportFormat, ScenarioConfig};
use tracing_subscriber::EnvFilter;

/// Measure hash-linked chain construction.
#[derive(Parser, Debug)]
#[command(name = "linkchain", version, about)]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scenario as NxK (records x payload width); repeatable, replaces the table
    #[arg(long = "scenario", allow_hyphen_values = true)]
    scenarios: Vec<ScenarioConfig>,

    /// Builds averaged per scenario
    #[arg(long)]
    runs: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<Format>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing with env filter (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BenchConfig::from_file(path)?,
        None => BenchConfig::default(),
    };
    if !cli.scenarios.is_empty() {
        config.scenarios = cli.scenarios;
    }
    if let Some(runs) = cli.runs {
        config.runs = runs;
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }

    let builder = ChainBuilder::with_config(config.chain.clone(), SystemClock)?;
    let report = run_all(&builder, &config, &mut rand::thread_rng())?;
    println!("{}", report.render(config.format)?);

    Ok(())
}
