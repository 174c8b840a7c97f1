//! CLI for judging utterances without running the HTTP server
//!
//! Outputs the same JSON shapes as the API so results can be piped or diffed.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use server_core::config::Config;
use server_core::domains::pricing::{Item, PricingError, ZeroPricePolicy};
use server_core::kernel::create_pricing_service;
use server_core::server::routes::AnalyzeResponse;

#[derive(Parser)]
#[command(name = "analyze_cli")]
#[command(about = "Judge spoken market prices against the fair-price table")]
struct Cli {
    /// Treat a spoken price of 0 as a real price
    #[arg(long, global = true)]
    accept_zero_price: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one utterance, e.g. `analyze "aloo 22"`
    Analyze { text: String },

    /// Print the fair-price table, optionally for a single item
    Prices {
        #[arg(long)]
        item: Option<Item>,
    },
}

fn output<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if cli.accept_zero_price {
        config.zero_price_policy = ZeroPricePolicy::Accept;
    }

    match cli.command {
        Commands::Analyze { text } => cmd_analyze(&config, &text),
        Commands::Prices { item } => cmd_prices(&config, item),
    }
}

fn cmd_analyze(config: &Config, text: &str) -> Result<()> {
    let service = create_pricing_service(config);

    let response = match service.analyze(text) {
        Ok(assessment) => AnalyzeResponse::Assessment(assessment),
        Err(PricingError::Evaluation(e)) => AnalyzeResponse::Error {
            error: e.to_string(),
        },
        Err(e @ PricingError::Analysis(_)) => return Err(e).context("Failed to analyze text"),
    };

    output(&response)
}

fn cmd_prices(config: &Config, item: Option<Item>) -> Result<()> {
    let service = create_pricing_service(config);
    let entries: Vec<_> = service
        .catalog()
        .entries()
        .iter()
        .filter(|entry| item.map_or(true, |wanted| entry.item == wanted))
        .collect();

    output(&entries)
}
