//! CLI entry point for feewise.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use feewise::InvestmentCategory;
use feewise_cli::commands::{self, CompareOptions};
use feewise_cli::config::Config;
use feewise_cli::error::Error;

#[derive(Parser)]
#[command(name = "feewise")]
#[command(about = "Compare brokerage costs: Wealthsimple vs Questrade vs Norbert's Gambit")]
#[command(version)]
struct Cli {
    /// Path to a feewise.toml overriding the fee schedule
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare costs for one order and recommend the cheapest platform
    Compare {
        /// Order amount in dollars (prompted when omitted)
        #[arg(long)]
        amount: Option<f64>,

        /// Investment category: "CAD ETF", "USD ETF", "US STOCK" or "CAD STOCK"
        #[arg(long, value_parser = parse_category)]
        category: Option<InvestmentCategory>,

        /// Ticker symbol to resolve for a live price and a suggested category
        #[arg(long)]
        ticker: Option<String>,

        /// Emit the comparison as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Skip the live quote lookup
        #[arg(long)]
        offline: bool,
    },

    /// Look up a ticker: price, currency and 30-day range
    Quote { ticker: String },

    /// Print the active fee schedule
    Schedule,
}

fn parse_category(s: &str) -> Result<InvestmentCategory, String> {
    s.parse().map_err(|e: feewise::FeeError| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let result = match cli.command {
        Command::Compare {
            amount,
            category,
            ticker,
            json,
            offline,
        } => {
            let opts = CompareOptions {
                amount,
                category,
                ticker,
                json,
                offline,
            };
            commands::run_compare(&config, &opts)
        }
        Command::Quote { ticker } => commands::run_quote(&config, &ticker),
        Command::Schedule => commands::run_schedule(&config),
    };

    if let Err(e) = result {
        match &e {
            // Lookup failures on the quote command are expected, keep the
            // message short.
            Error::Quote(q) => {
                eprintln!("{q}");
                process::exit(1);
            }
            _ => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}
