//! Command workflows: compare, quote, schedule.

use std::time::Duration;

use log::warn;

use feewise::{FeeModel, InvestmentCategory, compare, shares_after_fees};
use feewise_quotes::yahoo::YahooProvider;
use feewise_quotes::{CachedProvider, QuoteProvider, StockQuote, detect_category};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::render;

/// Options for the compare command.
pub struct CompareOptions {
    pub amount: Option<f64>,
    pub category: Option<InvestmentCategory>,
    pub ticker: Option<String>,
    pub json: bool,
    pub offline: bool,
}

/// Run the full comparison workflow.
pub fn run_compare(config: &Config, opts: &CompareOptions) -> Result<()> {
    // 1. Optional quote lookup: a live price for the shares display and a
    //    suggested category. Failure degrades to manual input.
    let quote = match &opts.ticker {
        Some(ticker) if config.lookup.enabled && !opts.offline => fetch_quote(config, ticker),
        _ => None,
    };
    let suggested = quote.as_ref().map(detect_category);

    // 2. Fill in whatever the flags didn't provide.
    let amount = match opts.amount {
        Some(amount) => amount,
        None => prompt_amount()?,
    };
    let category = match (opts.category, suggested) {
        (Some(category), _) => category,
        // Non-interactive output trusts the inferred category outright.
        (None, Some(suggested)) if opts.json => suggested,
        (None, suggested) => prompt_category(suggested)?,
    };

    // 3. Compute. The schedule was validated at config load.
    let model = FeeModel::new(config.schedule.clone());
    let result = compare(&model, amount, category)?;

    // 4. Render.
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    render::display_comparison(&result);

    // 5. Shares purchasable, only when a live price is known.
    if let Some(quote) = &quote {
        let best = result
            .ranked
            .iter()
            .find(|r| r.breakdown.platform == result.recommended);
        if let Some(best) = best {
            let shares = shares_after_fees(amount, quote.price, best.breakdown.total_cost);
            println!(
                "Approx. {shares:.2} shares of {} at {} after fees on {}",
                quote.ticker,
                render::format_currency(quote.price),
                result.recommended,
            );
        }
    }

    Ok(())
}

/// Look up a ticker and print its quote.
pub fn run_quote(config: &Config, ticker: &str) -> Result<()> {
    let provider = cached_provider(config);
    let quote = provider.lookup(ticker)?;
    render::display_quote(&quote);
    println!("  suggested category: {}", detect_category(&quote));
    Ok(())
}

/// Print the active fee schedule.
pub fn run_schedule(config: &Config) -> Result<()> {
    render::display_schedule(&config.schedule);
    Ok(())
}

fn cached_provider(config: &Config) -> CachedProvider<YahooProvider> {
    CachedProvider::with_ttl(
        YahooProvider::new(),
        Duration::from_secs(config.lookup.cache_ttl_secs),
    )
}

/// Lookup failures never abort the comparison; they log and fall through
/// to manual input.
fn fetch_quote(config: &Config, ticker: &str) -> Option<StockQuote> {
    match cached_provider(config).lookup(ticker) {
        Ok(quote) => {
            println!(
                "{}: {} {}",
                quote.ticker,
                render::format_currency(quote.price),
                quote.currency
            );
            Some(quote)
        }
        Err(e) => {
            warn!("quote lookup for {ticker} failed: {e}");
            None
        }
    }
}

fn prompt_amount() -> Result<f64> {
    dialoguer::Input::<f64>::new()
        .with_prompt("Investment amount (CAD)")
        .default(1000.0)
        .validate_with(|value: &f64| -> std::result::Result<(), &str> {
            if value.is_finite() && *value >= 0.0 {
                Ok(())
            } else {
                Err("amount must be finite and non-negative")
            }
        })
        .interact_text()
        .map_err(|e| Error::Prompt(format!("amount prompt failed: {e}")))
}

fn prompt_category(suggested: Option<InvestmentCategory>) -> Result<InvestmentCategory> {
    let default = suggested
        .and_then(|s| InvestmentCategory::ALL.iter().position(|c| *c == s))
        .unwrap_or(0);

    let selection = dialoguer::Select::new()
        .with_prompt("Investment category")
        .items(&InvestmentCategory::ALL)
        .default(default)
        .interact()
        .map_err(|e| Error::Prompt(format!("category prompt failed: {e}")))?;

    Ok(InvestmentCategory::ALL[selection])
}
