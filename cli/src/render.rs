//! Terminal rendering: comparison tables, cost bars, quotes, schedules.

use feewise::{Comparison, CostBreakdown, FeeSchedule};
use feewise_quotes::StockQuote;

/// Width of the relative cost bar, in characters.
const BAR_WIDTH: usize = 24;

/// Format dollars with thousands separators, e.g. 1234.5 becomes "$1,234.50".
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut digits = whole.to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let split = digits.len() - 3;
        grouped = format!(",{}{}", &digits[split..], grouped);
        digits.truncate(split);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${digits}{grouped}.{fraction:02}")
}

pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

/// Bar proportional to `cost / max_cost`, full width at the maximum.
pub fn cost_bar(cost: f64, max_cost: f64) -> String {
    let fraction = if max_cost > 0.0 {
        (cost / max_cost).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;

    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// One-line component summary, skipping parts that are absent or zero.
fn component_summary(breakdown: &CostBreakdown) -> String {
    let mut parts = Vec::new();
    if let Some(conversion) = breakdown.conversion_fee {
        if conversion > 0.0 {
            parts.push(format!("conversion {}", format_currency(conversion)));
        }
    }
    if breakdown.commission > 0.0 {
        parts.push(format!("commission {}", format_currency(breakdown.commission)));
    }
    if let Some(ecn) = breakdown.ecn_fee {
        if ecn > 0.0 {
            parts.push(format!("ECN {}", format_currency(ecn)));
        }
    }
    if parts.is_empty() {
        "free".to_string()
    } else {
        parts.join(" + ")
    }
}

/// Print the full comparison table with relative cost bars.
pub fn display_comparison(result: &Comparison) {
    println!(
        "\nCOST COMPARISON: {} into {}",
        format_currency(result.amount),
        result.category
    );

    for entry in &result.ranked {
        let b = &entry.breakdown;
        let marker = if b.platform == result.recommended {
            "  << cheapest"
        } else {
            ""
        };
        println!(
            "  {:30} {:>12} {:>7}  {}{}",
            b.platform.label(),
            format_currency(b.total_cost),
            format_percentage(entry.cost_pct),
            cost_bar(b.total_cost, result.max_total_cost),
            marker,
        );
        println!("  {:30} {}", "", component_summary(b));
    }

    for b in &result.breakdowns {
        if !b.applicable {
            let note = b.note.as_deref().unwrap_or("not applicable");
            println!("  {:30} skipped: {note}", b.platform.label());
        }
    }

    println!("\nRecommended: {}", result.recommended);
}

/// Print a resolved quote with its 30-day range.
pub fn display_quote(quote: &StockQuote) {
    println!("{} ({})", quote.name, quote.ticker);
    println!("  price:      {} {}", format_currency(quote.price), quote.currency);
    if let Some(exchange) = &quote.exchange {
        println!("  exchange:   {exchange}");
    }
    if let Some(quote_type) = &quote.quote_type {
        println!("  type:       {quote_type}");
    }
    if let Some((low, high)) = quote.range() {
        println!(
            "  30d range:  {} to {}",
            format_currency(low),
            format_currency(high)
        );
    }
}

/// Print the active fee schedule.
pub fn display_schedule(schedule: &FeeSchedule) {
    println!("FEE SCHEDULE:");
    println!(
        "  Wealthsimple conversion:  {:.2}%",
        schedule.wealthsimple_conversion_pct * 100.0
    );
    println!(
        "  Questrade conversion:     {:.2}%",
        schedule.questrade_conversion_pct * 100.0
    );
    println!("  ECN fee per share:        ${:.4}", schedule.ecn_fee_per_share);
    println!(
        "  Commission (min/max):     {} / {}  (flat model charges the minimum)",
        format_currency(schedule.min_commission),
        format_currency(schedule.max_commission)
    );
    println!(
        "  DLR commission per leg:   {}",
        format_currency(schedule.dlr_commission)
    );
    println!(
        "  Reference share price:    {}",
        format_currency(schedule.reference_share_price)
    );
    println!(
        "  DLR reference price:      {}",
        format_currency(schedule.dlr_share_price)
    );
}
