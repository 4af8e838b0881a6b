use super::ui;
use crate::core::convert::{SwapQuote, quote};
use crate::core::price::PriceSource;
use anyhow::Result;
use rust_decimal::Decimal;
use tracing::warn;

fn display_quote(quote: &SwapQuote) -> String {
    let headline = format!(
        "{} {} = {}",
        quote.send_amount,
        quote.send_currency,
        ui::style_text(
            &format!("{:.2} {}", quote.receive_amount, quote.receive_currency),
            ui::StyleType::TotalValue,
        )
    );
    let rates = format!(
        "1 {} = {:.6} {}\n1 {} = {:.6} {}",
        quote.send_currency,
        quote.unit_rate,
        quote.receive_currency,
        quote.receive_currency,
        quote.inverse_rate,
        quote.send_currency,
    );

    format!("{headline}\n\n{}", ui::style_text(&rates, ui::StyleType::Subtle))
}

fn display_unavailable(amount: Decimal, from: &str, to: &str) -> String {
    ui::style_text(
        &format!("No quote available for {amount} {from} -> {to}: missing or unusable price data"),
        ui::StyleType::Error,
    )
}

/// Quotes a swap against the current snapshot. An unquotable swap is
/// reported, not treated as a failure.
pub async fn run(
    amount: Decimal,
    from: &str,
    to: &str,
    source: &(dyn PriceSource + Send + Sync),
) -> Result<()> {
    let snapshot = source.fetch_snapshot().await?;

    match quote(amount, from, to, &snapshot) {
        Some(swap_quote) => println!("{}", display_quote(&swap_quote)),
        None => {
            warn!("Swap {amount} {from} -> {to} could not be quoted");
            println!("{}", display_unavailable(amount, from, to));
        }
    }

    Ok(())
}
