//! Swap conversion arithmetic over a price snapshot

use crate::core::price::PriceSnapshot;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits in a receivable amount.
pub const RECEIVE_SCALE: u32 = 2;

/// Fractional digits in a quoted unit rate.
pub const RATE_SCALE: u32 = 6;

/// A fully computed swap: the receivable amount plus both unit rates.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapQuote {
    pub send_amount: Decimal,
    pub send_currency: String,
    pub receive_currency: String,
    /// Receivable amount, rounded to [`RECEIVE_SCALE`] digits.
    pub receive_amount: Decimal,
    /// How much of the receive currency one unit of the send currency buys.
    pub unit_rate: Decimal,
    /// How much of the send currency one unit of the receive currency buys.
    pub inverse_rate: Decimal,
}

/// Computes the amount received when swapping `amount` of `from` into `to`.
///
/// Returns the absent result (`None`) instead of raising whenever the
/// conversion is not computable: the amount is not strictly positive, either
/// price is missing from the snapshot or not strictly positive, or the
/// arithmetic overflows. Division only ever happens against a checked
/// positive price.
///
/// The result carries exactly [`RECEIVE_SCALE`] fractional digits, rounded
/// half-away-from-zero, so a raw 0.005 becomes 0.01.
pub fn convert(amount: Decimal, from: &str, to: &str, prices: &PriceSnapshot) -> Option<Decimal> {
    if amount <= Decimal::ZERO {
        return None;
    }
    let from_price = positive_price(prices, from)?;
    let to_price = positive_price(prices, to)?;

    let received = amount.checked_mul(from_price)?.checked_div(to_price)?;
    Some(round_money(received, RECEIVE_SCALE))
}

/// Computes a full quote: the receivable amount and the unit rates in both
/// directions, each rounded to [`RATE_SCALE`] digits. Absent exactly when
/// [`convert`] is absent.
pub fn quote(amount: Decimal, from: &str, to: &str, prices: &PriceSnapshot) -> Option<SwapQuote> {
    let receive_amount = convert(amount, from, to, prices)?;
    let from_price = positive_price(prices, from)?;
    let to_price = positive_price(prices, to)?;

    let unit_rate = from_price.checked_div(to_price)?;
    let inverse_rate = to_price.checked_div(from_price)?;

    Some(SwapQuote {
        send_amount: amount,
        send_currency: from.to_string(),
        receive_currency: to.to_string(),
        receive_amount,
        unit_rate: round_money(unit_rate, RATE_SCALE),
        inverse_rate: round_money(inverse_rate, RATE_SCALE),
    })
}

fn positive_price(prices: &PriceSnapshot, currency: &str) -> Option<Decimal> {
    prices.price(currency).filter(|p| *p > Decimal::ZERO)
}

/// Rounds a monetary value to `scale` fractional digits, half away from zero.
pub fn round_money(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}
