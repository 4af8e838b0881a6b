//! Price snapshot types and the source abstraction

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// One entry of the upstream price feed: a currency observed at some instant
/// with its unit price in the reference currency.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    pub currency: String,
    pub date: DateTime<Utc>,
    pub price: Decimal,
}

/// A point-in-time mapping from currency symbol to reference-denominated unit
/// price. Feed ingestion only admits strictly positive prices.
///
/// Snapshots are read-only once built; computations treat them as a frozen
/// view of the market.
#[derive(Debug, Clone, Default)]
pub struct PriceSnapshot {
    prices: HashMap<String, Decimal>,
}

impl PriceSnapshot {
    /// Folds a feed into a snapshot. When the feed carries several entries for
    /// the same currency, the last one wins (feed order, not entry date).
    /// Entries with a non-positive price are skipped.
    pub fn from_feed(entries: impl IntoIterator<Item = FeedEntry>) -> Self {
        let mut prices = HashMap::new();
        for entry in entries {
            if entry.price <= Decimal::ZERO {
                warn!(
                    "Skipping feed entry for {} dated {}: non-positive price {}",
                    entry.currency, entry.date, entry.price
                );
                continue;
            }
            prices.insert(entry.currency, entry.price);
        }
        PriceSnapshot { prices }
    }

    pub fn price(&self, currency: &str) -> Option<Decimal> {
        self.prices.get(currency).copied()
    }

    /// Reference-currency value of `amount` units of `currency`. Absent when
    /// the snapshot has no price for the currency or the product overflows.
    pub fn value_of(&self, currency: &str, amount: Decimal) -> Option<Decimal> {
        self.price(currency)?.checked_mul(amount)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(String, Decimal)> for PriceSnapshot {
    /// Builds a snapshot directly from symbol/price pairs, without the feed
    /// fold's ingest filtering.
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        PriceSnapshot {
            prices: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot>;
}
