pub mod cli;
pub mod core;
pub mod sources;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::cache::Cache;
use crate::core::config::AppConfig;
use crate::core::price::PriceSnapshot;
use crate::sources::{CachingPriceSource, FeedFileSource};

/// Commands the application can execute once configuration is loaded.
pub enum AppCommand {
    Balances,
    Swap {
        amount: Decimal,
        from: String,
        to: String,
    },
    Sum {
        n: u64,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    // Sum needs neither configuration nor prices.
    if let AppCommand::Sum { n } = &command {
        return cli::sum::run(*n);
    }

    info!("swapdesk starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    // Shared snapshot cache, so every command in a process sees one fetch
    let price_cache = Arc::new(Cache::<String, PriceSnapshot>::new());

    let feed_path = config
        .prices
        .feed_path
        .as_deref()
        .context("No price feed configured. Set `prices.feed_path` in the config file")?;
    let source = CachingPriceSource::new(FeedFileSource::new(feed_path), price_cache);

    match command {
        AppCommand::Balances => {
            cli::balances::run(
                &config.wallets,
                &source,
                &config.priorities,
                &config.currency,
            )
            .await
        }
        AppCommand::Swap { amount, from, to } => cli::swap::run(amount, &from, &to, &source).await,
        AppCommand::Sum { .. } => unreachable!("Sum is handled before configuration is loaded"),
    }
}
