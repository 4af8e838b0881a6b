use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::core::cache::Cache;
use crate::core::price::{PriceSnapshot, PriceSource};

/// Cache key for the single snapshot a source produces.
const PRICES_CACHE_KEY: &str = "prices";

/// Caches the snapshot of an inner source for the lifetime of the cache.
///
/// Failed fetches are not cached; the next call hits the inner source again.
pub struct CachingPriceSource<T: PriceSource> {
    inner: T,
    cache: Arc<Cache<String, PriceSnapshot>>,
}

impl<T: PriceSource> CachingPriceSource<T> {
    pub fn new(inner: T, cache: Arc<Cache<String, PriceSnapshot>>) -> Self {
        CachingPriceSource { inner, cache }
    }
}

#[async_trait]
impl<T: PriceSource + Send + Sync> PriceSource for CachingPriceSource<T> {
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
        if let Some(cached) = self.cache.get(&PRICES_CACHE_KEY.to_string()).await {
            return Ok(cached);
        }

        let snapshot = self.inner.fetch_snapshot().await?;
        debug!("Caching snapshot with {} prices", snapshot.len());
        self.cache
            .put(PRICES_CACHE_KEY.to_string(), snapshot.clone())
            .await;

        Ok(snapshot)
    }
}
