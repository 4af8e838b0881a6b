use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::core::price::{FeedEntry, PriceSnapshot, PriceSource};

/// Reads price feed entries from a JSON file on disk.
///
/// The file holds an array of entries; entries repeat when a currency was
/// quoted more than once, and [`PriceSnapshot::from_feed`] resolves the
/// duplicates.
pub struct FeedFileSource {
    path: PathBuf,
}

impl FeedFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FeedFileSource { path: path.into() }
    }
}

#[async_trait]
impl PriceSource for FeedFileSource {
    #[instrument(name = "FeedFileFetch", skip(self), fields(path = %self.path.display()))]
    async fn fetch_snapshot(&self) -> Result<PriceSnapshot> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read price feed: {}", self.path.display()))?;

        let entries: Vec<FeedEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse price feed: {}", self.path.display()))?;
        debug!("Feed contains {} entries", entries.len());

        Ok(PriceSnapshot::from_feed(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_snapshot_from_file() {
        let dir = TempDir::new().unwrap();
        let feed_path = dir.path().join("prices.json");
        fs::write(
            &feed_path,
            r#"[
                {"currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.5},
                {"currency": "USDC", "date": "2023-08-29T07:10:40.000Z", "price": 1},
                {"currency": "ETH", "date": "2023-08-29T07:11:00.000Z", "price": 1646.25}
            ]"#,
        )
        .unwrap();

        let source = FeedFileSource::new(&feed_path);
        let snapshot = source.fetch_snapshot().await.unwrap();

        assert_eq!(snapshot.len(), 2);
        // The later array entry wins for the repeated currency.
        assert_eq!(snapshot.price("ETH"), Some(Decimal::new(164625, 2)));
        assert_eq!(snapshot.price("USDC"), Some(Decimal::ONE));
    }

    #[tokio::test]
    async fn test_fetch_snapshot_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = FeedFileSource::new(dir.path().join("absent.json"));

        let err = source.fetch_snapshot().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read price feed"));
    }

    #[tokio::test]
    async fn test_fetch_snapshot_invalid_json() {
        let dir = TempDir::new().unwrap();
        let feed_path = dir.path().join("prices.json");
        fs::write(&feed_path, "{ not json ]").unwrap();

        let source = FeedFileSource::new(&feed_path);
        let err = source.fetch_snapshot().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse price feed"));
    }
}
