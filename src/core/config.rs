use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::core::balance::Balance;
use crate::core::priority::PriorityTable;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Wallet {
    pub name: String,
    pub balances: Vec<Balance>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PricesConfig {
    pub feed_path: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub wallets: Vec<Wallet>,
    #[serde(default)]
    pub prices: PricesConfig,
    /// Reference currency balances are valued in.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Overrides the built-in chain ranking when present.
    #[serde(default)]
    pub priorities: PriorityTable,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "swapdesk", "swapdesk")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
