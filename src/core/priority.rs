//! Per-chain display priorities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel rank for blockchains missing from the table. The value -99 is a
/// domain convention, not derived from anything; balances at or below it are
/// excluded from display.
pub const EXCLUDED_PRIORITY: i32 = -99;

/// Mapping from blockchain identifier to an integer display rank.
///
/// Higher ranks sort first. Lookups for unknown chains return
/// [`EXCLUDED_PRIORITY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityTable(HashMap<String, i32>);

impl PriorityTable {
    pub fn priority(&self, blockchain: &str) -> i32 {
        self.0.get(blockchain).copied().unwrap_or(EXCLUDED_PRIORITY)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for PriorityTable {
    /// The built-in table: Osmosis 100, Ethereum 50, Arbitrum 30, Zilliqa 20,
    /// Neo 20.
    fn default() -> Self {
        [
            ("Osmosis", 100),
            ("Ethereum", 50),
            ("Arbitrum", 30),
            ("Zilliqa", 20),
            ("Neo", 20),
        ]
        .into_iter()
        .map(|(chain, rank)| (chain.to_string(), rank))
        .collect()
    }
}

impl FromIterator<(String, i32)> for PriorityTable {
    fn from_iter<I: IntoIterator<Item = (String, i32)>>(iter: I) -> Self {
        PriorityTable(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_ranks() {
        let table = PriorityTable::default();
        assert_eq!(table.priority("Osmosis"), 100);
        assert_eq!(table.priority("Ethereum"), 50);
        assert_eq!(table.priority("Arbitrum"), 30);
        assert_eq!(table.priority("Zilliqa"), 20);
        assert_eq!(table.priority("Neo"), 20);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_unknown_chain_maps_to_sentinel() {
        let table = PriorityTable::default();
        assert_eq!(table.priority("Dogechain"), EXCLUDED_PRIORITY);
        assert_eq!(table.priority(""), EXCLUDED_PRIORITY);
    }

    #[test]
    fn test_custom_table_replaces_defaults() {
        let table: PriorityTable = [("Solana".to_string(), 70)].into_iter().collect();
        assert_eq!(table.priority("Solana"), 70);
        // The built-in entries are gone once a custom table is supplied.
        assert_eq!(table.priority("Osmosis"), EXCLUDED_PRIORITY);
    }

    #[test]
    fn test_deserializes_from_plain_map() {
        let table: PriorityTable =
            serde_yaml::from_str("Osmosis: 100\nKusama: 10\n").expect("Failed to deserialize");
        assert_eq!(table.priority("Kusama"), 10);
        assert_eq!(table.priority("Osmosis"), 100);
    }
}
