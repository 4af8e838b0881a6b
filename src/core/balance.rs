//! Wallet balance records and the priority ranking over them

use crate::core::priority::EXCLUDED_PRIORITY;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single wallet holding: an asset and the chain it lives on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub blockchain: String,
    pub currency: String,
    pub amount: Decimal,
}

/// Filters and ranks balances for display.
///
/// A balance is kept iff its chain ranks strictly above [`EXCLUDED_PRIORITY`]
/// and its amount is strictly positive. The survivors are ordered by
/// descending rank; balances with equal rank keep their input order (the sort
/// is stable). The input slice is never mutated.
pub fn sort_filter<F>(balances: &[Balance], priority_of: F) -> Vec<Balance>
where
    F: Fn(&str) -> i32,
{
    let mut kept: Vec<Balance> = balances
        .iter()
        .filter(|balance| {
            priority_of(&balance.blockchain) > EXCLUDED_PRIORITY && balance.amount > Decimal::ZERO
        })
        .cloned()
        .collect();

    kept.sort_by(|lhs, rhs| priority_of(&rhs.blockchain).cmp(&priority_of(&lhs.blockchain)));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::priority::PriorityTable;

    fn balance(blockchain: &str, currency: &str, amount: &str) -> Balance {
        Balance {
            blockchain: blockchain.to_string(),
            currency: currency.to_string(),
            amount: amount.parse().unwrap(),
        }
    }

    #[test]
    fn test_orders_by_descending_priority() {
        let table = PriorityTable::default();
        let balances = vec![
            balance("Arbitrum", "ARB", "5"),
            balance("Osmosis", "OSMO", "120.5"),
            balance("Ethereum", "ETH", "1.25"),
        ];

        let sorted = sort_filter(&balances, |chain| table.priority(chain));

        let chains: Vec<&str> = sorted.iter().map(|b| b.blockchain.as_str()).collect();
        assert_eq!(chains, vec!["Osmosis", "Ethereum", "Arbitrum"]);
    }

    #[test]
    fn test_excludes_unknown_chains_and_non_positive_amounts() {
        let table = PriorityTable::default();
        let balances = vec![
            balance("Osmosis", "OSMO", "10"),
            balance("Dogechain", "DOGE", "999"),
            balance("Ethereum", "ETH", "0"),
            balance("Arbitrum", "ARB", "0.0001"),
        ];

        let sorted = sort_filter(&balances, |chain| table.priority(chain));

        // Output never grows, and every survivor passes both predicates.
        assert!(sorted.len() <= balances.len());
        assert_eq!(sorted.len(), 2);
        for b in &sorted {
            assert!(table.priority(&b.blockchain) > EXCLUDED_PRIORITY);
            assert!(b.amount > Decimal::ZERO);
        }
    }

    #[test]
    fn test_priority_equal_to_sentinel_is_excluded() {
        // Strictly greater than the sentinel, not greater-or-equal.
        let balances = vec![balance("Edgecase", "EDG", "1")];
        let sorted = sort_filter(&balances, |_| EXCLUDED_PRIORITY);
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let table = PriorityTable::default();
        let balances = vec![
            balance("Zilliqa", "ZIL", "3"),
            balance("Neo", "NEO", "7"),
            balance("Osmosis", "OSMO", "1"),
        ];
        let sorted = sort_filter(&balances, |chain| table.priority(chain));
        let chains: Vec<&str> = sorted.iter().map(|b| b.blockchain.as_str()).collect();
        assert_eq!(chains, vec!["Osmosis", "Zilliqa", "Neo"]);

        // Swapping the tied pair in the input swaps it in the output.
        let reversed = vec![
            balances[1].clone(),
            balances[0].clone(),
            balances[2].clone(),
        ];
        let sorted = sort_filter(&reversed, |chain| table.priority(chain));
        let chains: Vec<&str> = sorted.iter().map(|b| b.blockchain.as_str()).collect();
        assert_eq!(chains, vec!["Osmosis", "Neo", "Zilliqa"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let table = PriorityTable::default();
        let balances = vec![
            balance("Neo", "NEO", "1"),
            balance("Dogechain", "DOGE", "2"),
            balance("Osmosis", "OSMO", "3"),
        ];
        let snapshot = balances.clone();

        let sorted = sort_filter(&balances, |chain| table.priority(chain));

        assert_eq!(balances, snapshot);
        assert_ne!(sorted.len(), balances.len());
    }

    #[test]
    fn test_empty_input() {
        let sorted = sort_filter(&[], |_| 100);
        assert!(sorted.is_empty());
    }
}
