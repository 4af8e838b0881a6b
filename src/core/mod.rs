//! Core business logic abstractions

pub mod balance;
pub mod cache;
pub mod config;
pub mod convert;
pub mod log;
pub mod price;
pub mod priority;
pub mod sum;

// Re-export main types for cleaner imports
pub use balance::{Balance, sort_filter};
pub use convert::{SwapQuote, convert, quote, round_money};
pub use price::{FeedEntry, PriceSnapshot, PriceSource};
pub use priority::{EXCLUDED_PRIORITY, PriorityTable};
