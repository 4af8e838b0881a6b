//! Price snapshot sources and decorators.

pub mod caching;
pub mod feed_file;

pub use caching::CachingPriceSource;
pub use feed_file::FeedFileSource;
