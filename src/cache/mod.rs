//! Cache Module
//!
//! Bounded memoization of Fibonacci results with LRU eviction.

use std::num::NonZeroUsize;

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::{Iter, LruCache};
pub use stats::CacheStats;
pub use store::{CacheKey, CacheStore, SharedCache};

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(5).unwrap();
