//! # lrucache
//!
//! Fixed-capacity in-memory key-value cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **Recency list**: arena-backed doubly linked list, head = most recent (O(1) promote/evict)
//! - **Index**: AHash map from key to list node (O(1) lookup)
//! - **Shared handle**: single-mutex wrapper for use across threads
//!
//! ```
//! use lrucache::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put(1, "one").unwrap();
//! cache.put(2, "two").unwrap();
//! cache.get(&1);
//! cache.put(3, "three").unwrap();
//!
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.get(&1), Some(&"one"));
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod entry;
mod error;
mod index;
mod list;
mod shared;
mod stats;

pub use cache::LruCache;
pub use config::CacheConfig;
pub use entry::Entry;
pub use error::{Error, Miss, Result};
pub use shared::SharedLruCache;
pub use stats::{CacheStats, StatsSnapshot};
