//! Error types for lrucache

use thiserror::Error;

/// Result type alias for lrucache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors
///
/// A cache that hits one of these can never hold data, so the requested
/// operation fails outright. The process and the cache value stay usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Capacity is zero
    #[error("Cache capacity is 0")]
    ZeroCapacity,
}

/// Why a lookup missed
///
/// Misses are a normal part of cache usage. [`LruCache::get`] folds both
/// variants into `None`; [`LruCache::try_get`] keeps them apart.
///
/// [`LruCache::get`]: crate::LruCache::get
/// [`LruCache::try_get`]: crate::LruCache::try_get
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Miss {
    /// The cache is empty or has zero capacity
    #[error("Cache is empty or capacity is 0")]
    Unavailable,

    /// The key is not cached
    #[error("Not found")]
    NotFound,
}
