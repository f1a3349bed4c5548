//! Cache configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Settings for building an [`LruCache`](crate::LruCache)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries held at once. Must be non-zero.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    1024
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl CacheConfig {
    /// Config with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Reject settings no cache could work with
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            warn!("rejecting cache config with zero capacity");
            return Err(Error::ZeroCapacity);
        }
        Ok(())
    }
}
