/*!
 * Pool Configuration
 *
 * Construction parameters for a `BufferPool`, loadable with serde
 */

use crate::errors::{PoolError, PoolResult};
use crate::limits::{
    DEFAULT_INITIAL_CAPACITY, DEFAULT_POOL_SIZE, MAX_INITIAL_CAPACITY, MAX_POOL_SIZE,
};
use serde::{Deserialize, Serialize};

/// Pool configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of buffers retained for reuse
    pub size: usize,
    /// Seed for the adaptive target capacity, in bytes
    ///
    /// Should approximate a representative (e.g. 95th percentile) write size.
    /// Too small causes frequent regrowth, too large wastes resident memory.
    pub initial_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_POOL_SIZE,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl PoolConfig {
    pub const fn new(size: usize, initial_capacity: usize) -> Self {
        Self {
            size,
            initial_capacity,
        }
    }

    /// Many short writes (log lines, small RPC frames)
    pub const fn small_writes() -> Self {
        Self {
            size: 256,
            initial_capacity: 512,
        }
    }

    /// Few large writes (snapshots, batched payloads)
    pub const fn large_writes() -> Self {
        Self {
            size: 16,
            initial_capacity: 256 * 1024,
        }
    }

    /// Check bounds before a pool is built from this configuration
    pub fn validate(&self) -> PoolResult<()> {
        if self.size == 0 {
            return Err(PoolError::ZeroSize);
        }
        if self.size > MAX_POOL_SIZE {
            return Err(PoolError::SizeTooLarge {
                size: self.size,
                max: MAX_POOL_SIZE,
            });
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(PoolError::CapacityTooLarge {
                capacity: self.initial_capacity,
                max: MAX_INITIAL_CAPACITY,
            });
        }
        Ok(())
    }
}
