/*!
 * Adaptive Buffer Pool
 *
 * Bounded pool of reusable byte buffers whose pre-allocation size follows
 * recent usage:
 * - Slot store: bounded, non-blocking push/pop of recycled buffers
 * - Estimator: moving average of released capacities
 * - Sizing: power-of-two aligned capacity for fresh buffers
 *
 * # Lifecycle
 *
 * `acquire` pops a recycled buffer or manufactures one at the current target.
 * `release` feeds the buffer's capacity to the estimator, then either drops
 * the buffer (store full), swaps it for a fresh one (oversized) or resets it
 * in place, and finally tries to store it.
 *
 * Neither operation waits: contention degrades to "allocate new" on acquire
 * and "discard" on release.
 */

mod estimator;
mod guard;
mod sizing;
mod stats;
mod store;

pub use estimator::CapacityEstimator;
pub use guard::PooledBuffer;
pub use sizing::aligned_capacity;
pub use stats::PoolStats;
pub use store::{LockFreeSlots, MutexSlots, SlotStore};

use crate::buffer::Buffer;
use crate::config::PoolConfig;
use crate::errors::PoolResult;
use stats::PoolCounters;
use std::fmt;
use tracing::{debug, trace, warn};

/// Bounded, adaptively sized buffer pool
///
/// Share across threads with `Arc<BufferPool>`; all methods take `&self`.
pub struct BufferPool<S: SlotStore = LockFreeSlots> {
    slots: S,
    estimator: CapacityEstimator,
    counters: PoolCounters,
}

impl BufferPool {
    /// Create a lock-free pool retaining up to `size` buffers
    ///
    /// `initial_capacity` seeds the target capacity and should approximate a
    /// representative (95th percentile) write size. A `size` of 0 is clamped
    /// to 1; use [`BufferPool::from_config`] to reject it instead.
    pub fn new(size: usize, initial_capacity: usize) -> Self {
        Self::with_store(size, initial_capacity)
    }

    /// Create a lock-free pool from validated configuration
    pub fn from_config(config: &PoolConfig) -> PoolResult<Self> {
        Self::try_with_store(config)
    }
}

impl<S: SlotStore> BufferPool<S> {
    /// Create a pool backed by the slot store `S`
    pub fn with_store(size: usize, initial_capacity: usize) -> Self {
        if size == 0 {
            warn!("Buffer pool size 0 clamped to 1");
        }
        let size = size.max(1);

        debug!(size, initial_capacity, "Creating buffer pool");

        Self {
            slots: S::with_capacity(size),
            estimator: CapacityEstimator::new(initial_capacity),
            counters: PoolCounters::default(),
        }
    }

    /// Create a pool backed by `S` from validated configuration
    pub fn try_with_store(config: &PoolConfig) -> PoolResult<Self> {
        config.validate()?;
        Ok(Self::with_store(config.size, config.initial_capacity))
    }

    /// Get a buffer from the pool, or manufacture one at the current target
    ///
    /// Never blocks and never changes the target capacity. The returned
    /// buffer is empty.
    #[inline]
    pub fn acquire(&self) -> Buffer {
        if let Some(buffer) = self.slots.try_pop() {
            self.counters.hit();
            trace!(capacity = buffer.capacity(), "Reused pooled buffer");
            return buffer;
        }

        self.counters.miss();
        let buffer = sizing::manufacture(self.estimator.get());
        trace!(capacity = buffer.capacity(), "Manufactured buffer");
        buffer
    }

    /// Get a buffer wrapped in a guard that releases it on drop
    #[inline]
    pub fn acquire_guarded(&self) -> PooledBuffer<'_, S> {
        PooledBuffer::new(self.acquire(), self)
    }

    /// Return a buffer to the pool
    ///
    /// The buffer's capacity always updates the target. The buffer itself is
    /// dropped if the store is full; if it is larger than the new target a
    /// freshly sized replacement is stored instead. Never blocks.
    ///
    /// The caller must not keep using a buffer after releasing it.
    pub fn release(&self, mut buffer: Buffer) {
        let capacity = buffer.capacity();
        let target = self.estimator.observe(capacity);

        // Opportunistic: another release may still fill the last slot below
        if self.slots.is_full() {
            self.counters.discard();
            trace!(capacity, target, "Pool full, dropping released buffer");
            return;
        }

        let replaced = capacity > target;
        if replaced {
            buffer = sizing::manufacture(target);
            debug!(
                capacity,
                target,
                replacement = buffer.capacity(),
                "Replaced oversized buffer"
            );
        } else {
            buffer.reset();
        }

        match self.slots.try_push(buffer) {
            Ok(()) if replaced => self.counters.replace(),
            Ok(()) => self.counters.recycle(),
            Err(_) => {
                self.counters.discard();
                trace!(capacity, target, "Pool filled concurrently, dropping buffer");
            }
        }
    }

    /// Current adaptive target capacity in bytes
    #[inline]
    pub fn target_capacity(&self) -> usize {
        self.estimator.get()
    }

    /// Buffers currently held for reuse
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of buffers retained
    #[inline]
    pub fn size(&self) -> usize {
        self.slots.capacity()
    }

    /// Get pool statistics
    pub fn stats(&self) -> PoolStats {
        self.counters.snapshot(self.len(), self.target_capacity())
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        let config = PoolConfig::default();
        Self::new(config.size, config.initial_capacity)
    }
}

impl<S: SlotStore> fmt::Debug for BufferPool<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("size", &self.size())
            .field("retained", &self.len())
            .field("target_capacity", &self.target_capacity())
            .finish()
    }
}
