/*!
 * Pool Statistics
 */

use std::sync::atomic::{AtomicU64, Ordering};

/// Relaxed event counters; snapshots are approximate under contention
#[derive(Debug, Default)]
pub(crate) struct PoolCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    recycled: AtomicU64,
    replaced: AtomicU64,
    discarded: AtomicU64,
}

impl PoolCounters {
    #[inline]
    pub(crate) fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn recycle(&self) {
        self.recycled.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn replace(&self) {
        self.replaced.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn discard(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, retained: usize, target_capacity: usize) -> PoolStats {
        PoolStats {
            retained,
            target_capacity,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            recycled: self.recycled.load(Ordering::Relaxed),
            replaced: self.replaced.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
        }
    }
}

/// Pool statistics for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers currently held for reuse
    pub retained: usize,
    /// Current adaptive target capacity in bytes
    pub target_capacity: usize,
    /// Acquires served from the store
    pub hits: u64,
    /// Acquires that manufactured a new buffer
    pub misses: u64,
    /// Releases stored after an in-place reset
    pub recycled: u64,
    /// Releases whose oversized buffer was swapped for a fresh one
    pub replaced: u64,
    /// Releases dropped because the store was full
    pub discarded: u64,
}

impl PoolStats {
    /// Fraction of acquires served from the store (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total releases observed
    pub fn releases(&self) -> u64 {
        self.recycled + self.replaced + self.discarded
    }
}
