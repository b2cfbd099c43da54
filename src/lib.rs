/*!
 * Sized Buffer Pool
 * Bounded pool of growable byte buffers with an adaptive pre-allocation size
 *
 * ```
 * use sized_buffer_pool::BufferPool;
 * use std::io::Write;
 *
 * let pool = BufferPool::new(16, 4096);
 *
 * let mut buf = pool.acquire();
 * buf.write_all(b"serialized message").unwrap();
 * assert_eq!(buf.as_slice(), b"serialized message");
 *
 * pool.release(buf);
 * assert!(pool.acquire().is_empty());
 * ```
 */

pub mod buffer;
pub mod config;
pub mod errors;
pub mod limits;
pub mod monitoring;
pub mod pool;

// Re-exports
pub use buffer::Buffer;
pub use config::PoolConfig;
pub use errors::{PoolError, PoolResult};
pub use monitoring::{init_tracing, report_stats};
pub use pool::{
    aligned_capacity, BufferPool, CapacityEstimator, LockFreeSlots, MutexSlots, PoolStats,
    PooledBuffer, SlotStore,
};
