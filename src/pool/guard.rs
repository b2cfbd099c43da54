/*!
 * Pooled Buffer Guard
 * RAII handle that releases its buffer back to the pool on drop
 */

use super::store::SlotStore;
use super::BufferPool;
use crate::buffer::Buffer;
use std::ops::{Deref, DerefMut};

/// Buffer borrowed from a pool, released automatically on drop
///
/// # Example
///
/// ```
/// use sized_buffer_pool::BufferPool;
///
/// let pool = BufferPool::new(8, 1024);
/// {
///     let mut buf = pool.acquire_guarded();
///     buf.extend_from_slice(b"payload");
/// } // released here
/// assert_eq!(pool.len(), 1);
/// ```
pub struct PooledBuffer<'a, S: SlotStore> {
    inner: Option<Buffer>,
    pool: &'a BufferPool<S>,
}

impl<'a, S: SlotStore> PooledBuffer<'a, S> {
    pub(crate) fn new(inner: Buffer, pool: &'a BufferPool<S>) -> Self {
        Self {
            inner: Some(inner),
            pool,
        }
    }

    /// Take the buffer out, preventing its return to the pool
    #[inline]
    pub fn detach(mut self) -> Buffer {
        self.inner.take().unwrap_or_default()
    }
}

impl<S: SlotStore> Deref for PooledBuffer<'_, S> {
    type Target = Buffer;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        // Only `detach` and `drop` take the buffer, and both consume the guard
        self.inner.as_ref().expect("pooled buffer already taken")
    }
}

impl<S: SlotStore> DerefMut for PooledBuffer<'_, S> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner.as_mut().expect("pooled buffer already taken")
    }
}

impl<S: SlotStore> Drop for PooledBuffer<'_, S> {
    fn drop(&mut self) {
        if let Some(buffer) = self.inner.take() {
            self.pool.release(buffer);
        }
    }
}
