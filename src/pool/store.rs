/*!
 * Slot Stores
 * Bounded containers holding recycled buffers between release and acquire
 */

use crate::buffer::Buffer;
use crossbeam_queue::ArrayQueue;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Bounded multi-producer/multi-consumer store of recycled buffers
///
/// Both operations are non-blocking probes: `try_push` hands the buffer back
/// when the store is full and `try_pop` returns `None` when it is empty.
/// Occupancy never exceeds `capacity()`.
pub trait SlotStore: Send + Sync {
    /// Create a store holding at most `capacity` buffers (at least 1)
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    fn try_push(&self, buffer: Buffer) -> Result<(), Buffer>;

    fn try_pop(&self) -> Option<Buffer>;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Lock-free ring buffer store (default)
pub struct LockFreeSlots {
    queue: ArrayQueue<Buffer>,
}

impl SlotStore for LockFreeSlots {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: ArrayQueue::new(capacity.max(1)),
        }
    }

    #[inline]
    fn try_push(&self, buffer: Buffer) -> Result<(), Buffer> {
        self.queue.push(buffer)
    }

    #[inline]
    fn try_pop(&self) -> Option<Buffer> {
        self.queue.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.queue.is_full()
    }
}

/// Mutex-guarded deque store
///
/// Critical sections are a single push or pop, so contention degrades to a
/// short spin-then-park rather than a wait on pool availability.
pub struct MutexSlots {
    slots: Mutex<VecDeque<Buffer>>,
    capacity: usize,
}

impl SlotStore for MutexSlots {
    fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    fn try_push(&self, buffer: Buffer) -> Result<(), Buffer> {
        let mut slots = self.slots.lock();
        if slots.len() >= self.capacity {
            return Err(buffer);
        }
        slots.push_back(buffer);
        Ok(())
    }

    fn try_pop(&self) -> Option<Buffer> {
        self.slots.lock().pop_front()
    }

    fn len(&self) -> usize {
        self.slots.lock().len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
