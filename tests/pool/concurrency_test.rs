/*!
 * Concurrent Access Tests
 * Many threads acquiring and releasing against one pool
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sized_buffer_pool::{BufferPool, MutexSlots, SlotStore};
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const ITERATIONS: usize = 2_000;

fn hammer<S: SlotStore + 'static>(pool: Arc<BufferPool<S>>) {
    let handles: Vec<_> = (0..THREADS)
        .map(|seed| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed as u64);
                for _ in 0..ITERATIONS {
                    let mut buf = pool.acquire();
                    assert!(buf.is_empty());

                    let len = rng.gen_range(0..8 * 1024);
                    buf.extend_from_slice(&vec![0xEE; len]);
                    pool.release(buf);

                    assert!(pool.len() <= pool.size());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_lock_free_pool_under_contention() {
    let pool = Arc::new(BufferPool::new(4, 1024));
    hammer(Arc::clone(&pool));

    let stats = pool.stats();
    assert!(stats.retained <= 4);
    assert_eq!(stats.hits + stats.misses, (THREADS * ITERATIONS) as u64);
    assert_eq!(stats.releases(), (THREADS * ITERATIONS) as u64);
    // Random lengths below 8KB keep the average well under the largest buffers
    assert!(stats.target_capacity < 16 * 1024);
}

#[test]
fn test_mutex_pool_under_contention() {
    let pool = Arc::new(BufferPool::<MutexSlots>::with_store(4, 1024));
    hammer(Arc::clone(&pool));

    let stats = pool.stats();
    assert!(stats.retained <= 4);
    assert_eq!(stats.releases(), (THREADS * ITERATIONS) as u64);
}

#[test]
fn test_pool_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BufferPool>();
    assert_send_sync::<BufferPool<MutexSlots>>();
}
