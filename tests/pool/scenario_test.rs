/*!
 * Buffer Pool Scenario Tests
 * End-to-end acquire/release sequences with exact capacities
 */

use pretty_assertions::assert_eq;
use sized_buffer_pool::{aligned_capacity, Buffer, BufferPool};
use std::io::Write;

#[test]
fn test_reacquire_after_unchanged_release() {
    let pool = BufferPool::new(2, 100);

    let buf = pool.acquire();
    assert_eq!(buf.capacity(), 112);
    assert_eq!(buf.capacity() % 16, 0);
    assert!(buf.capacity() >= 100);

    pool.release(buf);
    let again = pool.acquire();
    assert_eq!(again.len(), 0);
    assert_eq!(again.capacity(), 112);
}

#[test]
fn test_second_release_discarded_when_full() {
    let pool = BufferPool::new(1, 64);

    let first = pool.acquire();
    let second = pool.acquire();
    assert_eq!(pool.stats().misses, 2);

    pool.release(first);
    assert_eq!(pool.len(), 1);

    pool.release(second);
    assert_eq!(pool.len(), 1);

    let stats = pool.stats();
    assert_eq!(stats.discarded, 1);
    assert_eq!(stats.releases(), 2);
}

#[test]
fn test_written_content_not_visible_after_reuse() {
    let pool = BufferPool::new(4, 256);

    let mut buf = pool.acquire();
    buf.write_all(b"secret payload").unwrap();
    pool.release(buf);

    let reused = pool.acquire();
    assert_eq!(pool.stats().hits, 1);
    assert!(reused.is_empty());
    assert_eq!(reused.as_slice(), b"");
}

#[test]
fn test_oversized_release_stores_fresh_replacement() {
    let pool = BufferPool::new(4, 1024);

    let mut big = Buffer::with_capacity(64 * 1024);
    big.extend_from_slice(&[0xAB; 60 * 1024]);
    let big_cap = big.capacity();
    pool.release(big);

    let target = pool.target_capacity();
    assert!(big_cap > target);

    let replacement = pool.acquire();
    assert_eq!(replacement.capacity(), aligned_capacity(target));
    assert!(replacement.is_empty());
    assert_eq!(pool.stats().replaced, 1);
}

#[test]
fn test_aligned_capacity_stable_across_release() {
    // Targets whose aligned capacity survives one estimator step unchanged
    for initial in [100, 1000, 4096, 65536] {
        let pool = BufferPool::new(2, initial);
        let fresh = pool.acquire();
        let cap = fresh.capacity();
        assert_eq!(cap, aligned_capacity(initial));

        pool.release(fresh);
        assert_eq!(pool.acquire().capacity(), cap, "initial {}", initial);
    }
}

#[test]
fn test_alignment_band_edge_shrinks_on_release() {
    // 113 rounds up to 128; one release pulls the target to 112, which
    // aligns to itself, so the stored replacement is smaller
    let pool = BufferPool::new(2, 113);
    let fresh = pool.acquire();
    assert_eq!(fresh.capacity(), 128);

    pool.release(fresh);
    assert_eq!(pool.target_capacity(), 112);
    assert_eq!(pool.stats().replaced, 1);
    assert_eq!(pool.acquire().capacity(), 112);
}

#[test]
fn test_guarded_round_trip() {
    let pool = BufferPool::new(2, 512);
    {
        let mut guard = pool.acquire_guarded();
        guard.write_all(b"frame").unwrap();
    }
    assert_eq!(pool.len(), 1);

    let frozen = {
        let mut guard = pool.acquire_guarded();
        guard.extend_from_slice(b"zero copy");
        guard.detach().freeze()
    };
    assert_eq!(&frozen[..], b"zero copy");
    assert!(pool.is_empty());
}
