// ==============================================
// CONCURRENT LRU TESTS (integration)
// ==============================================
//
// Shared-handle behavior under real threads. These require multi-threaded
// execution and cannot live inline.

#![cfg(feature = "concurrency")]

use std::sync::{Arc, Barrier};
use std::thread;

use rusty_lru::{Capacity, ConcurrentLruCache};

#[test]
fn readers_and_writers_keep_capacity() {
    let cache: ConcurrentLruCache<u64, u64> = ConcurrentLruCache::new(256);
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..2_000u64 {
                    let key = (t * 7_919 + i) % 1_024;
                    if t % 2 == 0 {
                        cache.insert(key, key * 2);
                        cache.get(&key);
                    } else if let Some(value) = cache.peek(&key) {
                        assert_eq!(value, key * 2);
                    } else {
                        let _ = cache.contains(&key);
                        let _ = cache.peek_lru();
                    }
                    assert!(cache.len() <= 256);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= 256);
    cache.with_read(|inner| assert_eq!(inner.check_invariants(), Ok(())));
}

#[test]
fn concurrent_pops_never_return_the_same_pair() {
    let cache: ConcurrentLruCache<u32, u32> = ConcurrentLruCache::unbounded();
    for i in 0..4_000 {
        cache.insert(i, i);
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = cache.clone();
            thread::spawn(move || {
                let mut popped = Vec::new();
                while let Some((key, _)) = cache.pop_lru() {
                    popped.push(key);
                }
                popped
            })
        })
        .collect();

    let mut all: Vec<u32> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort_unstable();
    assert_eq!(all, (0..4_000).collect::<Vec<_>>());
    assert!(cache.is_empty());
}

#[test]
fn resize_under_contention() {
    let cache: ConcurrentLruCache<u32, u32> = ConcurrentLruCache::new(512);
    let writer = {
        let cache = cache.clone();
        thread::spawn(move || {
            for i in 0..5_000 {
                cache.insert(i, i);
            }
        })
    };
    let resizer = {
        let cache = cache.clone();
        thread::spawn(move || {
            for step in (1..=32).rev() {
                cache.resize(step * 16);
            }
        })
    };
    writer.join().unwrap();
    resizer.join().unwrap();

    assert_eq!(cache.capacity(), Capacity::Bounded(16));
    assert!(cache.len() <= 16);
}
