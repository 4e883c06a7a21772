// ==============================================
// LRU BEHAVIOR TESTS (integration)
// ==============================================
//
// End-to-end scenarios through the public API: recency order, eviction,
// resize and clear, checked the way a host binding would observe them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rusty_lru::prelude::*;

fn filled(capacity: Capacity, n: i64) -> LruCache<i64, i64> {
    let mut cache = LruCache::with_capacity(capacity);
    for i in 0..n {
        cache.insert(i, i);
    }
    cache
}

// ==============================================
// Uncapped cache
// ==============================================

mod uncapped {
    use super::*;

    #[test]
    fn lru_pair_is_first_insert() {
        let cache = filled(Capacity::Unbounded, 99);
        assert_eq!(cache.peek_lru(), Some((&0, &0)));
        assert_eq!(cache.len(), 99);
    }

    #[test]
    fn update_and_read_shift_lru_pair() {
        let mut cache = filled(Capacity::Unbounded, 99);
        cache.insert(0, 0);
        assert_eq!(cache.peek_lru(), Some((&1, &1)));
        cache.get(&1);
        assert_eq!(cache.peek_lru(), Some((&2, &2)));
    }

    #[test]
    fn pop_returns_coldest_pairs() {
        let mut cache = filled(Capacity::Unbounded, 99);
        assert_eq!(cache.pop_lru(), Some((0, 0)));

        cache.get(&1);
        assert_eq!(cache.pop_lru(), Some((2, 2)));

        cache.get(&4);
        cache.get(&3);
        cache.get(&5);
        assert_eq!(cache.pop_lru(), Some((6, 6)));
        assert_eq!(cache.len(), 96);
    }

    #[test]
    fn delete_returns_value_once() {
        let mut cache = filled(Capacity::Unbounded, 10);
        assert_eq!(cache.remove(&5), Some(5));
        assert_eq!(cache.remove(&5), None);
        assert!(!cache.contains(&5));
        assert_eq!(cache.len(), 9);
    }

    #[test]
    fn resize_down_evicts_two_oldest() {
        let mut cache = filled(Capacity::Unbounded, 10);
        cache.resize(8);
        assert!(!cache.contains(&0));
        assert!(!cache.contains(&1));
        assert_eq!(cache.peek_lru(), Some((&2, &2)));
    }
}

// ==============================================
// Capped cache
// ==============================================

mod capped {
    use super::*;

    const CAP: i64 = 99;

    #[test]
    fn insert_past_capacity_evicts_oldest() {
        let mut cache = filled(Capacity::Bounded(CAP as usize), CAP);
        cache.insert(-1, -1);
        assert!(!cache.contains(&0));
        assert_eq!(cache.len(), CAP as usize);

        cache.get(&1);
        cache.insert(-2, -2);
        assert!(cache.contains(&1));
        assert!(!cache.contains(&2));
    }

    #[test]
    fn resize_up_adds_room() {
        let mut cache = filled(Capacity::Bounded(CAP as usize), CAP);
        cache.resize((CAP + 2) as usize);
        cache.insert(-1, -1);
        cache.insert(-2, -2);
        assert_eq!(cache.len(), (CAP + 2) as usize);
        assert_eq!(cache.peek_lru(), Some((&0, &0)));
    }

    #[test]
    fn resize_down_moves_lru_pair() {
        let mut cache = filled(Capacity::Bounded(CAP as usize), CAP);
        assert_eq!(cache.peek_lru(), Some((&0, &0)));
        cache.resize((CAP - 2) as usize);
        assert_eq!(cache.peek_lru(), Some((&2, &2)));
        assert_eq!(cache.len(), (CAP - 2) as usize);
    }

    #[test]
    fn three_entry_eviction() {
        let mut cache = LruCache::new(3);
        cache.insert("a", "va");
        cache.insert("b", "vb");
        cache.insert("c", "vc");
        assert_eq!(cache.len(), 3);

        cache.insert("d", "vd");
        assert!(!cache.contains(&"a"));
        assert_eq!(cache.peek_lru(), Some((&"b", &"vb")));
    }

    #[test]
    fn five_grows_to_seven() {
        let mut cache = filled(Capacity::Bounded(5), 5);
        cache.resize(7);
        cache.insert(5, 5);
        cache.insert(6, 6);
        assert_eq!(cache.len(), 7);
        for key in 0..7 {
            assert!(cache.contains(&key));
        }
    }
}

// ==============================================
// Clear and empty
// ==============================================

#[test]
fn clear_is_idempotent() {
    let mut cache = filled(Capacity::Bounded(16), 16);
    cache.clear();
    cache.clear();
    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
    for key in 0..16 {
        assert!(!cache.contains(&key));
    }
    assert_eq!(cache.capacity(), Capacity::Bounded(16));
}

#[test]
fn iteration_is_restartable_snapshot() {
    let mut cache = filled(Capacity::Bounded(4), 4);
    cache.get(&1);

    let first: Vec<i64> = cache.keys().copied().collect();
    let second: Vec<i64> = cache.iter().map(|(k, _)| *k).collect();
    assert_eq!(first, vec![1, 3, 2, 0]);
    assert_eq!(first, second);
    assert_eq!(cache.peek_lru(), Some((&0, &0)));
}

// ==============================================
// Randomized workload
// ==============================================

#[test]
fn random_workload_keeps_invariants() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut cache: LruCache<u16, u32> = LruCache::new(128);

    for step in 0..20_000u32 {
        let key = rng.random_range(0..512u16);
        match rng.random_range(0..10u8) {
            0..=3 => {
                cache.insert(key, step);
            },
            4..=6 => {
                if let Some(&value) = cache.get(&key) {
                    assert_eq!(cache.peek_mru().map(|(_, v)| *v), Some(value));
                }
            },
            7 => {
                cache.remove(&key);
            },
            8 => {
                let peeked = cache.peek_lru().map(|(k, v)| (*k, *v));
                assert_eq!(peeked, cache.pop_lru());
            },
            _ => {
                let before: Vec<u16> = cache.keys().copied().collect();
                let _ = cache.peek(&key);
                let _ = cache.contains(&key);
                let after: Vec<u16> = cache.keys().copied().collect();
                assert_eq!(before, after);
            },
        }
        assert!(cache.len() <= 128);
        if step % 1_000 == 0 {
            assert_eq!(cache.check_invariants(), Ok(()));
        }
    }
    assert_eq!(cache.check_invariants(), Ok(()));
}

// ==============================================
// Trait objects and generics
// ==============================================

#[test]
fn generic_code_over_trait_bound() {
    fn warm<C: LruCacheTrait<u32, u32>>(cache: &mut C) {
        for i in 0..10 {
            cache.insert(i, i);
        }
        cache.touch(&0);
    }

    let mut cache = LruCacheBuilder::new().capacity(5).build();
    warm(&mut cache);
    assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![9, 8, 7, 6, 5]);
}
