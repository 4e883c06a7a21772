#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use rusty_lru::LruCache;

// Fuzz arbitrary operation sequences on LruCache against a VecDeque model.
//
// The first byte picks the capacity; every following pair of bytes is one
// operation (opcode, key).
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, ops)) = data.split_first() else {
        return;
    };

    let mut capacity = usize::from(cap_byte % 32);
    let mut cache: LruCache<u8, u32> = LruCache::new(capacity);
    // front is MRU
    let mut model: VecDeque<(u8, u32)> = VecDeque::new();

    for (step, pair) in ops.chunks_exact(2).enumerate() {
        let (op, key) = (pair[0] % 8, pair[1] % 64);
        let value = step as u32;
        let position = model.iter().position(|(k, _)| *k == key);

        match op {
            0 | 1 => {
                // insert
                let expected = match position {
                    Some(pos) => {
                        let (_, old) = model.remove(pos).unwrap();
                        model.push_front((key, value));
                        Some(old)
                    },
                    None if capacity == 0 => None,
                    None => {
                        if model.len() >= capacity {
                            model.pop_back();
                        }
                        model.push_front((key, value));
                        None
                    },
                };
                assert_eq!(cache.insert(key, value), expected);
            },
            2 => {
                // get
                let expected = position.map(|pos| {
                    let entry = model.remove(pos).unwrap();
                    model.push_front(entry);
                    entry.1
                });
                assert_eq!(cache.get(&key).copied(), expected);
            },
            3 => {
                // peek
                let expected = position.map(|pos| model[pos].1);
                assert_eq!(cache.peek(&key).copied(), expected);
            },
            4 => {
                // remove
                let expected = position.and_then(|pos| model.remove(pos)).map(|(_, v)| v);
                assert_eq!(cache.remove(&key), expected);
            },
            5 => {
                // pop_lru
                assert_eq!(cache.pop_lru(), model.pop_back());
            },
            6 => {
                // resize
                capacity = usize::from(key % 32);
                cache.resize(capacity);
                model.truncate(capacity);
            },
            _ => {
                // touch
                let found = position.is_some();
                if let Some(pos) = position {
                    let entry = model.remove(pos).unwrap();
                    model.push_front(entry);
                }
                assert_eq!(cache.touch(&key), found);
            },
        }

        assert_eq!(cache.len(), model.len());
        assert!(cache.len() <= capacity);
        assert_eq!(
            cache.peek_lru().map(|(k, v)| (*k, *v)),
            model.back().copied()
        );
    }

    let pairs: Vec<(u8, u32)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, model.into_iter().collect::<Vec<_>>());
    assert!(cache.check_invariants().is_ok());
});
