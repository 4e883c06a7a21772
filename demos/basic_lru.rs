//! Walks through the core LRU operations and prints the cache after each one.
//!
//! Run with `cargo run --example basic_lru`.

use rusty_lru::{Capacity, LruCache};

fn show(label: &str, cache: &LruCache<&'static str, u32>) {
    let entries: Vec<String> = cache.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    println!("{:<28} [{}] (MRU → LRU)", label, entries.join(", "));
}

fn main() {
    let mut cache = LruCache::new(3);
    cache.insert("apple", 1);
    cache.insert("banana", 2);
    cache.insert("cherry", 3);
    show("after three inserts", &cache);

    cache.get(&"apple");
    show("after get(apple)", &cache);

    cache.insert("date", 4);
    show("after insert(date)", &cache);

    let _ = cache.peek(&"cherry");
    show("after peek(cherry)", &cache);

    if let Some((key, value)) = cache.pop_lru() {
        println!("popped least recently used: {}={}", key, value);
    }

    cache.set_capacity(Capacity::Unbounded);
    for (i, fruit) in ["elder", "fig", "grape"].into_iter().enumerate() {
        cache.insert(fruit, 10 + i as u32);
    }
    show("unbounded, three more", &cache);

    cache.resize(2);
    show("after resize(2)", &cache);

    #[cfg(feature = "metrics")]
    {
        let snapshot = cache.metrics_snapshot();
        println!(
            "evicted {} entries, get hit ratio {:?}",
            snapshot.evicted_entries,
            snapshot.hit_ratio()
        );
    }
}
