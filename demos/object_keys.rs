//! Keys whose hash comes from a "host runtime" that can fail.
//!
//! Run with `cargo run --example object_keys`.

use std::fmt;

use rusty_lru::{HashValue, KeyError, ObjectCache, ObjectKey};

#[derive(Debug)]
struct HostError(String);

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for HostError {}

/// A dynamically typed host value.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Int(i64),
    Text(String),
    /// Its `hash` method raises.
    Broken,
    /// Its `hash` method returns a float.
    Odd,
}

impl ObjectKey for Value {
    type Error = HostError;

    fn object_hash(&self) -> Result<HashValue, HostError> {
        match self {
            Value::Int(n) => Ok(HashValue::Integer(*n)),
            Value::Text(s) => Ok(HashValue::Integer(
                s.bytes().fold(17i64, |h, b| h.wrapping_mul(31).wrapping_add(i64::from(b))),
            )),
            Value::Broken => Err(HostError("hash raised: specific error".to_string())),
            Value::Odd => Ok(HashValue::Other("Float")),
        }
    }

    fn object_eql(&self, other: &Self) -> bool {
        self == other
    }
}

fn report<T: fmt::Debug>(label: &str, result: Result<T, KeyError<HostError>>) {
    match result {
        Ok(value) => println!("{:<22} ok: {:?}", label, value),
        Err(err) if err.is_type_mismatch() => println!("{:<22} type error: {}", label, err),
        Err(err) => println!("{:<22} propagated: {}", label, err),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cache = ObjectCache::new(Some(2))?;

    report("store 1", cache.store(Value::Int(1), "one"));
    report("store \"two\"", cache.store(Value::Text("two".into()), "two"));
    report("store Broken", cache.store(Value::Broken, "never"));
    report("store Odd", cache.store(Value::Odd, "never"));
    report("load 1", cache.load(&Value::Int(1)).map(|v| v.copied()));
    report("store 3 (evicts)", cache.store(Value::Int(3), "three"));

    cache.each_pair(|key, value| println!("  {:?} => {}", key, value));

    if let Err(err) = cache.resize(Some(-1)) {
        println!("resize(-1) rejected: {}", err);
    }
    println!("length is still {}", cache.length());
    Ok(())
}
