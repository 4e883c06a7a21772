//! Error types for the rusty_lru library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a capacity is invalid (negative input from a
//!   signed host integer). Construction and resize reject it before mutating.
//! - [`KeyError`]: Returned by [`ObjectCache`](crate::object::ObjectCache) when a
//!   key's hash cannot be computed, either because the host hash function
//!   failed or because it produced something that is not an integer.
//! - [`InvariantError`]: Returned by `check_invariants` when the key index and
//!   the recency list disagree.
//!
//! A cache miss is never an error; lookups return `Option`.
//!
//! ## Example Usage
//!
//! ```
//! use rusty_lru::error::ConfigError;
//! use rusty_lru::LruCache;
//!
//! let cache: Result<LruCache<String, i32>, ConfigError> = LruCache::try_new(Some(100));
//! assert!(cache.is_ok());
//!
//! let bad = LruCache::<String, i32>::try_new(Some(-1));
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`LruCache::try_new`](crate::policy::lru::LruCache::try_new),
/// [`LruCache::try_resize`](crate::policy::lru::LruCache::try_resize) and the
/// builder's `try_capacity`.
///
/// # Example
///
/// ```
/// use rusty_lru::LruCache;
///
/// let err = LruCache::<u64, u64>::try_new(Some(-5)).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// KeyError
// ---------------------------------------------------------------------------

/// Error raised while hashing a host key.
///
/// `HashFailure` carries the host's own error untouched. `HashTypeMismatch` is
/// raised by this crate when the hash succeeded but was not an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError<E> {
    /// The key's hash function itself failed.
    HashFailure(E),
    /// The key's hash function returned a non-integer value.
    HashTypeMismatch {
        /// Name of the type the hash function produced.
        found: &'static str,
    },
}

impl<E> KeyError<E> {
    /// Returns the host error if this is a propagated hash failure.
    pub fn into_host_error(self) -> Option<E> {
        match self {
            KeyError::HashFailure(err) => Some(err),
            KeyError::HashTypeMismatch { .. } => None,
        }
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, KeyError::HashTypeMismatch { .. })
    }
}

impl<E: fmt::Display> fmt::Display for KeyError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::HashFailure(err) => fmt::Display::fmt(err, f),
            KeyError::HashTypeMismatch { found } => {
                write!(f, "key hash must be an integer, got {}", found)
            },
        }
    }
}

impl<E> std::error::Error for KeyError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KeyError::HashFailure(err) => Some(err),
            KeyError::HashTypeMismatch { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index length mismatch");
        assert_eq!(err.to_string(), "index length mismatch");
    }

    #[test]
    fn invariant_message_accessor_and_eq() {
        let a = InvariantError::new("x");
        assert_eq!(a.message(), "x");
        assert_eq!(a.clone(), a);
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be non-negative, got -3");
        assert_eq!(err.to_string(), "capacity must be non-negative, got -3");
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
        assert_error::<InvariantError>();
    }

    // -- KeyError ---------------------------------------------------------

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct HostError(&'static str);

    impl fmt::Display for HostError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for HostError {}

    #[test]
    fn hash_failure_displays_host_error_verbatim() {
        let err: KeyError<HostError> = KeyError::HashFailure(HostError("specific error"));
        assert_eq!(err.to_string(), "specific error");
        assert!(!err.is_type_mismatch());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.into_host_error(), Some(HostError("specific error")));
    }

    #[test]
    fn type_mismatch_is_distinct() {
        let err: KeyError<HostError> = KeyError::HashTypeMismatch { found: "String" };
        assert!(err.is_type_mismatch());
        assert!(err.to_string().contains("String"));
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.into_host_error(), None);
    }
}
