//! Capacity bound for an LRU cache.
//!
//! A cache is either [`Capacity::Unbounded`] (never evicts on insert) or
//! [`Capacity::Bounded`] with a maximum entry count. `Bounded(0)` is legal and
//! turns every fresh insert into an immediate eviction.
//!
//! Host bindings often pass capacities as signed integers; [`Capacity::try_from`]
//! on an `i64` rejects negatives with a [`ConfigError`] before anything is built.

use std::fmt;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capacity {
    #[default]
    Unbounded,
    Bounded(usize),
}

impl Capacity {
    /// Parses an optional signed capacity; `None` means unbounded.
    pub fn from_signed(capacity: Option<i64>) -> Result<Self, ConfigError> {
        match capacity {
            None => Ok(Capacity::Unbounded),
            Some(n) => Capacity::try_from(n),
        }
    }

    /// Maximum entry count, or `None` when unbounded.
    #[inline]
    pub fn limit(self) -> Option<usize> {
        match self {
            Capacity::Unbounded => None,
            Capacity::Bounded(n) => Some(n),
        }
    }

    #[inline]
    pub fn is_bounded(self) -> bool {
        matches!(self, Capacity::Bounded(_))
    }

    /// Returns `true` if holding `len` entries would break the bound.
    #[inline]
    pub fn is_exceeded_by(self, len: usize) -> bool {
        match self {
            Capacity::Unbounded => false,
            Capacity::Bounded(n) => len > n,
        }
    }

    /// Size hint for preallocation. Unbounded caches start empty.
    #[inline]
    pub(crate) fn prealloc_hint(self) -> usize {
        self.limit().unwrap_or(0)
    }
}

impl From<usize> for Capacity {
    fn from(n: usize) -> Self {
        Capacity::Bounded(n)
    }
}

impl From<Option<usize>> for Capacity {
    fn from(capacity: Option<usize>) -> Self {
        capacity.map_or(Capacity::Unbounded, Capacity::Bounded)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = ConfigError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        usize::try_from(n).map(Capacity::Bounded).map_err(|_| {
            log::warn!("rejecting cache capacity {}", n);
            ConfigError::new(format!("capacity must be non-negative, got {}", n))
        })
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Unbounded => f.write_str("unbounded"),
            Capacity::Bounded(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_conversion_rejects_negatives() {
        assert_eq!(Capacity::try_from(0i64), Ok(Capacity::Bounded(0)));
        assert_eq!(Capacity::try_from(42i64), Ok(Capacity::Bounded(42)));

        let err = Capacity::try_from(-1i64).unwrap_err();
        assert!(err.message().contains("non-negative"));
        assert!(err.message().contains("-1"));
    }

    #[test]
    fn from_signed_none_is_unbounded() {
        assert_eq!(Capacity::from_signed(None), Ok(Capacity::Unbounded));
        assert_eq!(Capacity::from_signed(Some(3)), Ok(Capacity::Bounded(3)));
        assert!(Capacity::from_signed(Some(i64::MIN)).is_err());
    }

    #[test]
    fn exceeded_by() {
        assert!(!Capacity::Unbounded.is_exceeded_by(usize::MAX));
        assert!(!Capacity::Bounded(2).is_exceeded_by(2));
        assert!(Capacity::Bounded(2).is_exceeded_by(3));
        assert!(Capacity::Bounded(0).is_exceeded_by(1));
    }

    #[test]
    fn conversions_and_display() {
        assert_eq!(Capacity::from(5usize), Capacity::Bounded(5));
        assert_eq!(Capacity::from(None::<usize>), Capacity::Unbounded);
        assert_eq!(Capacity::from(Some(7usize)).limit(), Some(7));
        assert_eq!(Capacity::default(), Capacity::Unbounded);
        assert_eq!(Capacity::Unbounded.to_string(), "unbounded");
        assert_eq!(Capacity::Bounded(9).to_string(), "9");
        assert!(Capacity::Bounded(0).is_bounded());
    }
}
