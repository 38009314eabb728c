//! Session identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifies one storefront session in the logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create from an existing ID string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an ID from a caller-provided seed (a pid, a page-load
    /// timestamp) plus a process-wide counter.
    ///
    /// The clock is not read here: `std::time` is unavailable in the browser.
    pub fn from_seed(seed: u64) -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:x}", seed, n))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_is_unique() {
        let a = SessionId::from_seed(255);
        let b = SessionId::from_seed(255);
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("ff-"));
    }

    #[test]
    fn test_display() {
        assert_eq!(SessionId::new("abc").to_string(), "abc");
    }
}
