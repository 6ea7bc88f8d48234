//! Classification of cache lookups that did not produce a value.

use thiserror::Error;

/// Why a cache lookup yielded nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheDegraded {
    /// Key absent or expired.
    #[error("cache miss")]
    Miss,

    /// Cache unreachable, erroring or too slow.
    #[error("cache unavailable: {0}")]
    Unavailable(String),

    /// Entry present but not decodable into the expected shape.
    #[error("cache entry corrupt: {0}")]
    Corrupt(String),
}

impl CacheDegraded {
    /// Metric label for this outcome.
    #[must_use]
    pub const fn outcome(&self) -> &'static str {
        match self {
            Self::Miss => "miss",
            Self::Unavailable(_) => "unavailable",
            Self::Corrupt(_) => "corrupt",
        }
    }
}
