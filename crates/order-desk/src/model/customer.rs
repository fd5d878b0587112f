use serde::Serialize;
use std::fmt::Display;

/// Chat-level identifier of a customer, as delivered by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CustomerId(pub i64);

impl CustomerId {
    /// Stable shard index in `0..shards`. `shards` must be non-zero.
    pub fn shard(&self, shards: usize) -> usize {
        self.0.rem_euclid(shards as i64) as usize
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
