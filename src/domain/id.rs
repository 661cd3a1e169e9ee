//! Oracle request identifier.

use std::fmt;

use alloy_primitives::U256;

/// Identifier the oracle contract assigns to each price request.
///
/// Opaque to the relay: it is only echoed back on submission. Duplicate ids
/// are legal and resolved independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(U256);

impl RequestId {
    /// Create a new `RequestId` from its on-chain value.
    #[must_use]
    pub const fn new(id: U256) -> Self {
        Self(id)
    }

    /// The raw on-chain value.
    #[must_use]
    pub const fn as_u256(&self) -> U256 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<U256> for RequestId {
    fn from(id: U256) -> Self {
        Self::new(id)
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self::new(U256::from(id))
    }
}

impl From<RequestId> for U256 {
    fn from(id: RequestId) -> Self {
        id.0
    }
}
