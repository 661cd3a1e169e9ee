//! Oracle requests and their outcomes.

use alloy_primitives::{Address, TxHash};

use super::id::RequestId;
use super::price::NormalizedPrice;

/// A price request observed on-chain and not yet answered.
///
/// Immutable once created; consumed when the batch processor dequeues it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingRequest {
    caller: Address,
    id: RequestId,
}

impl PendingRequest {
    #[must_use]
    pub const fn new(caller: Address, id: RequestId) -> Self {
        Self { caller, id }
    }

    /// Address of the contract that asked for the price.
    #[must_use]
    pub const fn caller(&self) -> Address {
        self.caller
    }

    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }
}

/// Notifications emitted by the oracle contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleEvent {
    /// A caller contract asked for a fresh price.
    PriceRequested { caller: Address, id: RequestId },
    /// The oracle stored a price for a request. Observability only.
    PriceSet {
        price: NormalizedPrice,
        caller: Address,
        id: RequestId,
    },
}

/// A quote as returned by the price feed, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    /// Trading pair symbol, e.g. `ETHUSDT`.
    pub symbol: String,
    /// Decimal string exactly as reported by the feed.
    pub price: String,
}

impl PriceQuote {
    pub fn new(symbol: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.into(),
        }
    }
}

/// Terminal outcome of resolving one [`PendingRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A fetched price was submitted and confirmed.
    Settled {
        price: NormalizedPrice,
        attempts: u32,
        tx_hash: TxHash,
    },
    /// Every attempt failed; the zero sentinel was submitted instead.
    Fallback { attempts: u32, tx_hash: TxHash },
    /// Every attempt failed and so did the fallback submission.
    Unresolved { attempts: u32, reason: String },
}

impl Resolution {
    /// Number of fetch-and-submit attempts made before the outcome.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Settled { attempts, .. }
            | Self::Fallback { attempts, .. }
            | Self::Unresolved { attempts, .. } => *attempts,
        }
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Settled { .. })
    }
}
