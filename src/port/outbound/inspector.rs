//! Read-only chain probes used during startup checks.

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::domain::Address;
use crate::error::Result;

#[async_trait]
pub trait ChainInspector: Send + Sync {
    /// Chain id reported by the endpoint.
    async fn chain_id(&self) -> Result<u64>;

    /// Latest block number; doubles as a connectivity probe.
    async fn latest_block(&self) -> Result<u64>;

    /// True if deployed bytecode exists at `address`.
    async fn has_code(&self, address: Address) -> Result<bool>;

    /// Native balance of `address` in wei.
    async fn balance(&self, address: Address) -> Result<U256>;
}
