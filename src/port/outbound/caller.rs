//! Caller contract port.

use async_trait::async_trait;

use crate::domain::{Address, TxHash};
use crate::error::Result;

/// The contract that asks the oracle for fresh prices.
#[async_trait]
pub trait CallerContract: Send + Sync {
    /// Submit `updateEthPrice()` and wait for the receipt.
    async fn update_price(&self) -> Result<TxHash>;

    /// Point the caller at the oracle instance it should query.
    async fn set_oracle_address(&self, oracle: Address) -> Result<TxHash>;

    /// Dry-run `updateEthPrice()` through `eth_call` from the signer.
    async fn simulate_update(&self) -> Result<()>;

    /// Current contract owner.
    async fn owner(&self) -> Result<Address>;
}
