//! Oracle contract ports: transaction submission and event notifications.

use async_trait::async_trait;

use crate::domain::{Address, NormalizedPrice, OracleEvent, RequestId, TxHash};
use crate::error::Result;

/// Write and read access to the oracle contract.
#[async_trait]
pub trait OracleContract: Send + Sync {
    /// Submit `setLatestEthPrice(price, caller, id)` and wait for the receipt.
    ///
    /// # Errors
    ///
    /// Fails when the transaction cannot be sent, its receipt cannot be
    /// obtained, or it reverted.
    async fn set_latest_price(
        &self,
        price: NormalizedPrice,
        caller: Address,
        id: RequestId,
    ) -> Result<TxHash>;

    /// Dry-run `getLatestEthPrice()` through `eth_call`. Returns the request
    /// id the oracle would assign; nothing is mined.
    async fn preview_request(&self) -> Result<RequestId>;

    /// Current contract owner.
    async fn owner(&self) -> Result<Address>;
}

/// Stream of oracle notifications.
///
/// Modeled after a pull-based market data stream: the ingestor awaits the
/// next event, `None` means the underlying subscription ended.
#[async_trait]
pub trait OracleEventStream: Send {
    async fn next_event(&mut self) -> Option<OracleEvent>;
}
