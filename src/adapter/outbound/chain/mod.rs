//! Chain adapters built on alloy.
//!
//! One signing HTTP provider is shared by every adapter; contract instances
//! are cheap wrappers around it.

mod caller;
mod contracts;
mod events;
mod inspector;
mod oracle;
mod provider;
mod wallet;

pub use caller::ChainCaller;
pub use events::ChainOracleEvents;
pub use inspector::RpcInspector;
pub use oracle::ChainOracle;
pub use provider::connect;
pub use wallet::load_signer;

use alloy_provider::network::ReceiptResponse;

use crate::domain::TxHash;
use crate::error::{ChainError, Result};

/// Turn a mined receipt into its hash, or a revert error.
fn confirmed<R: ReceiptResponse>(call: &'static str, receipt: &R) -> Result<TxHash> {
    let tx_hash = receipt.transaction_hash();
    if receipt.status() {
        Ok(tx_hash)
    } else {
        Err(ChainError::Reverted {
            call,
            tx_hash: tx_hash.to_string(),
        }
        .into())
    }
}
