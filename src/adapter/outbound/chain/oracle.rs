//! Oracle contract adapter.

use alloy_provider::DynProvider;
use async_trait::async_trait;
use tracing::debug;

use super::confirmed;
use super::contracts::EthPriceOracle::{self, EthPriceOracleInstance};
use crate::domain::{Address, NormalizedPrice, RequestId, TxHash};
use crate::error::{ChainError, Result};
use crate::port::OracleContract;

const SET_LATEST_ETH_PRICE: &str = "setLatestEthPrice";

/// [`OracleContract`] backed by a deployed `EthPriceOracle`.
pub struct ChainOracle {
    contract: EthPriceOracleInstance<DynProvider>,
}

impl ChainOracle {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            contract: EthPriceOracle::new(address, provider),
        }
    }
}

#[async_trait]
impl OracleContract for ChainOracle {
    async fn set_latest_price(
        &self,
        price: NormalizedPrice,
        caller: Address,
        id: RequestId,
    ) -> Result<TxHash> {
        let pending = self
            .contract
            .setLatestEthPrice(price.into(), caller, id.into())
            .send()
            .await
            .map_err(|e| ChainError::Submission {
                call: SET_LATEST_ETH_PRICE,
                reason: e.to_string(),
            })?;
        debug!(tx_hash = %pending.tx_hash(), request_id = %id, "Submitted price");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ChainError::Confirmation {
                call: SET_LATEST_ETH_PRICE,
                reason: e.to_string(),
            })?;

        confirmed(SET_LATEST_ETH_PRICE, &receipt)
    }

    async fn preview_request(&self) -> Result<RequestId> {
        let id = self
            .contract
            .getLatestEthPrice()
            .call()
            .await
            .map_err(|e| ChainError::Call {
                call: "getLatestEthPrice",
                reason: e.to_string(),
            })?;
        Ok(RequestId::from(id))
    }

    async fn owner(&self) -> Result<Address> {
        let owner = self
            .contract
            .owner()
            .call()
            .await
            .map_err(|e| ChainError::Call {
                call: "owner",
                reason: e.to_string(),
            })?;
        Ok(owner)
    }
}
