//! Caller contract adapter.

use alloy_provider::DynProvider;
use async_trait::async_trait;

use super::confirmed;
use super::contracts::CallerContract::{self as CallerBinding, CallerContractInstance};
use crate::domain::{Address, TxHash};
use crate::error::{ChainError, Result};
use crate::port::CallerContract;

const UPDATE_ETH_PRICE: &str = "updateEthPrice";
const SET_ORACLE_INSTANCE_ADDRESS: &str = "setOracleInstanceAddress";

/// [`CallerContract`] backed by a deployed caller contract.
pub struct ChainCaller {
    contract: CallerContractInstance<DynProvider>,
    signer: Address,
    gas_limit: u64,
}

impl ChainCaller {
    /// `gas_limit` is applied to `updateEthPrice`, whose cost depends on the
    /// oracle and tends to be under-estimated. `signer` is the sender used
    /// for dry runs.
    pub fn new(address: Address, provider: DynProvider, signer: Address, gas_limit: u64) -> Self {
        Self {
            contract: CallerBinding::new(address, provider),
            signer,
            gas_limit,
        }
    }
}

#[async_trait]
impl CallerContract for ChainCaller {
    async fn update_price(&self) -> Result<TxHash> {
        let pending = self
            .contract
            .updateEthPrice()
            .gas(self.gas_limit)
            .send()
            .await
            .map_err(|e| ChainError::Submission {
                call: UPDATE_ETH_PRICE,
                reason: e.to_string(),
            })?;

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ChainError::Confirmation {
                call: UPDATE_ETH_PRICE,
                reason: e.to_string(),
            })?;

        confirmed(UPDATE_ETH_PRICE, &receipt)
    }

    async fn set_oracle_address(&self, oracle: Address) -> Result<TxHash> {
        let pending = self
            .contract
            .setOracleInstanceAddress(oracle)
            .send()
            .await
            .map_err(|e| ChainError::Submission {
                call: SET_ORACLE_INSTANCE_ADDRESS,
                reason: e.to_string(),
            })?;

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ChainError::Confirmation {
                call: SET_ORACLE_INSTANCE_ADDRESS,
                reason: e.to_string(),
            })?;

        confirmed(SET_ORACLE_INSTANCE_ADDRESS, &receipt)
    }

    async fn simulate_update(&self) -> Result<()> {
        self.contract
            .updateEthPrice()
            .from(self.signer)
            .call()
            .await
            .map_err(|e| ChainError::Call {
                call: UPDATE_ETH_PRICE,
                reason: e.to_string(),
            })?;
        Ok(())
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
