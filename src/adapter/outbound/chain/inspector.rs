//! Read-only RPC probes.

use alloy_primitives::U256;
use alloy_provider::{DynProvider, Provider};
use async_trait::async_trait;

use crate::domain::Address;
use crate::error::{ChainError, Result};
use crate::port::ChainInspector;

fn call_failed<E: std::fmt::Display>(call: &'static str) -> impl FnOnce(E) -> ChainError {
    move |e| ChainError::Call {
        call,
        reason: e.to_string(),
    }
}

/// [`ChainInspector`] over the shared provider.
pub struct RpcInspector {
    provider: DynProvider,
}

impl RpcInspector {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ChainInspector for RpcInspector {
    async fn chain_id(&self) -> Result<u64> {
        let id = self
            .provider
            .get_chain_id()
            .await
            .map_err(call_failed("eth_chainId"))?;
        Ok(id)
    }

    async fn latest_block(&self) -> Result<u64> {
        let block = self
            .provider
            .get_block_number()
            .await
            .map_err(call_failed("eth_blockNumber"))?;
        Ok(block)
    }

    async fn has_code(&self, address: Address) -> Result<bool> {
        let code = self
            .provider
            .get_code_at(address)
            .await
            .map_err(call_failed("eth_getCode"))?;
        Ok(!code.is_empty())
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        let balance = self
            .provider
            .get_balance(address)
            .await
            .map_err(call_failed("eth_getBalance"))?;
        Ok(balance)
    }
}
