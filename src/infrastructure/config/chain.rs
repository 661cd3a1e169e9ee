//! Chain endpoint and contract settings.

use alloy_primitives::Address;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Chain connection configuration.
///
/// `RPC_URL`, `ORACLE_ADDRESS` and `CALLER_ADDRESS` override the file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// JSON-RPC HTTP endpoint.
    #[serde(default)]
    pub rpc_url: String,
    /// Expected chain id. When set, startup fails on a mismatch.
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Deployed `EthPriceOracle` address.
    #[serde(default)]
    pub oracle_address: Option<Address>,
    /// Deployed caller contract address. Only the client needs it.
    #[serde(default)]
    pub caller_address: Option<Address>,
    /// Gas limit for `updateEthPrice`.
    #[serde(default = "default_update_gas_limit")]
    pub update_gas_limit: u64,
}

const fn default_update_gas_limit() -> u64 {
    200_000
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: String::new(),
            chain_id: None,
            oracle_address: None,
            caller_address: None,
            update_gas_limit: default_update_gas_limit(),
        }
    }
}

impl ChainConfig {
    /// The oracle address, required by both services.
    #[allow(clippy::result_large_err)]
    pub fn oracle_address(&self) -> Result<Address> {
        self.oracle_address.ok_or_else(|| {
            ConfigError::MissingField {
                field: "oracle_address",
            }
            .into()
        })
    }

    /// The caller address, required by the client.
    #[allow(clippy::result_large_err)]
    pub fn caller_address(&self) -> Result<Address> {
        self.caller_address.ok_or_else(|| {
            ConfigError::MissingField {
                field: "caller_address",
            }
            .into()
        })
    }
}
