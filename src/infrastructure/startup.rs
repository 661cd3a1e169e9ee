//! Startup probes run before any service loop starts.
//!
//! Every failure here is fatal: the process exits with code 1 instead of
//! relaying against the wrong chain or an empty address.

use alloy_primitives::U256;
use tracing::{info, warn};

use crate::domain::Address;
use crate::error::{InitError, Result};
use crate::port::ChainInspector;

/// What the endpoint reported during startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub chain_id: u64,
    pub latest_block: u64,
}

/// A contract that must have code deployed before startup continues.
#[derive(Debug, Clone, Copy)]
pub struct RequiredContract {
    pub name: &'static str,
    pub address: Address,
}

/// Probe the endpoint, the chain id and the contract addresses.
///
/// The signer balance is only logged; an empty account still starts but
/// every submission will fail.
pub async fn verify_chain(
    inspector: &dyn ChainInspector,
    rpc_url: &str,
    expected_chain_id: Option<u64>,
    contracts: &[RequiredContract],
    signer: Address,
) -> Result<ChainInfo> {
    let latest_block = inspector
        .latest_block()
        .await
        .map_err(|e| InitError::Unreachable {
            url: rpc_url.to_string(),
            reason: e.to_string(),
        })?;

    let chain_id = inspector
        .chain_id()
        .await
        .map_err(|e| InitError::Unreachable {
            url: rpc_url.to_string(),
            reason: e.to_string(),
        })?;

    if let Some(expected) = expected_chain_id {
        if expected != chain_id {
            return Err(InitError::ChainMismatch {
                expected,
                actual: chain_id,
            }
            .into());
        }
    }

    info!(chain_id, latest_block, "Connected to chain");

    for contract in contracts {
        let deployed = inspector.has_code(contract.address).await.map_err(|e| {
            InitError::Unreachable {
                url: rpc_url.to_string(),
                reason: e.to_string(),
            }
        })?;
        if !deployed {
            return Err(InitError::MissingContract {
                name: contract.name,
                address: contract.address.to_string(),
            }
            .into());
        }
        info!(contract = contract.name, address = %contract.address, "Contract found");
    }

    match inspector.balance(signer).await {
        Ok(balance) if balance == U256::ZERO => {
            warn!(signer = %signer, "Signer has no balance, transactions will fail");
        }
        Ok(balance) => info!(signer = %signer, balance_wei = %balance, "Signer balance"),
        Err(e) => warn!(signer = %signer, error = %e, "Failed to read signer balance"),
    }

    Ok(ChainInfo {
        chain_id,
        latest_block,
    })
}
