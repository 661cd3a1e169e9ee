//! Composition root: turn a [`Config`] into connected adapters.

use std::sync::Arc;

use alloy_provider::DynProvider;
use tracing::info;
use url::Url;

use crate::adapter::outbound::binance::BinanceFeed;
use crate::adapter::outbound::chain::{
    connect, load_signer, ChainCaller, ChainOracle, ChainOracleEvents, RpcInspector,
};
use crate::domain::Address;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;
use crate::port::{CallerContract, ChainInspector, OracleContract, OracleEventStream, PriceFeed};

/// A signing provider and the address it signs for.
pub(crate) struct Connection {
    pub provider: DynProvider,
    pub signer: Address,
}

/// Load the signer and open the RPC connection.
pub(crate) fn connect_chain(config: &Config) -> Result<Connection> {
    let rpc_url = Url::parse(&config.chain.rpc_url).map_err(|e| ConfigError::InvalidValue {
        field: "rpc_url",
        reason: e.to_string(),
    })?;
    let signer = load_signer(&config.wallet)?;
    let address = signer.address();
    info!(signer = %address, rpc_url = %rpc_url, "Signer loaded");

    Ok(Connection {
        provider: connect(&rpc_url, signer),
        signer: address,
    })
}

pub(crate) fn build_inspector(connection: &Connection) -> Arc<dyn ChainInspector> {
    Arc::new(RpcInspector::new(connection.provider.clone()))
}

pub(crate) fn build_feed(config: &Config) -> Result<Arc<dyn PriceFeed>> {
    Ok(Arc::new(BinanceFeed::new(&config.feed)?))
}

pub(crate) fn build_oracle(connection: &Connection, oracle: Address) -> Arc<dyn OracleContract> {
    Arc::new(ChainOracle::new(oracle, connection.provider.clone()))
}

pub(crate) fn build_caller(
    config: &Config,
    connection: &Connection,
    caller: Address,
) -> Arc<dyn CallerContract> {
    Arc::new(ChainCaller::new(
        caller,
        connection.provider.clone(),
        connection.signer,
        config.chain.update_gas_limit,
    ))
}

/// Install the log filters for both oracle events.
pub(crate) async fn subscribe_events(
    connection: &Connection,
    oracle: Address,
) -> Result<Box<dyn OracleEventStream>> {
    let events = ChainOracleEvents::subscribe(oracle, connection.provider.clone()).await?;
    Ok(Box::new(events))
}
