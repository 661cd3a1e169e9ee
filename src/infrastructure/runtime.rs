//! Service lifecycles for the two binaries' worth of work.

use tokio::sync::watch;
use tracing::{info, warn};

use super::bootstrap::{
    build_caller, build_feed, build_inspector, build_oracle, connect_chain, subscribe_events,
};
use super::config::Config;
use super::startup::{verify_chain, RequiredContract};
use crate::application::{OracleRelay, RelayReport, RelaySettings, TriggerSummary, UpdateClient};
use crate::error::{ChainError, Result};

/// Run the oracle relay until `shutdown` flips to true.
///
/// Errors returned from here are fatal. Apart from startup failures, a
/// closed event stream is reported as an error so the process exits
/// non-zero and can be restarted by its supervisor.
pub async fn run_oracle(config: Config, shutdown: watch::Receiver<bool>) -> Result<RelayReport> {
    let oracle_address = config.chain.oracle_address()?;
    let connection = connect_chain(&config)?;

    let inspector = build_inspector(&connection);
    verify_chain(
        inspector.as_ref(),
        &config.chain.rpc_url,
        config.chain.chain_id,
        &[RequiredContract {
            name: "oracle",
            address: oracle_address,
        }],
        connection.signer,
    )
    .await?;

    let oracle = build_oracle(&connection, oracle_address);
    match oracle.owner().await {
        Ok(owner) if owner != connection.signer => warn!(
            owner = %owner,
            signer = %connection.signer,
            "Signer does not own the oracle, price submissions will revert"
        ),
        Ok(owner) => info!(owner = %owner, "Oracle owner"),
        Err(e) => warn!(error = %e, "Failed to read oracle owner"),
    }

    let feed = build_feed(&config)?;
    let events = subscribe_events(&connection, oracle_address).await?;
    info!(oracle = %oracle_address, "Listening for price requests");

    let relay = OracleRelay::new(feed, oracle, events, RelaySettings::from(&config.relay));
    let report = relay.run(shutdown).await;
    info!(
        ingested = report.ingested,
        processed = report.processed.processed,
        settled = report.processed.settled,
        fallbacks = report.processed.fallbacks,
        unresolved = report.processed.unresolved,
        "Oracle relay stopped"
    );
    if report.stream_ended {
        return Err(ChainError::Subscription("oracle event stream ended".into()).into());
    }
    Ok(report)
}

/// Run the update client until `shutdown` flips to true.
pub async fn run_client(config: Config, shutdown: watch::Receiver<bool>) -> Result<TriggerSummary> {
    let oracle_address = config.chain.oracle_address()?;
    let caller_address = config.chain.caller_address()?;
    let connection = connect_chain(&config)?;

    let inspector = build_inspector(&connection);
    verify_chain(
        inspector.as_ref(),
        &config.chain.rpc_url,
        config.chain.chain_id,
        &[
            RequiredContract {
                name: "oracle",
                address: oracle_address,
            },
            RequiredContract {
                name: "caller",
                address: caller_address,
            },
        ],
        connection.signer,
    )
    .await?;

    let caller = build_caller(&config, &connection, caller_address);
    let oracle = build_oracle(&connection, oracle_address);
    let client = UpdateClient::new(
        caller,
        oracle,
        oracle_address,
        connection.signer,
        config.relay.poll_interval(),
    );
    Ok(client.run(shutdown).await)
}
