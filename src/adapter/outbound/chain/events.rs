//! Oracle event subscription via log filter polling.

use alloy_provider::DynProvider;
use async_trait::async_trait;
use futures_util::stream::{self, BoxStream};
use futures_util::StreamExt;
use tracing::{info, warn};

use super::contracts::EthPriceOracle;
use crate::domain::{Address, NormalizedPrice, OracleEvent, RequestId};
use crate::error::{ChainError, Result};
use crate::port::OracleEventStream;

/// [`OracleEventStream`] over `GetLatestEthPriceEvent` and
/// `SetLatestEthPriceEvent` logs emitted by the oracle contract.
///
/// Uses `eth_newFilter` polling, which works over plain HTTP endpoints.
/// Logs that fail to decode are logged and skipped.
pub struct ChainOracleEvents {
    stream: BoxStream<'static, OracleEvent>,
    // Filter pollers only hold a weak handle to the client.
    _provider: DynProvider,
}

impl ChainOracleEvents {
    /// Install log filters for both oracle events.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Subscription`] if either filter cannot be
    /// installed.
    pub async fn subscribe(oracle: Address, provider: DynProvider) -> Result<Self> {
        let contract = EthPriceOracle::new(oracle, provider.clone());

        let requested = contract
            .GetLatestEthPriceEvent_filter()
            .watch()
            .await
            .map_err(|e| ChainError::Subscription(e.to_string()))?
            .into_stream()
            .filter_map(|item| async move {
                match item {
                    Ok((event, _log)) => Some(OracleEvent::PriceRequested {
                        caller: event.callerAddress,
                        id: RequestId::from(event.id),
                    }),
                    Err(e) => {
                        warn!(error = %e, "Failed to decode GetLatestEthPriceEvent");
                        None
                    }
                }
            });

        let set = contract
            .SetLatestEthPriceEvent_filter()
            .watch()
            .await
            .map_err(|e| ChainError::Subscription(e.to_string()))?
            .into_stream()
            .filter_map(|item| async move {
                match item {
                    Ok((event, _log)) => Some(OracleEvent::PriceSet {
                        price: NormalizedPrice::from_raw(event.ethPrice),
                        caller: event.callerAddress,
                        id: RequestId::from(event.id),
                    }),
                    Err(e) => {
                        warn!(error = %e, "Failed to decode SetLatestEthPriceEvent");
                        None
                    }
                }
            });

        info!(oracle = %oracle, "Subscribed to oracle events");

        Ok(Self {
            stream: stream::select(requested, set).boxed(),
            _provider: provider,
        })
    }
}

#[async_trait]
impl OracleEventStream for ChainOracleEvents {
    async fn next_event(&mut self) -> Option<OracleEvent> {
        self.stream.next().await
    }
}
