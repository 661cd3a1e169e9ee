//! Long-running services assembled from ports.
//!
//! [`OracleRelay`] pairs the event ingestor with the batch processor around
//! a fresh request queue. [`UpdateClient`] drives the caller-side trigger.
//! Both stop when the shutdown channel flips to `true`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use super::ingest::{EventIngestor, IngestSummary};
use super::processor::{BatchProcessor, TickSummary};
use super::queue::request_queue;
use super::resolver::RequestResolver;
use super::ticker::Ticker;
use super::trigger::{TriggerSummary, UpdateTrigger};
use crate::domain::Address;
use crate::port::{CallerContract, OracleContract, OracleEventStream, PriceFeed};

/// Queue tuning knobs shared by the relay components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaySettings {
    pub chunk_size: usize,
    pub max_retries: u32,
    pub poll_interval: Duration,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            chunk_size: 3,
            max_retries: 5,
            poll_interval: Duration::from_millis(2000),
        }
    }
}

/// Totals reported when the relay stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayReport {
    /// Requests received from the event stream.
    pub ingested: u64,
    /// Resolution counts; `remaining` is what was still queued at exit.
    pub processed: TickSummary,
    /// The relay stopped because the event stream closed, not because
    /// shutdown was requested.
    pub stream_ended: bool,
}

/// The oracle-side relay: events in, price submissions out.
pub struct OracleRelay {
    feed: Arc<dyn PriceFeed>,
    oracle: Arc<dyn OracleContract>,
    events: Box<dyn OracleEventStream>,
    settings: RelaySettings,
}

impl OracleRelay {
    pub fn new(
        feed: Arc<dyn PriceFeed>,
        oracle: Arc<dyn OracleContract>,
        events: Box<dyn OracleEventStream>,
        settings: RelaySettings,
    ) -> Self {
        Self {
            feed,
            oracle,
            events,
            settings,
        }
    }

    /// Run until shutdown is signalled or the event stream closes.
    ///
    /// Ingestion runs in its own task so notifications keep flowing into the
    /// queue while a chunk is being resolved. The processor stops whenever
    /// ingestion stops, including when the stream closes on its own.
    pub async fn run(self, shutdown: watch::Receiver<bool>) -> RelayReport {
        let Self {
            feed,
            oracle,
            mut events,
            settings,
        } = self;

        info!(
            feed = feed.feed_name(),
            chunk_size = settings.chunk_size,
            max_retries = settings.max_retries,
            poll_interval_ms = settings.poll_interval.as_millis() as u64,
            "Starting oracle relay"
        );

        let (sender, receiver) = request_queue();
        let ingestor = EventIngestor::new(sender);
        let (stop_tx, stop_rx) = watch::channel(false);
        let ingest_task = tokio::spawn(async move {
            let summary = ingestor.run(events.as_mut(), shutdown).await;
            let _ = stop_tx.send(true);
            summary
        });

        let resolver = RequestResolver::new(feed, oracle, settings.max_retries);
        let mut processor = BatchProcessor::new(receiver, resolver, settings.chunk_size);
        let processed = processor
            .run(Ticker::new(settings.poll_interval, stop_rx))
            .await;

        let ingest = match ingest_task.await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "Event ingestion task failed");
                IngestSummary::default()
            }
        };

        if processed.remaining > 0 {
            warn!(
                pending = processed.remaining,
                "Shutting down with unresolved requests"
            );
        }

        RelayReport {
            ingested: ingest.queued,
            processed,
            stream_ended: ingest.stream_ended,
        }
    }
}

/// The caller-side client: periodic update requests.
pub struct UpdateClient {
    trigger: UpdateTrigger,
    oracle: Address,
    signer: Address,
    poll_interval: Duration,
}

impl UpdateClient {
    pub fn new(
        caller: Arc<dyn CallerContract>,
        oracle_contract: Arc<dyn OracleContract>,
        oracle: Address,
        signer: Address,
        poll_interval: Duration,
    ) -> Self {
        Self {
            trigger: UpdateTrigger::new(caller, oracle_contract),
            oracle,
            signer,
            poll_interval,
        }
    }

    /// Prepare the caller contract, then trigger updates until shutdown.
    pub async fn run(self, shutdown: watch::Receiver<bool>) -> TriggerSummary {
        self.trigger.prepare(self.oracle, self.signer).await;
        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Starting update trigger"
        );
        self.trigger
            .run(Ticker::new(self.poll_interval, shutdown))
            .await
    }
}
