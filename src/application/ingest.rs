//! Event ingestion: oracle notifications into the request queue.

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::queue::RequestSender;
use crate::domain::{OracleEvent, PendingRequest};
use crate::port::OracleEventStream;

/// How [`EventIngestor::run`] ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub queued: u64,
    /// The event stream closed before shutdown was signalled.
    pub stream_ended: bool,
}

/// Turns `PriceRequested` notifications into queued requests.
///
/// Does no filtering, deduplication or network I/O of its own; `PriceSet`
/// notifications are only logged.
pub struct EventIngestor {
    queue: RequestSender,
}

impl EventIngestor {
    pub fn new(queue: RequestSender) -> Self {
        Self { queue }
    }

    /// Handle one notification. Returns true if a request was queued.
    pub fn ingest(&self, event: OracleEvent) -> bool {
        match event {
            OracleEvent::PriceRequested { caller, id } => {
                info!(caller = %caller, request_id = %id, "New price request");
                match self.queue.enqueue(PendingRequest::new(caller, id)) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(error = %e, "Failed to queue price request");
                        false
                    }
                }
            }
            OracleEvent::PriceSet { price, caller, id } => {
                info!(price = %price, caller = %caller, request_id = %id, "Price set");
                false
            }
        }
    }

    /// Pump `events` into the queue until the stream ends or shutdown is
    /// signalled.
    pub async fn run(
        &self,
        events: &mut dyn OracleEventStream,
        mut shutdown: watch::Receiver<bool>,
    ) -> IngestSummary {
        let mut summary = IngestSummary::default();
        loop {
            if *shutdown.borrow() {
                debug!("Event ingestion stopping");
                break;
            }
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() {
                        debug!("Shutdown channel closed");
                        break;
                    }
                }
                event = events.next_event() => {
                    let Some(event) = event else {
                        warn!(queued = summary.queued, "Oracle event stream ended");
                        summary.stream_ended = true;
                        break;
                    };
                    if self.ingest(event) {
                        summary.queued += 1;
                    }
                }
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::queue::request_queue;
    use crate::domain::{NormalizedPrice, RequestId};
    use crate::testkit::chain::channel_events;
    use crate::testkit::domain::{caller, price_requested, request};

    #[test]
    fn price_request_is_queued() {
        let (tx, mut rx) = request_queue();
        let ingestor = EventIngestor::new(tx);

        assert!(ingestor.ingest(price_requested(4, 11)));
        assert_eq!(rx.pop(), Some(request(4, 11)));
    }

    #[test]
    fn price_set_is_not_queued() {
        let (tx, rx) = request_queue();
        let ingestor = EventIngestor::new(tx);

        let queued = ingestor.ingest(OracleEvent::PriceSet {
            price: NormalizedPrice::ZERO,
            caller: caller(4),
            id: RequestId::from(11),
        });

        assert!(!queued);
        assert!(rx.is_empty());
    }

    #[test]
    fn closed_queue_drops_request_without_panicking() {
        let (tx, rx) = request_queue();
        drop(rx);
        let ingestor = EventIngestor::new(tx);

        assert!(!ingestor.ingest(price_requested(1, 1)));
    }

    #[tokio::test]
    async fn run_pumps_until_stream_ends() {
        let (tx, mut rx) = request_queue();
        let ingestor = EventIngestor::new(tx);
        let (mut events, sender) = channel_events();
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        for id in 1..=4 {
            sender.send(price_requested(2, id)).unwrap();
        }
        drop(sender);

        let summary = ingestor.run(&mut events, shutdown_rx).await;

        assert_eq!(
            summary,
            IngestSummary {
                queued: 4,
                stream_ended: true,
            }
        );
        for id in 1..=4 {
            assert_eq!(rx.pop(), Some(request(2, id)));
        }
    }

    #[tokio::test]
    async fn run_stops_on_shutdown() {
        let (tx, _rx) = request_queue();
        let ingestor = EventIngestor::new(tx);
        let (mut events, _sender) = channel_events();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        shutdown_tx.send(true).unwrap();
        let summary = ingestor.run(&mut events, shutdown_rx).await;

        assert_eq!(summary, IngestSummary::default());
    }
}
