//! Batch processing: drain the request queue in bounded chunks.

use std::ops::AddAssign;

use tracing::{debug, info};

use super::queue::RequestReceiver;
use super::resolver::RequestResolver;
use super::ticker::Ticker;
use crate::domain::Resolution;

/// Outcome counts for one or more ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Requests dequeued and resolved.
    pub processed: usize,
    pub settled: usize,
    pub fallbacks: usize,
    pub unresolved: usize,
    /// Requests still queued afterwards.
    pub remaining: usize,
}

impl TickSummary {
    fn record(&mut self, resolution: &Resolution) {
        self.processed += 1;
        match resolution {
            Resolution::Settled { .. } => self.settled += 1,
            Resolution::Fallback { .. } => self.fallbacks += 1,
            Resolution::Unresolved { .. } => self.unresolved += 1,
        }
    }
}

impl AddAssign for TickSummary {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.settled += other.settled;
        self.fallbacks += other.fallbacks;
        self.unresolved += other.unresolved;
        self.remaining = other.remaining;
    }
}

/// Drains up to `chunk_size` requests per tick and resolves them one after
/// another.
///
/// The processor owns the only receiver of the queue, and every drain is
/// awaited to completion before the next tick is taken, so two drains can
/// never run at once.
pub struct BatchProcessor {
    queue: RequestReceiver,
    resolver: RequestResolver,
    chunk_size: usize,
}

impl BatchProcessor {
    /// Create a processor. A `chunk_size` of zero is treated as one.
    pub fn new(queue: RequestReceiver, resolver: RequestResolver, chunk_size: usize) -> Self {
        Self {
            queue,
            resolver,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Requests currently waiting in the queue.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Process one chunk.
    pub async fn tick(&mut self) -> TickSummary {
        self.drain_chunk(|| false).await
    }

    /// Tick until shutdown. Returns the totals over all ticks.
    ///
    /// Shutdown is honoured between requests: the request being resolved
    /// completes, the rest of the chunk stays queued.
    pub async fn run(&mut self, mut ticker: Ticker) -> TickSummary {
        let shutdown = ticker.shutdown();
        let mut total = TickSummary::default();

        while ticker.tick().await {
            let summary = self.drain_chunk(|| *shutdown.borrow()).await;
            if summary.processed > 0 {
                info!(
                    processed = summary.processed,
                    settled = summary.settled,
                    fallbacks = summary.fallbacks,
                    unresolved = summary.unresolved,
                    remaining = summary.remaining,
                    "Processed request chunk"
                );
            }
            total += summary;
        }

        total.remaining = self.queue.len();
        info!(
            processed = total.processed,
            pending = total.remaining,
            "Batch processor stopped"
        );
        total
    }

    async fn drain_chunk(&mut self, stop: impl Fn() -> bool) -> TickSummary {
        let mut summary = TickSummary::default();

        while summary.processed < self.chunk_size {
            if stop() {
                debug!("Stopping chunk early for shutdown");
                break;
            }
            let Some(request) = self.queue.pop() else {
                break;
            };
            let resolution = self.resolver.resolve(&request).await;
            summary.record(&resolution);
        }

        summary.remaining = self.queue.len();
        summary
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::watch;

    use super::*;
    use crate::application::queue::{request_queue, RequestSender};
    use crate::testkit::chain::RecordingOracle;
    use crate::testkit::domain::request;
    use crate::testkit::feed::ScriptedFeed;

    fn processor(
        feed: ScriptedFeed,
        oracle: &RecordingOracle,
        chunk_size: usize,
    ) -> (RequestSender, BatchProcessor) {
        let (tx, rx) = request_queue();
        let resolver = RequestResolver::new(Arc::new(feed), Arc::new(oracle.clone()), 5);
        (tx, BatchProcessor::new(rx, resolver, chunk_size))
    }

    #[tokio::test]
    async fn chunks_seven_requests_into_three_three_one() {
        let oracle = RecordingOracle::new();
        let (tx, mut processor) = processor(ScriptedFeed::always("2000.0"), &oracle, 3);
        for id in 1..=7 {
            tx.enqueue(request(1, id)).unwrap();
        }

        let first = processor.tick().await;
        assert_eq!((first.processed, first.remaining), (3, 4));

        let second = processor.tick().await;
        assert_eq!((second.processed, second.remaining), (3, 1));

        let third = processor.tick().await;
        assert_eq!((third.processed, third.remaining), (1, 0));

        let idle = processor.tick().await;
        assert_eq!(idle, TickSummary::default());
        assert_eq!(oracle.submissions().len(), 7);
    }

    #[tokio::test]
    async fn resolves_in_fifo_order() {
        let oracle = RecordingOracle::new();
        let (tx, mut processor) = processor(ScriptedFeed::always("2000.0"), &oracle, 10);
        for id in 1..=5 {
            tx.enqueue(request(3, id)).unwrap();
        }

        processor.tick().await;

        let ids: Vec<_> = oracle.submissions().iter().map(|s| s.id).collect();
        let expected: Vec<_> = (1..=5).map(|id| request(3, id).id()).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn summary_counts_fallbacks() {
        let oracle = RecordingOracle::new();
        let (tx, mut processor) = processor(ScriptedFeed::unavailable(), &oracle, 3);
        tx.enqueue(request(1, 1)).unwrap();
        tx.enqueue(request(1, 2)).unwrap();

        let summary = processor.tick().await;

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.fallbacks, 2);
        assert_eq!(summary.settled, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn run_drains_queue_across_ticks_then_stops() {
        let oracle = RecordingOracle::new();
        let (tx, mut processor) = processor(ScriptedFeed::always("2000.0"), &oracle, 2);
        for id in 1..=5 {
            tx.enqueue(request(1, id)).unwrap();
        }
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let ticker = Ticker::new(Duration::from_millis(100), shutdown_rx);

        let handle = tokio::spawn(async move { processor.run(ticker).await });
        tokio::time::sleep(Duration::from_millis(350)).await;
        shutdown_tx.send(true).unwrap();
        let total = handle.await.unwrap();

        assert_eq!(total.processed, 5);
        assert_eq!(total.settled, 5);
        assert_eq!(total.remaining, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn run_leaves_unstarted_requests_queued_on_shutdown() {
        let oracle = RecordingOracle::new();
        let (tx, mut processor) = processor(ScriptedFeed::always("2000.0"), &oracle, 3);
        for id in 1..=4 {
            tx.enqueue(request(1, id)).unwrap();
        }
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let ticker = Ticker::new(Duration::from_millis(100), shutdown_rx);

        shutdown_tx.send(true).unwrap();
        let total = processor.run(ticker).await;

        assert_eq!(total.processed, 0);
        assert_eq!(total.remaining, 4);
        assert!(oracle.submissions().is_empty());
    }
}
