//! Request resolution: fetch, normalize, submit, with a bounded retry budget.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::{normalize_price, NormalizedPrice, PendingRequest, Resolution, TxHash};
use crate::error::Result;
use crate::port::{OracleContract, PriceFeed};

/// Resolves one pending request at a time.
///
/// Each attempt fetches a quote, normalizes it and submits it to the oracle.
/// Fetch, parse and submission failures all draw from the same budget of
/// `max_retries` attempts and are retried immediately. When the budget is
/// spent the zero sentinel is submitted so the on-chain request never stays
/// open. Nothing here returns an error to the caller.
pub struct RequestResolver {
    feed: Arc<dyn PriceFeed>,
    oracle: Arc<dyn OracleContract>,
    max_retries: u32,
}

impl RequestResolver {
    /// Create a resolver. A `max_retries` of zero is treated as one attempt.
    pub fn new(feed: Arc<dyn PriceFeed>, oracle: Arc<dyn OracleContract>, max_retries: u32) -> Self {
        Self {
            feed,
            oracle,
            max_retries: max_retries.max(1),
        }
    }

    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Resolve `request`, always reaching a terminal outcome.
    pub async fn resolve(&self, request: &PendingRequest) -> Resolution {
        for attempt in 1..=self.max_retries {
            match self.attempt(request).await {
                Ok((price, tx_hash)) => {
                    info!(
                        request_id = %request.id(),
                        caller = %request.caller(),
                        price = %price,
                        tx_hash = %tx_hash,
                        attempt,
                        "Set ETH price"
                    );
                    return Resolution::Settled {
                        price,
                        attempts: attempt,
                        tx_hash,
                    };
                }
                Err(e) => {
                    warn!(
                        request_id = %request.id(),
                        caller = %request.caller(),
                        attempt,
                        max_retries = self.max_retries,
                        error = %e,
                        "Price relay attempt failed"
                    );
                }
            }
        }

        self.submit_fallback(request).await
    }

    async fn attempt(&self, request: &PendingRequest) -> Result<(NormalizedPrice, TxHash)> {
        let quote = self.feed.fetch_price().await?;
        let price = normalize_price(&quote.price)?;
        let tx_hash = self
            .oracle
            .set_latest_price(price, request.caller(), request.id())
            .await?;
        Ok((price, tx_hash))
    }

    async fn submit_fallback(&self, request: &PendingRequest) -> Resolution {
        let attempts = self.max_retries;
        match self
            .oracle
            .set_latest_price(NormalizedPrice::ZERO, request.caller(), request.id())
            .await
        {
            Ok(tx_hash) => {
                warn!(
                    request_id = %request.id(),
                    caller = %request.caller(),
                    attempts,
                    tx_hash = %tx_hash,
                    "Retries exhausted, submitted fallback price"
                );
                Resolution::Fallback { attempts, tx_hash }
            }
            Err(e) => {
                error!(
                    request_id = %request.id(),
                    caller = %request.caller(),
                    attempts,
                    error = %e,
                    "Fallback submission failed, request left open on-chain"
                );
                Resolution::Unresolved {
                    attempts,
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::chain::RecordingOracle;
    use crate::testkit::domain::{caller, request};
    use crate::testkit::feed::{quote, unavailable, ScriptedFeed};

    fn resolver(feed: ScriptedFeed, oracle: &RecordingOracle, max_retries: u32) -> RequestResolver {
        RequestResolver::new(Arc::new(feed), Arc::new(oracle.clone()), max_retries)
    }

    #[tokio::test]
    async fn settles_on_first_success() {
        let oracle = RecordingOracle::new();
        let feed = ScriptedFeed::always("2500.12345678");
        let fetches = feed.counter();

        let outcome = resolver(feed, &oracle, 5).resolve(&request(1, 7)).await;

        assert!(outcome.is_settled());
        assert_eq!(outcome.attempts(), 1);
        assert_eq!(fetches.load(std::sync::atomic::Ordering::SeqCst), 1);
        let submissions = oracle.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].price.to_string(), "2500123456780000000000");
        assert_eq!(submissions[0].caller, caller(1));
    }

    #[tokio::test]
    async fn exhausted_feed_submits_zero_fallback() {
        let oracle = RecordingOracle::new();
        let feed = ScriptedFeed::unavailable();
        let fetches = feed.counter();

        let outcome = resolver(feed, &oracle, 5).resolve(&request(2, 9)).await;

        assert!(matches!(outcome, Resolution::Fallback { attempts: 5, .. }));
        assert_eq!(fetches.load(std::sync::atomic::Ordering::SeqCst), 5);
        let submissions = oracle.submissions();
        assert_eq!(submissions.len(), 1);
        assert!(submissions[0].price.is_zero());
        assert_eq!(submissions[0].id, request(2, 9).id());
    }

    #[tokio::test]
    async fn recovers_after_transient_fetch_failures() {
        let oracle = RecordingOracle::new();
        let feed = ScriptedFeed::always("1800.5")
            .with_results(vec![Err(unavailable()), Err(unavailable())]);

        let outcome = resolver(feed, &oracle, 5).resolve(&request(1, 1)).await;

        assert!(outcome.is_settled());
        assert_eq!(outcome.attempts(), 3);
        assert_eq!(oracle.submissions().len(), 1);
    }

    #[tokio::test]
    async fn malformed_price_consumes_retry_budget() {
        let oracle = RecordingOracle::new();
        let feed = ScriptedFeed::always("1800.5").with_results(vec![
            Ok(quote("not-a-price")),
            Ok(quote("-3.0")),
        ]);

        let outcome = resolver(feed, &oracle, 3).resolve(&request(1, 1)).await;

        assert!(outcome.is_settled());
        assert_eq!(outcome.attempts(), 3);
    }

    #[tokio::test]
    async fn submission_failures_share_the_budget() {
        // Two reverted submissions, then success.
        let oracle = RecordingOracle::new().with_outcomes(vec![false, false]);
        let feed = ScriptedFeed::always("1800.5");
        let fetches = feed.counter();

        let outcome = resolver(feed, &oracle, 3).resolve(&request(1, 1)).await;

        assert!(outcome.is_settled());
        assert_eq!(outcome.attempts(), 3);
        assert_eq!(fetches.load(std::sync::atomic::Ordering::SeqCst), 3);
        assert_eq!(oracle.attempts(), 3);
    }

    #[tokio::test]
    async fn failing_fallback_is_reported_not_raised() {
        let oracle = RecordingOracle::new().with_outcomes(vec![false, false, false]);
        let feed = ScriptedFeed::always("1800.5");

        let outcome = resolver(feed, &oracle, 2).resolve(&request(1, 1)).await;

        assert!(matches!(outcome, Resolution::Unresolved { attempts: 2, .. }));
        assert_eq!(oracle.attempts(), 3);
        assert!(oracle.submissions().is_empty());
    }

    #[tokio::test]
    async fn zero_retries_still_attempts_once() {
        let oracle = RecordingOracle::new();
        let feed = ScriptedFeed::unavailable();
        let fetches = feed.counter();

        let resolver = resolver(feed, &oracle, 0);
        let outcome = resolver.resolve(&request(1, 1)).await;

        assert_eq!(resolver.max_retries(), 1);
        assert!(matches!(outcome, Resolution::Fallback { attempts: 1, .. }));
        assert_eq!(fetches.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
