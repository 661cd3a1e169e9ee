//! Mock [`PriceFeed`] for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::PriceQuote;
use crate::error::{FeedError, Result};
use crate::port::PriceFeed;

/// What the feed answers once its scripted results are exhausted.
#[derive(Debug, Clone)]
enum Fallthrough {
    Price(String),
    Unavailable,
}

/// A feed with scripted results and a shared fetch counter.
///
/// Each `fetch_price()` pops the next scripted result. When the script is
/// exhausted the feed either keeps returning a fixed price or keeps failing
/// with HTTP 503.
pub struct ScriptedFeed {
    results: Mutex<VecDeque<Result<PriceQuote>>>,
    fallthrough: Fallthrough,
    fetch_count: Arc<AtomicU32>,
}

impl ScriptedFeed {
    /// A feed that always returns `price`.
    pub fn always(price: impl Into<String>) -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            fallthrough: Fallthrough::Price(price.into()),
            fetch_count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// A feed that always fails.
    pub fn unavailable() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            fallthrough: Fallthrough::Unavailable,
            fetch_count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Queue results to return before falling through.
    pub fn with_results(self, results: Vec<Result<PriceQuote>>) -> Self {
        *self.results.lock().unwrap() = results.into();
        self
    }

    /// Shared counter for asserting fetch counts after the feed is moved.
    pub fn counter(&self) -> Arc<AtomicU32> {
        self.fetch_count.clone()
    }
}

/// A quote for the default test symbol.
pub fn quote(price: &str) -> PriceQuote {
    PriceQuote::new("ETHUSDT", price)
}

/// The error an unavailable feed returns.
pub fn unavailable() -> crate::error::Error {
    FeedError::Status { status: 503 }.into()
}

#[async_trait]
impl PriceFeed for ScriptedFeed {
    async fn fetch_price(&self) -> Result<PriceQuote> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Some(result) = self.results.lock().unwrap().pop_front() {
            return result;
        }
        match &self.fallthrough {
            Fallthrough::Price(price) => Ok(quote(price)),
            Fallthrough::Unavailable => Err(unavailable()),
        }
    }

    fn feed_name(&self) -> &'static str {
        "scripted"
    }
}
