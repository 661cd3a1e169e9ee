//! Price feed port.

use async_trait::async_trait;

use crate::domain::PriceQuote;
use crate::error::Result;

/// Source of the current trading-pair price.
///
/// Stateless: every call is an independent request to the upstream quote
/// source.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Fetch the current quote.
    async fn fetch_price(&self) -> Result<PriceQuote>;

    /// Human-readable feed name for logs.
    fn feed_name(&self) -> &'static str;
}
