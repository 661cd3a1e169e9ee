//! Binance REST client implementing [`PriceFeed`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::dto::TickerPrice;
use crate::domain::PriceQuote;
use crate::error::{FeedError, Result};
use crate::infrastructure::config::FeedConfig;
use crate::port::PriceFeed;

/// HTTP client for the Binance spot ticker endpoint.
pub struct BinanceFeed {
    client: Client,
    url: String,
    symbol: String,
}

impl BinanceFeed {
    /// Create a feed client from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(FeedError::Http)?;
        Ok(Self {
            client,
            url: config.url.clone(),
            symbol: config.symbol.clone(),
        })
    }
}

#[async_trait]
impl PriceFeed for BinanceFeed {
    async fn fetch_price(&self) -> Result<PriceQuote> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("symbol", self.symbol.as_str())])
            .send()
            .await
            .map_err(FeedError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let ticker: TickerPrice = response.json().await.map_err(FeedError::Http)?;
        let price = ticker.price.ok_or_else(|| FeedError::MissingPrice {
            symbol: self.symbol.clone(),
        })?;

        debug!(symbol = %ticker.symbol, price = %price, "Fetched price");
        Ok(PriceQuote::new(ticker.symbol, price))
    }

    fn feed_name(&self) -> &'static str {
        "binance"
    }
}
