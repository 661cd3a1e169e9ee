//! Price feed endpoint settings.

use serde::Deserialize;

/// HTTP price feed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Ticker endpoint; the symbol is sent as a query parameter.
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Per-request timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_url() -> String {
    "https://api.binance.com/api/v3/ticker/price".into()
}

fn default_symbol() -> String {
    "ETHUSDT".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            symbol: default_symbol(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
