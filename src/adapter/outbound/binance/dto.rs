//! Wire types for the Binance `/api/v3/ticker/price` endpoint.

use serde::Deserialize;

/// Body returned for a single-symbol ticker query.
///
/// Binance reports prices as strings with eight fractional digits, e.g.
/// `{"symbol":"ETHUSDT","price":"2500.12345678"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    #[serde(default)]
    pub price: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ticker_body() {
        let body = r#"{"symbol":"ETHUSDT","price":"2500.12345678"}"#;
        let ticker: TickerPrice = serde_json::from_str(body).unwrap();
        assert_eq!(ticker.symbol, "ETHUSDT");
        assert_eq!(ticker.price.as_deref(), Some("2500.12345678"));
    }

    #[test]
    fn tolerates_missing_price() {
        let ticker: TickerPrice = serde_json::from_str(r#"{"symbol":"ETHUSDT"}"#).unwrap();
        assert!(ticker.price.is_none());
    }
}
