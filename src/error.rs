use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while fetching a quote from the external price feed.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("price feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("price feed returned HTTP {status}")]
    Status { status: u16 },

    #[error("price feed returned no price for {symbol}")]
    MissingPrice { symbol: String },
}

/// Errors raised by the chain RPC collaborator after startup.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("RPC call {call} failed: {reason}")]
    Call { call: &'static str, reason: String },

    #[error("failed to submit {call}: {reason}")]
    Submission { call: &'static str, reason: String },

    #[error("failed to confirm {call}: {reason}")]
    Confirmation { call: &'static str, reason: String },

    #[error("transaction {tx_hash} for {call} reverted")]
    Reverted { call: &'static str, tx_hash: String },

    #[error("event subscription failed: {0}")]
    Subscription(String),
}

/// Startup failures. Any of these aborts the process with exit code 1.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("failed to load signer: {0}")]
    Signer(String),

    #[error("RPC endpoint {url} unreachable: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("no contract code for {name} at {address}")]
    MissingContract { name: &'static str, address: String },

    #[error("connected to chain {actual}, expected {expected}")]
    ChainMismatch { expected: u64, actual: u64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Init(#[from] InitError),
}

impl Error {
    /// True for failures that must stop the process during startup.
    #[must_use]
    pub fn is_fatal_init(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Init(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_and_config_errors_are_fatal() {
        let init: Error = InitError::Signer("bad key".into()).into();
        let config: Error = ConfigError::MissingField { field: "rpc_url" }.into();
        assert!(init.is_fatal_init());
        assert!(config.is_fatal_init());
    }

    #[test]
    fn per_request_errors_are_not_fatal() {
        let feed: Error = FeedError::Status { status: 503 }.into();
        let chain: Error = ChainError::Reverted {
            call: "setLatestEthPrice",
            tx_hash: "0xabc".into(),
        }
        .into();
        assert!(!feed.is_fatal_init());
        assert!(!chain.is_fatal_init());
    }
}
