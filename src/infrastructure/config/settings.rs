//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file, then environment variables are
//! applied on top. Secrets (`WALLET_PRIVATE_KEY`, `MNEMONIC`) only ever come
//! from the environment.
//!
//! # Example
//!
//! ```no_run
//! use ethoracle::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;

use super::chain::ChainConfig;
use super::feed::FeedConfig;
use super::logging::LoggingConfig;
use super::relay::RelayConfig;
use super::wallet::WalletConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// RPC endpoint and contract addresses.
    #[serde(default)]
    pub chain: ChainConfig,

    /// Exchange price feed.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Queue chunking, retry budget and tick period.
    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Key sources. Only `keystore_path` is read from the file.
    #[serde(default)]
    pub wallet: WalletConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, an override does not parse,
    /// or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with a custom environment
    /// lookup.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::parse_toml`]
    /// fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Apply environment overrides. Empty values are ignored.
    #[allow(clippy::result_large_err)]
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = get("CHUNK_SIZE") {
            self.relay.chunk_size = parse_env("CHUNK_SIZE", &value)?;
        }
        if let Some(value) = get("MAX_RETRIES") {
            self.relay.max_retries = parse_env("MAX_RETRIES", &value)?;
        }
        if let Some(value) = get("SLEEP_INTERVAL") {
            self.relay.poll_interval_ms = parse_env("SLEEP_INTERVAL", &value)?;
        }
        if let Some(value) = get("RPC_URL") {
            self.chain.rpc_url = value.trim().to_string();
        }
        if let Some(value) = get("ORACLE_ADDRESS") {
            self.chain.oracle_address = Some(parse_env::<Address>("ORACLE_ADDRESS", &value)?);
        }
        if let Some(value) = get("CALLER_ADDRESS") {
            self.chain.caller_address = Some(parse_env::<Address>("CALLER_ADDRESS", &value)?);
        }

        self.wallet.private_key = get("WALLET_PRIVATE_KEY");
        self.wallet.mnemonic = get("MNEMONIC");
        Ok(())
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.chain.rpc_url.is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        if let Err(e) = url::Url::parse(&self.chain.rpc_url) {
            return Err(ConfigError::InvalidValue {
                field: "rpc_url",
                reason: e.to_string(),
            }
            .into());
        }
        if self.chain.oracle_address.is_none() {
            return Err(ConfigError::MissingField {
                field: "oracle_address",
            }
            .into());
        }
        if self.chain.update_gas_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "update_gas_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.relay.chunk_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chunk_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.relay.max_retries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_retries",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.relay.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.feed.url.is_empty() {
            return Err(ConfigError::MissingField { field: "feed.url" }.into());
        }
        if self.feed.symbol.is_empty() {
            return Err(ConfigError::MissingField {
                field: "feed.symbol",
            }
            .into());
        }
        if self.feed.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[allow(clippy::result_large_err)]
fn parse_env<T>(field: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| {
        ConfigError::InvalidValue {
            field,
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const ORACLE: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn minimal() -> String {
        format!(
            r#"
[chain]
rpc_url = "http://localhost:8545"
oracle_address = "{ORACLE}"
"#
        )
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_to_minimal_file() {
        let config = Config::parse_toml_with(&minimal(), env(&[])).unwrap();

        assert_eq!(config.relay.chunk_size, 3);
        assert_eq!(config.relay.max_retries, 5);
        assert_eq!(config.relay.poll_interval_ms, 2000);
        assert_eq!(config.feed.symbol, "ETHUSDT");
        assert_eq!(config.chain.update_gas_limit, 200_000);
        assert_eq!(config.chain.oracle_address().unwrap(), ORACLE.parse::<Address>().unwrap());
        assert!(config.chain.caller_address().is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let lookup = env(&[
            ("CHUNK_SIZE", "10"),
            ("MAX_RETRIES", "2"),
            ("SLEEP_INTERVAL", "500"),
            ("RPC_URL", "http://node:8545"),
            ("CALLER_ADDRESS", ORACLE),
        ]);

        let config = Config::parse_toml_with(&minimal(), lookup).unwrap();

        assert_eq!(config.relay.chunk_size, 10);
        assert_eq!(config.relay.max_retries, 2);
        assert_eq!(config.relay.poll_interval_ms, 500);
        assert_eq!(config.chain.rpc_url, "http://node:8545");
        assert!(config.chain.caller_address.is_some());
    }

    #[test]
    fn secrets_come_from_environment_only() {
        let content = format!("{}\n[wallet]\nkeystore_path = \"/tmp/key.json\"\n", minimal());
        let lookup = env(&[("WALLET_PRIVATE_KEY", "0xabc"), ("MNEMONIC", "")]);

        let config = Config::parse_toml_with(&content, lookup).unwrap();

        assert_eq!(config.wallet.private_key.as_deref(), Some("0xabc"));
        assert_eq!(config.wallet.mnemonic, None);
        assert_eq!(config.wallet.keystore_path.as_deref(), Some("/tmp/key.json"));
    }

    #[test]
    fn environment_only_config_keeps_section_defaults() {
        let lookup = env(&[
            ("RPC_URL", "http://node:8545"),
            ("ORACLE_ADDRESS", ORACLE),
            ("CALLER_ADDRESS", ORACLE),
        ]);

        let config = Config::parse_toml_with("", lookup).unwrap();

        assert_eq!(config.chain.update_gas_limit, 200_000);
        assert_eq!(config.relay.chunk_size, 3);
        assert_eq!(config.feed.symbol, "ETHUSDT");
        assert!(config.chain.caller_address().is_ok());
    }

    #[test]
    fn zero_gas_limit_is_rejected() {
        let content = minimal().replace("[chain]\n", "[chain]\nupdate_gas_limit = 0\n");
        let err = Config::parse_toml_with(&content, env(&[])).unwrap_err();
        assert!(err.to_string().contains("update_gas_limit"));
    }

    #[test]
    fn unparseable_override_is_rejected() {
        let err = Config::parse_toml_with(&minimal(), env(&[("CHUNK_SIZE", "three")])).unwrap_err();
        assert!(err.to_string().contains("CHUNK_SIZE"));
    }

    #[test]
    fn missing_rpc_url_is_rejected() {
        let content = format!("[chain]\noracle_address = \"{ORACLE}\"\n");
        let err = Config::parse_toml_with(&content, env(&[])).unwrap_err();
        assert!(err.to_string().contains("rpc_url"));
    }

    #[test]
    fn missing_oracle_address_is_rejected() {
        let content = "[chain]\nrpc_url = \"http://localhost:8545\"\n";
        let err = Config::parse_toml_with(content, env(&[])).unwrap_err();
        assert!(err.to_string().contains("oracle_address"));
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let content = format!("{}\n[relay]\nchunk_size = 0\n", minimal());
        let err = Config::parse_toml_with(&content, env(&[])).unwrap_err();
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::parse_toml_with("[chain", env(&[])).unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(ConfigError::Parse(_))));
    }
}
