//! Wallet configuration for signing transactions.

use std::fs;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Wallet configuration.
///
/// Secrets are loaded from the environment at runtime (never from the
/// config file): `WALLET_PRIVATE_KEY` or `MNEMONIC`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Optional keystore path for encrypted wallet storage.
    #[serde(default)]
    pub keystore_path: Option<String>,
    /// Private key loaded from `WALLET_PRIVATE_KEY` env var at runtime.
    #[serde(skip)]
    pub private_key: Option<String>,
    /// Mnemonic loaded from `MNEMONIC` env var at runtime.
    #[serde(skip)]
    pub mnemonic: Option<String>,
}

/// Keystore password from `ETHORACLE_KEYSTORE_PASSWORD` or the file named by
/// `ETHORACLE_KEYSTORE_PASSWORD_FILE`.
#[allow(clippy::result_large_err)]
pub fn read_keystore_password() -> Result<String> {
    if let Ok(password) = std::env::var("ETHORACLE_KEYSTORE_PASSWORD") {
        return Ok(password);
    }
    if let Ok(path) = std::env::var("ETHORACLE_KEYSTORE_PASSWORD_FILE") {
        let contents = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let password = contents.trim().to_string();
        if password.is_empty() {
            return Err(ConfigError::MissingField {
                field: "ETHORACLE_KEYSTORE_PASSWORD_FILE",
            }
            .into());
        }
        return Ok(password);
    }

    Err(ConfigError::MissingField {
        field: "ETHORACLE_KEYSTORE_PASSWORD",
    }
    .into())
}
