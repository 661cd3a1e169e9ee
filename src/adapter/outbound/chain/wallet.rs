//! Signer loading.
//!
//! Key material is never read from the config file. In order of precedence:
//! `WALLET_PRIVATE_KEY`, `MNEMONIC` (first account on the standard
//! `m/44'/60'/0'/0/0` path), then an encrypted keystore.

use std::str::FromStr;

use alloy_signer_local::coins_bip39::English;
use alloy_signer_local::{MnemonicBuilder, PrivateKeySigner};

use crate::error::{InitError, Result};
use crate::infrastructure::config::{read_keystore_password, WalletConfig};

/// Build the signer described by `config`.
///
/// # Errors
///
/// Returns [`InitError::Signer`] if no key source is configured or the
/// configured one cannot be decoded.
pub fn load_signer(config: &WalletConfig) -> Result<PrivateKeySigner> {
    if let Some(private_key) = config.private_key.as_deref() {
        return PrivateKeySigner::from_str(private_key.trim())
            .map_err(|e| InitError::Signer(format!("WALLET_PRIVATE_KEY: {e}")).into());
    }

    if let Some(phrase) = config.mnemonic.as_deref() {
        return MnemonicBuilder::<English>::default()
            .phrase(phrase.trim())
            .index(0u32)
            .and_then(|builder| builder.build())
            .map_err(|e| InitError::Signer(format!("MNEMONIC: {e}")).into());
    }

    if let Some(path) = config.keystore_path.as_deref() {
        let password = read_keystore_password()?;
        return PrivateKeySigner::decrypt_keystore(path, password)
            .map_err(|e| InitError::Signer(format!("keystore {path}: {e}")).into());
    }

    Err(InitError::Signer(
        "no signing key configured; set WALLET_PRIVATE_KEY, MNEMONIC or wallet.keystore_path"
            .into(),
    )
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    // Well-known development key (anvil/hardhat account #0).
    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
    const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";

    #[test]
    fn loads_private_key() {
        let config = WalletConfig {
            private_key: Some(DEV_KEY.into()),
            ..Default::default()
        };
        let signer = load_signer(&config).unwrap();
        assert_eq!(signer.address().to_string(), DEV_ADDRESS);
    }

    #[test]
    fn loads_first_mnemonic_account() {
        let config = WalletConfig {
            mnemonic: Some(DEV_MNEMONIC.into()),
            ..Default::default()
        };
        let signer = load_signer(&config).unwrap();
        assert_eq!(signer.address().to_string(), DEV_ADDRESS);
    }

    #[test]
    fn private_key_wins_over_mnemonic() {
        let config = WalletConfig {
            private_key: Some(DEV_KEY.into()),
            mnemonic: Some("not a valid phrase".into()),
            ..Default::default()
        };
        assert!(load_signer(&config).is_ok());
    }

    #[test]
    fn rejects_malformed_key() {
        let config = WalletConfig {
            private_key: Some("0xnothex".into()),
            ..Default::default()
        };
        assert!(matches!(load_signer(&config), Err(Error::Init(InitError::Signer(_)))));
    }

    #[test]
    fn missing_key_material_is_fatal() {
        let err = load_signer(&WalletConfig::default()).unwrap_err();
        assert!(err.is_fatal_init());
    }
}
