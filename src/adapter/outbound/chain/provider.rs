//! Signing HTTP provider construction.

use alloy_provider::network::EthereumWallet;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use url::Url;

/// Build a provider that signs and fills transactions with `signer`.
///
/// Nonce, gas and chain id are filled by the provider; fee estimation is
/// left entirely to the endpoint.
pub fn connect(rpc_url: &Url, signer: PrivateKeySigner) -> DynProvider {
    let wallet = EthereumWallet::from(signer);
    ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(rpc_url.clone())
        .erased()
}
