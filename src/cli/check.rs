//! Configuration validation command.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Validate the configuration file and environment without connecting.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::note(&format!("Checking configuration: {}", path.display()));

    let config = Config::load(path)?;
    output::ok("Configuration file is valid");

    output::section("Chain");
    output::key_value("RPC URL", &config.chain.rpc_url);
    match config.chain.chain_id {
        Some(id) => output::key_value("Chain ID", id),
        None => output::key_value("Chain ID", "any"),
    }
    if let Some(oracle) = config.chain.oracle_address {
        output::key_value("Oracle", oracle);
    }
    match config.chain.caller_address {
        Some(caller) => output::key_value("Caller", caller),
        None => output::key_value("Caller", "not set (client unavailable)"),
    }

    output::section("Relay");
    output::key_value("Feed", format!("{} ({})", config.feed.url, config.feed.symbol));
    output::key_value("Chunk size", config.relay.chunk_size);
    output::key_value("Max retries", config.relay.max_retries);
    output::key_value("Interval", format!("{} ms", config.relay.poll_interval_ms));

    output::section("Wallet");
    if config.wallet.private_key.is_some() {
        output::ok("Private key found (from WALLET_PRIVATE_KEY env var)");
    } else if config.wallet.mnemonic.is_some() {
        output::ok("Mnemonic found (from MNEMONIC env var)");
    } else if let Some(ref keystore) = config.wallet.keystore_path {
        output::ok(&format!("Keystore configured: {keystore}"));
    } else {
        output::warn("No wallet key configured");
        output::note("  Set WALLET_PRIVATE_KEY or MNEMONIC, or configure wallet.keystore_path");
    }

    output::note("");
    output::note("Configuration is ready to use.");
    Ok(())
}
