//! Handlers for the `oracle` and `client` commands.

use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use crate::cli::Cli;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::{run_client, run_oracle};

/// Load configuration, apply CLI overrides and initialize logging.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.config)?;

    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();
    Ok(config)
}

/// Flip the returned receiver to `true` on Ctrl-C.
fn shutdown_on_ctrl_c() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for Ctrl-C, shutting down"),
        }
        let _ = tx.send(true);
    });
    rx
}

/// Execute the oracle command.
pub async fn execute_oracle(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    info!(
        chunk_size = config.relay.chunk_size,
        max_retries = config.relay.max_retries,
        "ethoracle oracle starting"
    );

    run_oracle(config, shutdown_on_ctrl_c()).await?;

    info!("ethoracle oracle stopped");
    Ok(())
}

/// Execute the client command.
pub async fn execute_client(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    info!("ethoracle client starting");

    let summary = run_client(config, shutdown_on_ctrl_c()).await?;

    info!(
        requested = summary.requested,
        failed = summary.failed,
        "ethoracle client stopped"
    );
    Ok(())
}
