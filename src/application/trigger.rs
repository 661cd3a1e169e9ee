//! Caller-side update trigger.
//!
//! Periodically asks the caller contract to request a fresh price from the
//! oracle. No queue and no retries: a failed update is logged and the next
//! tick tries again.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::ticker::Ticker;
use crate::domain::{Address, RequestId};
use crate::port::{CallerContract, OracleContract};

/// Counts of update submissions made by [`UpdateTrigger::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerSummary {
    pub requested: u64,
    pub failed: u64,
}

/// What [`UpdateTrigger::prepare`] managed to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preflight {
    pub oracle_set: bool,
    /// Request id returned by a dry-run `getLatestEthPrice()`.
    pub previewed_request: Option<RequestId>,
    pub update_simulated: bool,
}

pub struct UpdateTrigger {
    caller: Arc<dyn CallerContract>,
    oracle: Arc<dyn OracleContract>,
}

impl UpdateTrigger {
    pub fn new(caller: Arc<dyn CallerContract>, oracle: Arc<dyn OracleContract>) -> Self {
        Self { caller, oracle }
    }

    /// One-time setup before the timer starts.
    ///
    /// Logs the caller contract owner next to the signer address and points
    /// the caller at `oracle`. Then dry-runs `getLatestEthPrice()` on the
    /// oracle and `updateEthPrice()` on the caller so a misconfigured pair
    /// shows up in the log before the first real update. Failures are
    /// logged; setup never aborts the trigger because the caller may
    /// already be configured.
    pub async fn prepare(&self, oracle: Address, signer: Address) -> Preflight {
        let mut preflight = Preflight::default();

        match self.caller.owner().await {
            Ok(owner) => {
                info!(owner = %owner, signer = %signer, "Caller contract owner");
                if owner != signer {
                    warn!(
                        owner = %owner,
                        signer = %signer,
                        "Signer does not own the caller contract, owner-only calls will revert"
                    );
                }
            }
            Err(e) => warn!(error = %e, "Failed to read caller contract owner"),
        }

        match self.caller.set_oracle_address(oracle).await {
            Ok(tx_hash) => {
                info!(oracle = %oracle, tx_hash = %tx_hash, "Set oracle address");
                preflight.oracle_set = true;
            }
            Err(e) => error!(oracle = %oracle, error = %e, "Failed to set oracle address"),
        }

        match self.oracle.preview_request().await {
            Ok(id) => {
                info!(request_id = %id, "Direct call to getLatestEthPrice succeeded");
                preflight.previewed_request = Some(id);
            }
            Err(e) => warn!(error = %e, "Direct call to getLatestEthPrice failed"),
        }

        match self.caller.simulate_update().await {
            Ok(()) => {
                info!("updateEthPrice simulation succeeded");
                preflight.update_simulated = true;
            }
            Err(e) => warn!(error = %e, "updateEthPrice simulation failed"),
        }

        preflight
    }

    /// Submit one update request. Returns true on success.
    pub async fn tick(&self) -> bool {
        match self.caller.update_price().await {
            Ok(tx_hash) => {
                info!(tx_hash = %tx_hash, "Requested ETH price update");
                true
            }
            Err(e) => {
                error!(error = %e, "Error updating ETH price");
                false
            }
        }
    }

    /// Tick until shutdown.
    pub async fn run(&self, mut ticker: Ticker) -> TriggerSummary {
        let mut summary = TriggerSummary::default();
        while ticker.tick().await {
            if self.tick().await {
                summary.requested += 1;
            } else {
                summary.failed += 1;
            }
        }
        info!(
            requested = summary.requested,
            failed = summary.failed,
            "Update trigger stopped"
        );
        summary
    }
}
