//! Mock chain collaborators for testing.
//!
//! - [`RecordingOracle`] - records every `setLatestEthPrice` submission and
//!   pops scripted failures.
//! - [`RecordingCaller`] - counts `updateEthPrice` and
//!   `setOracleInstanceAddress` submissions.
//! - [`ChannelEvents`] - channel-backed event stream with an external handle.
//! - [`StaticInspector`] - fixed answers for startup probes.

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use alloy_primitives::U256;
use async_trait::async_trait;
use tokio::sync::mpsc;

use super::domain::tx_hash;
use crate::domain::{Address, NormalizedPrice, OracleEvent, RequestId, TxHash};
use crate::error::{ChainError, Result};
use crate::port::{CallerContract, ChainInspector, OracleContract, OracleEventStream};

/// One recorded oracle submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub price: NormalizedPrice,
    pub caller: Address,
    pub id: RequestId,
}

/// The error a scripted submission failure returns.
pub fn reverted(call: &'static str) -> crate::error::Error {
    ChainError::Reverted {
        call,
        tx_hash: "0xdead".into(),
    }
    .into()
}

// ---------------------------------------------------------------------------
// RecordingOracle
// ---------------------------------------------------------------------------

/// An oracle contract that records submissions.
///
/// Each call pops the next scripted outcome (`true` = succeed); once the
/// script is exhausted every submission succeeds. Failed submissions are
/// counted but not recorded.
#[derive(Clone, Default)]
pub struct RecordingOracle {
    submissions: Arc<Mutex<Vec<Submission>>>,
    outcomes: Arc<Mutex<VecDeque<bool>>>,
    attempts: Arc<AtomicU64>,
    previews: Arc<AtomicU64>,
    failing_preview: bool,
    owner: Address,
}

impl RecordingOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome of the next submissions, in order.
    pub fn with_outcomes(self, outcomes: Vec<bool>) -> Self {
        *self.outcomes.lock().unwrap() = outcomes.into();
        self
    }

    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = owner;
        self
    }

    /// Successful submissions in the order they were made.
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    /// Total submission attempts, including failed ones.
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Make `preview_request` fail.
    pub fn failing_preview(mut self) -> Self {
        self.failing_preview = true;
        self
    }

    /// `preview_request` calls, including failed ones.
    pub fn previews(&self) -> u64 {
        self.previews.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OracleContract for RecordingOracle {
    async fn set_latest_price(
        &self,
        price: NormalizedPrice,
        caller: Address,
        id: RequestId,
    ) -> Result<TxHash> {
        let n = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let succeed = self.outcomes.lock().unwrap().pop_front().unwrap_or(true);
        if !succeed {
            return Err(reverted("setLatestEthPrice"));
        }
        self.submissions
            .lock()
            .unwrap()
            .push(Submission { price, caller, id });
        Ok(tx_hash(n))
    }

    async fn preview_request(&self) -> Result<RequestId> {
        let n = self.previews.fetch_add(1, Ordering::SeqCst) + 1;
        if self.failing_preview {
            return Err(ChainError::Call {
                call: "getLatestEthPrice",
                reason: "execution reverted".into(),
            }
            .into());
        }
        Ok(RequestId::from(n))
    }

    async fn owner(&self) -> Result<Address> {
        Ok(self.owner)
    }
}

// ---------------------------------------------------------------------------
// RecordingCaller
// ---------------------------------------------------------------------------

/// A caller contract that counts submissions.
///
/// `update_price` pops scripted outcomes like [`RecordingOracle`]. Dry runs
/// are counted separately and never touch the update counters.
#[derive(Clone, Default)]
pub struct RecordingCaller {
    updates: Arc<AtomicU64>,
    update_attempts: Arc<AtomicU64>,
    outcomes: Arc<Mutex<VecDeque<bool>>>,
    oracle: Arc<Mutex<Option<Address>>>,
    reject_oracle_change: bool,
    simulations: Arc<AtomicU64>,
    failing_simulation: bool,
    owner: Address,
}

impl RecordingCaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcomes(self, outcomes: Vec<bool>) -> Self {
        *self.outcomes.lock().unwrap() = outcomes.into();
        self
    }

    /// Make `set_oracle_address` fail, as it does for a non-owner signer.
    pub fn rejecting_oracle_change(mut self) -> Self {
        self.reject_oracle_change = true;
        self
    }

    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = owner;
        self
    }

    /// Make `simulate_update` fail.
    pub fn failing_simulation(mut self) -> Self {
        self.failing_simulation = true;
        self
    }

    /// `simulate_update` calls, including failed ones.
    pub fn simulations(&self) -> u64 {
        self.simulations.load(Ordering::SeqCst)
    }

    /// Successful `update_price` submissions.
    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::SeqCst)
    }

    /// All `update_price` submissions, including failed ones.
    pub fn update_attempts(&self) -> u64 {
        self.update_attempts.load(Ordering::SeqCst)
    }

    /// Oracle address last set on the caller.
    pub fn oracle(&self) -> Option<Address> {
        *self.oracle.lock().unwrap()
    }
}

#[async_trait]
impl CallerContract for RecordingCaller {
    async fn update_price(&self) -> Result<TxHash> {
        let n = self.update_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        let succeed = self.outcomes.lock().unwrap().pop_front().unwrap_or(true);
        if !succeed {
            return Err(reverted("updateEthPrice"));
        }
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(tx_hash(n))
    }

    async fn set_oracle_address(&self, oracle: Address) -> Result<TxHash> {
        if self.reject_oracle_change {
            return Err(reverted("setOracleInstanceAddress"));
        }
        *self.oracle.lock().unwrap() = Some(oracle);
        Ok(tx_hash(0))
    }

    async fn simulate_update(&self) -> Result<()> {
        self.simulations.fetch_add(1, Ordering::SeqCst);
        if self.failing_simulation {
            return Err(ChainError::Call {
                call: "updateEthPrice",
                reason: "execution reverted".into(),
            }
            .into());
        }
        Ok(())
    }

    async fn owner(&self) -> Result<Address> {
        Ok(self.owner)
    }
}

// ---------------------------------------------------------------------------
// ChannelEvents
// ---------------------------------------------------------------------------

/// A channel-backed event stream.
///
/// Tests push events through the sender returned by [`channel_events`];
/// dropping every sender ends the stream.
pub struct ChannelEvents {
    event_rx: mpsc::UnboundedReceiver<OracleEvent>,
}

/// Create a [`ChannelEvents`] stream and its sending half.
pub fn channel_events() -> (ChannelEvents, mpsc::UnboundedSender<OracleEvent>) {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    (ChannelEvents { event_rx }, event_tx)
}

#[async_trait]
impl OracleEventStream for ChannelEvents {
    async fn next_event(&mut self) -> Option<OracleEvent> {
        self.event_rx.recv().await
    }
}

// ---------------------------------------------------------------------------
// StaticInspector
// ---------------------------------------------------------------------------

/// Fixed answers for startup probes.
#[derive(Debug, Clone, Default)]
pub struct StaticInspector {
    pub chain_id: u64,
    pub latest_block: u64,
    pub deployed: HashSet<Address>,
    pub balance: U256,
    pub unreachable: bool,
}

impl StaticInspector {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            latest_block: 1,
            ..Self::default()
        }
    }

    pub fn with_contract(mut self, address: Address) -> Self {
        self.deployed.insert(address);
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    fn probe(&self, call: &'static str) -> Result<()> {
        if self.unreachable {
            return Err(ChainError::Call {
                call,
                reason: "connection refused".into(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl ChainInspector for StaticInspector {
    async fn chain_id(&self) -> Result<u64> {
        self.probe("eth_chainId")?;
        Ok(self.chain_id)
    }

    async fn latest_block(&self) -> Result<u64> {
        self.probe("eth_blockNumber")?;
        Ok(self.latest_block)
    }

    async fn has_code(&self, address: Address) -> Result<bool> {
        self.probe("eth_getCode")?;
        Ok(self.deployed.contains(&address))
    }

    async fn balance(&self, _address: Address) -> Result<U256> {
        self.probe("eth_getBalance")?;
        Ok(self.balance)
    }
}
