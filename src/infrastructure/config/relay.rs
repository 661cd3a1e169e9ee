//! Request queue tuning.

use std::time::Duration;

use serde::Deserialize;

use crate::application::RelaySettings;

/// Queue processing settings.
///
/// Overridable through `CHUNK_SIZE`, `MAX_RETRIES` and `SLEEP_INTERVAL`.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Requests resolved per tick.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Attempts per request before the fallback price is submitted.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Tick period for both the batch processor and the update trigger.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

const fn default_chunk_size() -> usize {
    3
}

const fn default_max_retries() -> u32 {
    5
}

const fn default_poll_interval_ms() -> u64 {
    2000
}

impl RelayConfig {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            max_retries: default_max_retries(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl From<&RelayConfig> for RelaySettings {
    fn from(config: &RelayConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
            max_retries: config.max_retries,
            poll_interval: config.poll_interval(),
        }
    }
}
