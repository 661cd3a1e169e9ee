//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The relay talks to three collaborators: an HTTP price feed, the chain
//! RPC endpoint (contracts, events, read-only probes), and a signer that is
//! folded into the chain adapters at construction time.
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!  events ──────▶ │ ingest ▶ queue ▶ processor   │ ──────▶ oracle contract
//!                 │                  ▼           │
//!                 │              resolver ◀──────┼─────── price feed
//!                 └──────────────────────────────┘
//! ```

pub mod outbound;

pub use outbound::caller::CallerContract;
pub use outbound::feed::PriceFeed;
pub use outbound::inspector::ChainInspector;
pub use outbound::oracle::{OracleContract, OracleEventStream};
