//! Application services (use cases).
//!
//! Data flows one way:
//!
//! ```text
//! OracleEventStream ─▶ EventIngestor ─▶ RequestQueue ─▶ BatchProcessor ─▶ RequestResolver
//!                                                           (Ticker)        ├─ PriceFeed
//!                                                                           └─ OracleContract
//! ```
//!
//! Everything here depends only on `domain` and `port`; adapters are
//! injected as trait objects.

pub mod ingest;
pub mod processor;
pub mod queue;
pub mod resolver;
pub mod service;
pub mod ticker;
pub mod trigger;

pub use ingest::{EventIngestor, IngestSummary};
pub use processor::{BatchProcessor, TickSummary};
pub use queue::{request_queue, QueueClosed, RequestReceiver, RequestSender};
pub use resolver::RequestResolver;
pub use service::{OracleRelay, RelayReport, RelaySettings, UpdateClient};
pub use ticker::Ticker;
pub use trigger::{Preflight, TriggerSummary, UpdateTrigger};
