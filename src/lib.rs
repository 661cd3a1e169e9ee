//! ethoracle - off-chain relay for an on-chain ETH price oracle.
//!
//! The oracle contract emits a request event whenever a caller contract asks
//! for a fresh price. This crate listens for those events, queues them, and
//! answers each one with a price fetched from an exchange, scaled to an
//! 18-decimal integer. A companion client drives the caller contract so the
//! loop can be exercised end to end.
//!
//! # Modules
//!
//! - [`domain`] - Request ids, pending requests, price normalization
//! - [`port`] - Traits for the price feed, contracts and chain probes
//! - [`application`] - Ingestion, queueing, batch processing, resolution
//! - [`adapter`] - Binance feed and alloy-based chain adapters
//! - [`infrastructure`] - Configuration, wiring and service lifecycles
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Scripted feeds and recording contracts for tests

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
