//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`feed`] - `ScriptedFeed`, a [`PriceFeed`](crate::port::PriceFeed) with
//!   pre-loaded results and a fetch counter.
//! - [`chain`] - `RecordingOracle`, `RecordingCaller`, `ChannelEvents` and
//!   `StaticInspector` stand-ins for the chain collaborator.
//! - [`domain`] - Builders for requests and addresses.

pub mod chain;
pub mod domain;
pub mod feed;
