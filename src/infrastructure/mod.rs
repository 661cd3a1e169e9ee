//! Infrastructure layer.
//!
//! Configuration, adapter wiring and the service lifecycles. No relay logic
//! lives here.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`runtime`] - Oracle and client lifecycles
//! - [`startup`] - Fatal startup probes

pub mod bootstrap;
pub mod config;
pub mod runtime;
pub mod startup;

pub use runtime::{run_client, run_oracle};
