//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod caller;
pub mod feed;
pub mod inspector;
pub mod oracle;
