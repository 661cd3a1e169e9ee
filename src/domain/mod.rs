//! Chain-facing domain types: oracle requests, request ids, normalized prices.
//!
//! Nothing in here performs I/O. Adapters translate their wire types into
//! these before anything in `application` sees them.

pub mod error;
pub mod id;
pub mod price;
pub mod request;

pub use alloy_primitives::{Address, TxHash};
pub use error::DomainError;
pub use id::RequestId;
pub use price::{normalize_price, NormalizedPrice, FEED_DECIMALS, PRICE_SCALE};
pub use request::{OracleEvent, PendingRequest, PriceQuote, Resolution};
