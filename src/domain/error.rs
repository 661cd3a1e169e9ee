//! Domain validation errors.
//!
//! Both variants are the "parse error" class for feed prices: the resolver
//! treats them exactly like a failed fetch and retries.
//!
//! ```
//! use ethoracle::domain::{normalize_price, DomainError};
//!
//! assert!(matches!(
//!     normalize_price("12,50"),
//!     Err(DomainError::InvalidPrice { .. })
//! ));
//! ```

use thiserror::Error;

/// Errors that occur when a feed value cannot become a [`NormalizedPrice`](super::NormalizedPrice).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input is not a plain decimal numeral the normalizer understands.
    #[error("invalid price '{input}': {reason}")]
    InvalidPrice {
        /// The raw string received from the feed.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Zero and negative quotes are rejected as bad feed data.
    #[error("price must be positive, got '{input}'")]
    NonPositivePrice {
        /// The raw string received from the feed.
        input: String,
    },
}
