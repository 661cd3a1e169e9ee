//! Builders for domain primitives.

use alloy_primitives::{Address, TxHash};

use crate::domain::{OracleEvent, PendingRequest, RequestId};

/// Deterministic caller address derived from a small index.
pub fn caller(index: u8) -> Address {
    Address::repeat_byte(index)
}

/// Deterministic transaction hash derived from a counter.
pub fn tx_hash(n: u64) -> TxHash {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&n.to_be_bytes());
    TxHash::from(bytes)
}

pub fn request(caller_index: u8, id: u64) -> PendingRequest {
    PendingRequest::new(caller(caller_index), RequestId::from(id))
}

pub fn price_requested(caller_index: u8, id: u64) -> OracleEvent {
    OracleEvent::PriceRequested {
        caller: caller(caller_index),
        id: RequestId::from(id),
    }
}
