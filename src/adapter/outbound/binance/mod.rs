//! Binance spot ticker price feed.

mod client;
mod dto;

pub use client::BinanceFeed;
