//! Infrastructure configuration modules.

pub mod chain;
pub mod feed;
pub mod logging;
pub mod relay;
pub mod settings;
pub mod wallet;

pub use chain::ChainConfig;
pub use feed::FeedConfig;
pub use logging::LoggingConfig;
pub use relay::RelayConfig;
pub use settings::Config;
pub use wallet::{read_keystore_password, WalletConfig};
