//! Store configuration.

mod config;

pub use config::{ConfigError, NotifyPolicy, StoreConfig};
