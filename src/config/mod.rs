//! Application configuration.
//!
//! A single TOML file holds the remote inventory service settings. The only
//! environment surface beyond the log path is `STOCKPILE_API_URL`, which
//! overrides the configured base URL.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config};
