//! Configuration loading.
//!
//! One TOML file, one environment override, defaults for everything.

mod loader;
mod types;

pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, UploadConfig};
