//! fintrack HTTP client
//!
//! - [`HttpItemApi`]: the store's JSON API behind [`fintrack_core::ItemApi`]
//! - [`AppConfig`]: TOML configuration with environment overrides

mod api;
mod config;
mod error;
pub mod http;
mod body_preview;

pub use api::HttpItemApi;
pub use config::{ApiConfig, AppConfig, ListConfig, ENV_API_TOKEN, ENV_API_URL};
pub use error::{ConfigError, ConfigResult};
