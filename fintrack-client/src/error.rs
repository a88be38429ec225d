//! Client configuration errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`AppConfig`](crate::AppConfig)
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// API base URL is not an absolute http(s) URL
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
