//! Client configuration
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080/api"
//! timeout_secs = 30
//! auth_token = "optional"
//!
//! [list]
//! page_size = 10
//! ```
//!
//! Every field is optional. `FINTRACK_API_URL` and `FINTRACK_API_TOKEN` take
//! precedence over the file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, ConfigResult};

pub const ENV_API_URL: &str = "FINTRACK_API_URL";
pub const ENV_API_TOKEN: &str = "FINTRACK_API_TOKEN";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
}

/// Remote store connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Sent as a bearer token when present
    pub auth_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth_token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: fintrack_core::types::DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Load from `path` (or defaults), apply environment overrides and validate.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(
            std::env::var(ENV_API_URL).ok(),
            std::env::var(ENV_API_TOKEN).ok(),
        );
        config.validate()?;
        log::debug!("Using API at {}", config.api.base_url);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override the base URL and token; empty values are ignored.
    pub fn apply_overrides(&mut self, base_url: Option<String>, auth_token: Option<String>) {
        if let Some(url) = base_url.filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(token) = auth_token.filter(|v| !v.trim().is_empty()) {
            self.api.auth_token = Some(token);
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.api.base_url.clone(),
            reason,
        };
        let url = Url::parse(&self.api.base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        Ok(())
    }
}
