//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// A request that completed but was rejected by the remote store is *not* an error;
/// it comes back as an unsuccessful [`FetchResult`](crate::types::FetchResult).
/// These variants cover everything that prevented a usable answer.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Local validation failed before any request was made
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Input name does not map to a known field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Update requested for an item without an id
    #[error("Missing id for {0} update")]
    MissingId(String),

    /// network error
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Anything else
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::UnknownField(_) => true,
            Self::MissingId(_)
            | Self::Network(_)
            | Self::Timeout(_)
            | Self::Serialization(_)
            | Self::Unexpected(_) => false,
        }
    }

    /// Shorthand for a single validation message
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(vec![message.into()])
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
