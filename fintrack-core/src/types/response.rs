//! Request contract response type

use serde::{Deserialize, Serialize};

/// Outcome of a completed request against the remote store.
///
/// `successful = false` means the store answered and refused; transport problems are
/// reported as [`CoreError`](crate::CoreError) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult<T> {
    /// Whether the store accepted the request
    pub successful: bool,
    /// Response payload
    pub data: Option<T>,
    /// Server-provided message (may be empty)
    #[serde(default)]
    pub response_message: String,
}

impl<T> FetchResult<T> {
    /// Successful response carrying data
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            successful: true,
            data: Some(data),
            response_message: String::new(),
        }
    }

    /// Successful response without a body (e.g. delete)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            successful: true,
            data: None,
            response_message: String::new(),
        }
    }

    #[must_use]
    pub fn failure(response_message: impl Into<String>) -> Self {
        Self {
            successful: false,
            data: None,
            response_message: response_message.into(),
        }
    }
}
