//! Request execution shared by every endpoint
//!
//! Sends a prepared request, logs it and classifies transport failures. Status
//! codes are left to the caller.

use fintrack_core::{CoreError, CoreResult, FetchResult};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::body_preview::BodyPreview;

pub struct HttpUtils;

impl HttpUtils {
    /// Perform a request and return status and body text.
    ///
    /// # Arguments
    /// * `request_builder` - Fully configured request (url, headers, body)
    /// * `method_name` - HTTP method, for logs
    /// * `url` - Target URL, for logs
    ///
    /// # Returns
    /// * `Ok((status, body))` - any status, 4xx/5xx included
    /// * `Err(CoreError::Timeout)` - the client timeout elapsed
    /// * `Err(CoreError::Network)` - connection or body read failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> CoreResult<(StatusCode, String)> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(format!("{method_name} {url}: {e}"))
            } else {
                CoreError::Network(format!("{method_name} {url}: {e}"))
            }
        })?;

        let status = response.status();
        log::debug!("{method_name} {url} -> {}", status.as_u16());

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(format!("{method_name} {url}: {e}"))
            } else {
                CoreError::Network(format!("Failed to read response body: {e}"))
            }
        })?;
        log::debug!("Response body: {}", BodyPreview(&body));

        Ok((status, body))
    }

    /// Parse a JSON body, logging the raw text on failure.
    pub fn parse_json<T: DeserializeOwned>(body: &str) -> CoreResult<T> {
        serde_json::from_str(body).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", BodyPreview(body));
            CoreError::Serialization(e.to_string())
        })
    }

    /// Map a completed exchange onto [`FetchResult`].
    ///
    /// 2xx is a success (an empty body carries no data). Anything else is a refusal
    /// whose message is the body's `message`/`error` field, the raw body, or the
    /// status reason, in that order.
    pub fn into_fetch_result<T: DeserializeOwned>(
        status: StatusCode,
        body: &str,
    ) -> CoreResult<FetchResult<T>> {
        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(FetchResult::empty());
            }
            return Self::parse_json(body).map(FetchResult::success);
        }
        Ok(FetchResult::failure(failure_message(status, body)))
    }
}

fn failure_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        });
    if let Some(message) = from_json {
        return message;
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
}
