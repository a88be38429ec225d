//! Remote store request contract

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::FetchResult;

/// Request contract consumed by the controllers
///
/// Platform implementation:
/// - `fintrack-client`: `HttpItemApi` (reqwest, JSON over HTTP)
/// - tests: `MockItemApi` (in-memory)
///
/// `Ok` with `successful = false` is a refusal by the store; `Err` means no usable
/// answer was obtained (transport failure, undecodable body, ...).
#[async_trait]
pub trait ItemApi<T>: Send + Sync {
    /// Read the collection behind an endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint identifier, optionally with a query string
    async fn query(&self, endpoint: &str) -> CoreResult<FetchResult<Vec<T>>>;

    /// Create a new item
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint identifier
    /// * `body` - Item without an id
    async fn create(&self, endpoint: &str, body: &T) -> CoreResult<FetchResult<T>>;

    /// Replace an existing item
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint identifier
    /// * `id` - Item id
    /// * `body` - New item state
    async fn update(&self, endpoint: &str, id: i64, body: &T) -> CoreResult<FetchResult<T>>;

    /// Delete an item
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint identifier
    /// * `id` - Item id
    async fn remove(&self, endpoint: &str, id: i64) -> CoreResult<FetchResult<T>>;
}
