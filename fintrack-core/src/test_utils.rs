//! Test helpers
//!
//! In-memory [`ItemApi`] with injectable refusals and errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::{Notify, RwLock};

use crate::error::{CoreError, CoreResult};
use crate::traits::{FormEntity, ItemApi};
use crate::types::entities::Budget;
use crate::types::FetchResult;

/// One request seen by [`MockItemApi`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub endpoint: String,
    pub id: Option<i64>,
    /// Body as it would go over the wire
    pub body: Option<serde_json::Value>,
}

// ===== MockItemApi =====

pub struct MockItemApi<T> {
    items: RwLock<Vec<T>>,
    /// If Some, every request is answered with `successful = false` and this message
    refusal: RwLock<Option<String>>,
    /// If Some, every request fails with this error
    error: RwLock<Option<CoreError>>,
    /// If Some, the next query waits for a notification after reading the store
    query_gate: RwLock<Option<Arc<Notify>>>,
    calls: RwLock<Vec<RecordedCall>>,
}

impl<T> MockItemApi<T>
where
    T: FormEntity + Serialize,
{
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
            refusal: RwLock::new(None),
            error: RwLock::new(None),
            query_gate: RwLock::new(None),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_refusal(&self, message: Option<&str>) {
        *self.refusal.write().await = message.map(str::to_string);
    }

    pub async fn set_error(&self, err: Option<CoreError>) {
        *self.error.write().await = err;
    }

    pub async fn push_item(&self, item: T) {
        self.items.write().await.push(item);
    }

    pub async fn items(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    /// Hold the next query until the returned handle is notified
    pub async fn gate_next_query(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.query_gate.write().await = Some(gate.clone());
        gate
    }

    async fn record(&self, method: &'static str, endpoint: &str, id: Option<i64>, body: Option<&T>) {
        self.calls.write().await.push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            id,
            body: body.and_then(|b| serde_json::to_value(b).ok()),
        });
    }

    /// Injected error or refusal, checked before touching the store
    async fn injected<R>(&self) -> Option<CoreResult<FetchResult<R>>> {
        if let Some(ref err) = *self.error.read().await {
            return Some(Err(err.clone()));
        }
        if let Some(ref msg) = *self.refusal.read().await {
            return Some(Ok(FetchResult::failure(msg.clone())));
        }
        None
    }
}

#[async_trait]
impl<T> ItemApi<T> for MockItemApi<T>
where
    T: FormEntity + Serialize,
{
    async fn query(&self, endpoint: &str) -> CoreResult<FetchResult<Vec<T>>> {
        self.record("GET", endpoint, None, None).await;
        if let Some(outcome) = self.injected().await {
            return outcome;
        }
        let snapshot = self.items.read().await.clone();
        let gate = self.query_gate.write().await.take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        Ok(FetchResult::success(snapshot))
    }

    async fn create(&self, endpoint: &str, body: &T) -> CoreResult<FetchResult<T>> {
        self.record("POST", endpoint, None, Some(body)).await;
        if let Some(outcome) = self.injected().await {
            return outcome;
        }
        self.items.write().await.push(body.clone());
        Ok(FetchResult::success(body.clone()))
    }

    async fn update(&self, endpoint: &str, id: i64, body: &T) -> CoreResult<FetchResult<T>> {
        self.record("PUT", endpoint, Some(id), Some(body)).await;
        if let Some(outcome) = self.injected().await {
            return outcome;
        }
        let mut items = self.items.write().await;
        match items.iter_mut().find(|item| item.id() == Some(id)) {
            Some(slot) => {
                *slot = body.clone();
                Ok(FetchResult::success(body.clone()))
            }
            None => Ok(FetchResult::failure(format!("No item with id {id}"))),
        }
    }

    async fn remove(&self, endpoint: &str, id: i64) -> CoreResult<FetchResult<T>> {
        self.record("DELETE", endpoint, Some(id), None).await;
        if let Some(outcome) = self.injected().await {
            return outcome;
        }
        self.items.write().await.retain(|item| item.id() != Some(id));
        Ok(FetchResult::empty())
    }
}

// ===== Factories =====

pub fn test_budget(id: i64, amount: i64, category_id: &str) -> Budget {
    Budget {
        id: Some(id),
        amount,
        category_id: category_id.to_string(),
    }
}
