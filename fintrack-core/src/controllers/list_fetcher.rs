//! List fetch controller
//!
//! Loads a collection from the store, keeps the last good copy on failure and
//! exposes loading/message state to observers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::watch;
use url::form_urlencoded;

use crate::traits::{FormEntity, ItemApi};
use crate::types::{ListState, MessageState};
use crate::utils::date::format_iso_day;

/// Inclusive date filter appended to the query endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("startDate", &format_iso_day(self.start))
            .append_pair("endDate", &format_iso_day(self.end))
            .finish()
    }
}

/// Controller behind one list screen.
///
/// Only the most recently started fetch may write state; completions of
/// superseded fetches are dropped.
pub struct ListFetcher<T> {
    api: Arc<dyn ItemApi<T>>,
    endpoint: String,
    item_name: String,
    date_range: watch::Sender<Option<DateRange>>,
    generation: AtomicU64,
    state: watch::Sender<ListState<T>>,
}

impl<T> ListFetcher<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// # Arguments
    /// * `api` - Remote store
    /// * `endpoint` - Collection endpoint, e.g. `budgets`
    /// * `item_name` - Singular noun used in messages, e.g. `budget`
    pub fn new(
        api: Arc<dyn ItemApi<T>>,
        endpoint: impl Into<String>,
        item_name: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(ListState::default());
        let (date_range, _) = watch::channel(None);
        Self {
            api,
            endpoint: endpoint.into(),
            item_name: item_name.into(),
            date_range,
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Fetcher for an entity's own endpoint, named after the entity in lower case
    pub fn for_entity(api: Arc<dyn ItemApi<T>>) -> Self
    where
        T: FormEntity,
    {
        Self::new(api, T::ENDPOINT, T::ITEM_NAME.to_lowercase())
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ListState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<T>> {
        self.state.subscribe()
    }

    /// Endpoint the next fetch will query
    pub fn query_endpoint(&self) -> String {
        match *self.date_range.borrow() {
            Some(range) => format!("{}?{}", self.endpoint, range.query_string()),
            None => self.endpoint.clone(),
        }
    }

    /// Restrict subsequent fetches to a date range (`None` removes the filter)
    pub fn set_date_range(&self, range: Option<DateRange>) {
        self.date_range.send_replace(range);
    }

    pub fn set_message(&self, message: MessageState) {
        self.state.send_modify(|s| s.message = message);
    }

    /// Reload the collection.
    ///
    /// On any failure the previous items stay in place and the message explains
    /// what happened.
    pub async fn fetch_items(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.message = MessageState::default();
        });

        let endpoint = self.query_endpoint();
        log::debug!("Fetching {}s from '{endpoint}'", self.item_name);
        let outcome = self.api.query(&endpoint).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!(
                "Discarding superseded {} fetch #{generation}",
                self.item_name
            );
            return;
        }

        self.state.send_modify(|s| {
            match outcome {
                Ok(response) if response.successful => {
                    s.items = response.data.unwrap_or_default();
                }
                Ok(response) => {
                    log::warn!(
                        "Store refused to list {}s: {}",
                        self.item_name,
                        response.response_message
                    );
                    s.message = MessageState::error(format!(
                        "Failed to load {}s. Please try again.",
                        self.item_name
                    ));
                }
                Err(e) => {
                    log::error!("Failed to fetch {}s: {e}", self.item_name);
                    s.message = MessageState::error(format!(
                        "An unexpected error occurred while loading {}s. Please try again.",
                        self.item_name
                    ));
                }
            }
            s.is_loading = false;
        });
    }

    /// Delete one item and reload the list.
    ///
    /// Returns whether the store accepted the delete.
    pub async fn delete_item(&self, id: i64) -> bool {
        match self.api.remove(&self.endpoint, id).await {
            Ok(response) if response.successful => {
                log::info!("Deleted {} {id}", self.item_name);
                self.fetch_items().await;
                true
            }
            Ok(response) => {
                log::warn!(
                    "Store refused to delete {} {id}: {}",
                    self.item_name,
                    response.response_message
                );
                self.set_message(MessageState::error(format!(
                    "Failed to delete {}: {}",
                    self.item_name, response.response_message
                )));
                false
            }
            Err(e) => {
                log::error!("Failed to delete {} {id}: {e}", self.item_name);
                self.set_message(MessageState::error(format!(
                    "An unexpected error occurred while deleting {}. Please try again.",
                    self.item_name
                )));
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::{test_budget, MockItemApi};
    use crate::types::entities::Budget;

    fn budget_list(api: &Arc<MockItemApi<Budget>>) -> ListFetcher<Budget> {
        ListFetcher::for_entity(api.clone())
    }

    #[tokio::test]
    async fn fetch_replaces_items() {
        let api = Arc::new(MockItemApi::with_items(vec![
            test_budget(1, 100, "a"),
            test_budget(2, 200, "b"),
        ]));
        let list = budget_list(&api);

        list.fetch_items().await;

        let state = list.state();
        assert_eq!(state.items.len(), 2);
        assert!(!state.is_loading);
        assert!(state.message.is_cleared());
    }

    #[tokio::test]
    async fn refused_fetch_keeps_previous_items() {
        let api = Arc::new(MockItemApi::with_items(vec![test_budget(1, 100, "a")]));
        let list = budget_list(&api);
        list.fetch_items().await;

        api.set_refusal(Some("boom")).await;
        list.fetch_items().await;

        let state = list.state();
        assert_eq!(state.items, vec![test_budget(1, 100, "a")]);
        assert_eq!(
            state.message,
            MessageState::error("Failed to load budgets. Please try again.")
        );
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn transport_error_uses_generic_wording() {
        let api = Arc::new(MockItemApi::<Budget>::new());
        api.set_error(Some(CoreError::Timeout("30s".to_string()))).await;
        let list = budget_list(&api);

        list.fetch_items().await;

        assert_eq!(
            list.state().message.text,
            "An unexpected error occurred while loading budgets. Please try again."
        );
    }

    #[tokio::test]
    async fn superseded_fetch_does_not_overwrite_newer_items() {
        let api = Arc::new(MockItemApi::with_items(vec![test_budget(1, 100, "a")]));
        let list = budget_list(&api);
        let gate = api.gate_next_query().await;

        tokio::join!(list.fetch_items(), async {
            api.push_item(test_budget(2, 200, "b")).await;
            list.fetch_items().await;
            gate.notify_one();
        });

        let state = list.state();
        assert_eq!(state.items.len(), 2);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn date_range_is_sent_as_query() {
        let api = Arc::new(MockItemApi::<Budget>::new());
        let list = budget_list(&api);
        list.set_date_range(Some(DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )));

        list.fetch_items().await;
        list.set_date_range(None);
        list.fetch_items().await;

        let calls = api.calls().await;
        assert_eq!(calls[0].endpoint, "budgets?startDate=2024-01-01&endDate=2024-03-31");
        assert_eq!(calls[1].endpoint, "budgets");
    }

    #[tokio::test]
    async fn delete_reloads_on_success() {
        let api = Arc::new(MockItemApi::with_items(vec![
            test_budget(1, 100, "a"),
            test_budget(2, 200, "b"),
        ]));
        let list = budget_list(&api);
        list.fetch_items().await;

        assert!(list.delete_item(1).await);

        assert_eq!(list.state().items, vec![test_budget(2, 200, "b")]);
    }

    #[tokio::test]
    async fn refused_delete_keeps_items() {
        let api = Arc::new(MockItemApi::with_items(vec![test_budget(1, 100, "a")]));
        let list = budget_list(&api);
        list.fetch_items().await;
        api.set_refusal(Some("in use")).await;

        assert!(!list.delete_item(1).await);

        let state = list.state();
        assert_eq!(state.items.len(), 1);
        assert_eq!(
            state.message,
            MessageState::error("Failed to delete budget: in use")
        );
    }
}
