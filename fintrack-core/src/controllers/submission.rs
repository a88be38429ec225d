//! Create-or-update submission flow shared by every form

use std::future::Future;

use tokio::sync::watch;

use crate::codec::{item_name_prefix, RawFormInput};
use crate::error::{CoreError, CoreResult};
use crate::traits::{FieldKey, FormEntity, ItemApi};
use crate::types::{FetchResult, FormData, FormState, MessageState};

/// Message shown when the store could not be reached or answered garbage
pub const UNEXPECTED_SUBMIT_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitAction {
    Create,
    Update,
}

impl SubmitAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
        }
    }
}

/// Clears `is_submitting` on every exit path, unwinding included.
struct SubmittingGuard<'a, K: FieldKey> {
    state: &'a watch::Sender<FormState<K>>,
}

impl<'a, K: FieldKey> SubmittingGuard<'a, K> {
    fn engage(state: &'a watch::Sender<FormState<K>>) -> Self {
        state.send_modify(|s| {
            s.is_submitting = true;
            s.message = MessageState::default();
        });
        Self { state }
    }
}

impl<K: FieldKey> Drop for SubmittingGuard<'_, K> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.is_submitting = false);
    }
}

/// Validate the decoded form and send it to the store.
async fn save<E: FormEntity>(
    api: &dyn ItemApi<E>,
    form: &FormData<E::Field>,
    action: SubmitAction,
) -> CoreResult<FetchResult<E>> {
    let item = E::from_form_data(form)?;
    match action {
        SubmitAction::Create => api.create(E::ENDPOINT, &item).await,
        SubmitAction::Update => {
            let id = item
                .id()
                .ok_or_else(|| CoreError::MissingId(E::ITEM_NAME.to_string()))?;
            api.update(E::ENDPOINT, id, &item).await
        }
    }
}

/// Submit raw form input as a create or an update of `E`.
///
/// The form counts as an edit when the decoded input carries a non-empty id,
/// whether it was submitted as `{prefix}-id` or as a bare `id`.
/// `refresh` is awaited exactly once, and only after the store accepted the item.
/// Afterwards the edit buffer is cleared.
///
/// Never fails: every outcome ends up in `state.message`.
///
/// # Arguments
/// * `raw` - Submitted input names and values
/// * `api` - Remote store
/// * `state` - Form state to report into
/// * `refresh` - Re-fetch hook for the owning list
pub async fn handle_form_submit<E, R, Fut>(
    raw: &RawFormInput,
    api: &dyn ItemApi<E>,
    state: &watch::Sender<FormState<E::Field>>,
    refresh: R,
) where
    E: FormEntity,
    R: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let _guard = SubmittingGuard::engage(state);

    let prefix = item_name_prefix(E::ITEM_NAME);
    let form = raw.decode::<E::Field>(&prefix);
    let action = if form.iter().any(|(field, value)| field.is_id() && !value.is_empty()) {
        SubmitAction::Update
    } else {
        SubmitAction::Create
    };

    let message = match save(api, &form, action).await {
        Ok(response) if response.successful => {
            refresh().await;
            log::info!("{} {}", E::ITEM_NAME, action.past_tense());
            state.send_modify(|s| s.editing_form_data.clear());
            MessageState::info(format!(
                "{} {} successfully.",
                E::ITEM_NAME,
                action.past_tense()
            ))
        }
        Ok(response) => {
            log::warn!(
                "Store refused to {} {}: {}",
                action.verb(),
                E::ITEM_NAME,
                response.response_message
            );
            MessageState::error(format!(
                "Failed to {} {}: {}",
                action.verb(),
                E::ITEM_NAME,
                response.response_message
            ))
        }
        Err(CoreError::Validation(errors)) => {
            log::warn!("{} form rejected: {}", E::ITEM_NAME, errors.join(", "));
            MessageState::error(errors.join(", "))
        }
        Err(e) => {
            log::error!("Failed to {} {}: {e}", action.verb(), E::ITEM_NAME);
            MessageState::error(UNEXPECTED_SUBMIT_MESSAGE)
        }
    };
    state.send_modify(|s| s.message = message);
}
