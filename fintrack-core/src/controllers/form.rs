//! Form controller: edit buffer, keystroke sanitizing and submission

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use super::submission::handle_form_submit;
use crate::codec::{item_name_prefix, strip_field_key, RawFormInput};
use crate::sanitize::{clean_currency_input, clean_percentage_input};
use crate::traits::{FieldKey, FieldKind, FormEntity, ItemApi};
use crate::types::{FormState, MessageState};

/// Controller behind one create/edit form for `E`.
///
/// All operations take `&self`; state changes are published through a
/// [`watch`] channel (see [`subscribe`](Self::subscribe)).
pub struct FormController<E: FormEntity> {
    api: Arc<dyn ItemApi<E>>,
    prefix: String,
    state: watch::Sender<FormState<E::Field>>,
}

impl<E: FormEntity> FormController<E> {
    pub fn new(api: Arc<dyn ItemApi<E>>) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            api,
            prefix: item_name_prefix(E::ITEM_NAME),
            state,
        }
    }

    /// Prefix of every input name this form renders, e.g. `cash-flow`
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Snapshot of the current state
    pub fn state(&self) -> FormState<E::Field> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState<E::Field>> {
        self.state.subscribe()
    }

    /// Apply one keystroke coming from an input named `{prefix}-{key}`.
    ///
    /// Returns `false` when the keystroke was discarded: unknown field, or a
    /// currency/percentage value the sanitizer rejects.
    pub fn on_change(&self, input_name: &str, raw_value: &str) -> bool {
        let key = strip_field_key(input_name, &self.prefix);
        let Some(field) = E::Field::from_key(key) else {
            log::debug!("Ignoring change to unknown {} input '{input_name}'", E::ITEM_NAME);
            return false;
        };
        self.set_field(field, raw_value)
    }

    /// Typed counterpart of [`on_change`](Self::on_change)
    pub fn set_field(&self, field: E::Field, raw_value: &str) -> bool {
        let cleaned = match field.kind() {
            FieldKind::Text => Some(raw_value.to_string()),
            FieldKind::Currency => clean_currency_input(raw_value),
            FieldKind::Percentage => clean_percentage_input(raw_value),
        };
        let Some(value) = cleaned else {
            log::debug!("Rejected input for {}.{}", E::ITEM_NAME, field.as_key());
            return false;
        };
        self.state.send_if_modified(|s| {
            if s.editing_form_data.get(field) == Some(value.as_str()) {
                return false;
            }
            s.editing_form_data.set(field, value);
            true
        });
        true
    }

    /// Submit raw form input (see [`handle_form_submit`]).
    pub async fn handle_submit<R, Fut>(&self, raw: &RawFormInput, refresh: R)
    where
        R: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        handle_form_submit(raw, self.api.as_ref(), &self.state, refresh).await;
    }

    /// Submit the current edit buffer as if it had been rendered and posted.
    pub async fn submit_editing<R, Fut>(&self, refresh: R)
    where
        R: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let raw = RawFormInput::encode(&self.prefix, &self.state.borrow().editing_form_data);
        self.handle_submit(&raw, refresh).await;
    }

    /// Load an existing item into the buffer for editing
    pub fn on_item_is_editing(&self, item: &E) {
        let form = item.to_form_data();
        self.state.send_modify(|s| {
            s.editing_form_data = form;
            s.message = MessageState::default();
        });
    }

    /// Back to an empty create form
    pub fn on_reset(&self) {
        self.state.send_if_modified(|s| {
            if s.editing_form_data.is_empty() && s.message.is_cleared() {
                return false;
            }
            s.editing_form_data.clear();
            s.message = MessageState::default();
            true
        });
    }

    pub fn set_message(&self, message: MessageState) {
        self.state.send_modify(|s| s.message = message);
    }
}
