//! Observable controller state bags

use crate::traits::FieldKey;
use crate::types::{FormData, MessageState};

/// State of one form controller instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState<K: FieldKey> {
    /// A submission is in flight
    pub is_submitting: bool,
    /// Transient edit buffer
    pub editing_form_data: FormData<K>,
    pub message: MessageState,
}

impl<K: FieldKey> Default for FormState<K> {
    fn default() -> Self {
        Self {
            is_submitting: false,
            editing_form_data: FormData::default(),
            message: MessageState::default(),
        }
    }
}

/// State of one list fetch controller instance
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    /// Last successfully fetched collection
    pub items: Vec<T>,
    /// A fetch is in flight
    pub is_loading: bool,
    pub message: MessageState,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            message: MessageState::default(),
        }
    }
}
