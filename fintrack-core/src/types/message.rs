//! Single-slot status message shared by the form and list controllers

use serde::{Deserialize, Serialize};

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageKind {
    Error,
    Info,
}

/// The most recent validation / network outcome of a controller.
///
/// Overwritten on every cycle, never queued. The cleared state is
/// `{ kind: None, text: "" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageState {
    #[serde(rename = "type")]
    pub kind: Option<MessageKind>,
    pub text: String,
}

impl MessageState {
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: Some(MessageKind::Error),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: Some(MessageKind::Info),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == Some(MessageKind::Error)
    }

    /// Whether nothing is currently shown
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.kind.is_none() && self.text.is_empty()
    }
}
