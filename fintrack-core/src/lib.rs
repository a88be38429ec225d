//! fintrack Core Library
//!
//! Provides the reusable controller layer behind every fintrack record screen:
//! - Field key codec and raw form input decoding (markup boundary)
//! - Currency / percentage keystroke sanitizers
//! - Form controller with create-or-update submission
//! - List fetch controller with sorted, paginated views
//!
//! The remote store is abstracted through the [`ItemApi`] trait, so the same
//! controllers run against the HTTP client or an in-memory mock.

pub mod codec;
pub mod controllers;
pub mod error;
pub mod sanitize;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use codec::RawFormInput;
pub use controllers::{FormController, ListFetcher, ListItem, ListView, SortKey};
pub use error::{CoreError, CoreResult};
pub use traits::{FieldKey, FieldKind, FormEntity, ItemApi};
pub use types::{FetchResult, FormData, FormState, ListState, MessageKind, MessageState};
