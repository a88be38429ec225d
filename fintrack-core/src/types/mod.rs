//! Shared value types: messages, form buffers, controller state, pagination

pub mod entities;
mod form_data;
mod message;
mod pagination;
mod response;
mod state;

pub use form_data::FormData;
pub use message::{MessageKind, MessageState};
pub use pagination::{total_pages, PageView, DEFAULT_PAGE_SIZE};
pub use response::FetchResult;
pub use state::{FormState, ListState};
