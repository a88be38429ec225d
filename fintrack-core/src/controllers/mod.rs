//! Controllers behind fintrack's record screens

mod form;
mod list_fetcher;
pub mod list_view;
mod submission;

pub use form::FormController;
pub use list_fetcher::{DateRange, ListFetcher};
pub use list_view::{sort_items, ListItem, ListRenderState, ListView, Paginator, SortKey};
pub use submission::{handle_form_submit, UNEXPECTED_SUBMIT_MESSAGE};
