//! Abstractions at the controller seams

mod form_entity;
mod item_api;

pub(crate) use form_entity::form_fields;
pub use form_entity::{FieldKey, FieldKind, FormEntity};
pub use item_api::ItemApi;
