//! Markup boundary: input names and submitted form input

pub mod field_key;
mod raw_input;

pub use field_key::{input_name, item_name_prefix, strip_field_key};
pub use raw_input::RawFormInput;
