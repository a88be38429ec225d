//! Markup-boundary form input

use crate::codec::field_key::{input_name, strip_field_key};
use crate::traits::FieldKey;
use crate::types::FormData;

/// A submitted form as the markup layer sees it: `(input name, value)` pairs.
///
/// This is the only place where prefixed string names are turned into typed keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFormInput {
    entries: Vec<(String, String)>,
}

impl RawFormInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Decode into typed form data.
    ///
    /// Names that do not resolve to a field of `K` are skipped; for repeated names the
    /// first value wins.
    pub fn decode<K: FieldKey>(&self, prefix: &str) -> FormData<K> {
        let mut form = FormData::new();
        for (name, value) in &self.entries {
            let key = strip_field_key(name, prefix);
            match K::from_key(key) {
                Some(field) if form.get(field).is_none() => form.set(field, value.clone()),
                Some(_) => {}
                None => log::debug!("Ignoring unknown form input: {name}"),
            }
        }
        form
    }

    /// Encode typed form data with prefixed names, in field order.
    pub fn encode<K: FieldKey>(prefix: &str, form: &FormData<K>) -> Self {
        Self {
            entries: form
                .iter()
                .map(|(field, value)| (input_name(prefix, field.as_key()), value.to_string()))
                .collect(),
        }
    }
}
