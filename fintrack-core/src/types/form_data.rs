//! String-typed form representation (the edit buffer)

use std::collections::BTreeMap;

use crate::traits::FieldKey;

/// A partial, string-typed projection of an entity keyed by its field enum.
///
/// Absent keys are fields the user has not touched yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData<K: Ord> {
    values: BTreeMap<K, String>,
}

impl<K: Ord> Default for FormData<K> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<K: FieldKey> FormData<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, field: K, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Builder-style insert that skips `None`
    #[must_use]
    pub fn with_opt(self, field: K, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.with(field, v),
            None => self,
        }
    }

    pub fn get(&self, field: K) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Trimmed value, empty when absent
    pub fn value(&self, field: K) -> &str {
        self.get(field).map_or("", str::trim)
    }

    /// Trimmed value, `None` when absent or blank
    pub fn non_empty(&self, field: K) -> Option<&str> {
        Some(self.value(field)).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, field: K, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn remove(&mut self, field: K) -> Option<String> {
        self.values.remove(&field)
    }

    /// Merge another buffer into this one; keys present in `other` win.
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl<K: FieldKey> FromIterator<(K, String)> for FormData<K> {
    fn from_iter<I: IntoIterator<Item = (K, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
