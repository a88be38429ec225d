//! Entity ↔ form representation binding

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::CoreResult;
use crate::types::FormData;

/// How a field's keystrokes are sanitized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, stored as typed
    Text,
    /// Monetary amount, see [`clean_currency_input`](crate::sanitize::clean_currency_input)
    Currency,
    /// Percentage in `[-100, 100]`, see [`clean_percentage_input`](crate::sanitize::clean_percentage_input)
    Percentage,
}

/// Typed field key of an entity's form representation.
///
/// The string form returned by [`as_key`](Self::as_key) is the bare field key used in
/// input names (`"{prefix}-{key}"`).
pub trait FieldKey: Copy + Ord + Hash + Debug + Send + Sync + 'static {
    /// Every field, in display order
    const ALL: &'static [Self];

    fn as_key(self) -> &'static str;

    fn kind(self) -> FieldKind;

    /// Parse a bare field key
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_key() == key)
    }

    /// Whether this field carries the entity id
    fn is_id(self) -> bool {
        self.as_key() == "id"
    }
}

/// A domain record that can be edited through a form controller.
///
/// Implementations supply the two pure conversions between the entity and its
/// string-typed form representation.
pub trait FormEntity: Clone + Debug + Send + Sync + 'static {
    type Field: FieldKey;

    /// Human readable name used in messages, e.g. `"Cash Flow"`
    const ITEM_NAME: &'static str;

    /// Remote endpoint identifier, e.g. `"cash-flows"`
    const ENDPOINT: &'static str;

    fn id(&self) -> Option<i64>;

    /// Build an entity from (possibly partial) form data.
    ///
    /// Returns [`CoreError::Validation`](crate::CoreError::Validation) with every
    /// problem found; any other error is treated as unexpected by the caller.
    fn from_form_data(form: &FormData<Self::Field>) -> CoreResult<Self>;

    /// Project the entity into its form representation
    fn to_form_data(&self) -> FormData<Self::Field>;
}

/// Declare a form field enum together with its [`FieldKey`] implementation.
///
/// ```ignore
/// form_fields! {
///     pub enum BudgetField {
///         Id => ("id", Text),
///         Amount => ("amount", Currency),
///     }
/// }
/// ```
macro_rules! form_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($key:literal, $kind:ident)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::traits::FieldKey for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            fn kind(self) -> $crate::traits::FieldKind {
                match self {
                    $(Self::$variant => $crate::traits::FieldKind::$kind),+
                }
            }
        }
    };
}

pub(crate) use form_fields;
