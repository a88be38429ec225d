//! Category used to group budgets and cash-flow entries

use serde::{Deserialize, Serialize};

use super::validate::FormValidator;
use crate::controllers::list_view::{ListItem, SortKey};
use crate::error::CoreResult;
use crate::traits::{form_fields, FormEntity};
use crate::types::FormData;

form_fields! {
    /// Form fields of a [`Category`]
    pub enum CategoryField {
        Id => ("id", Text),
        Name => ("name", Text),
        Description => ("description", Text),
    }
}

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FormEntity for Category {
    type Field = CategoryField;

    const ITEM_NAME: &'static str = "Category";
    const ENDPOINT: &'static str = "categories";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn from_form_data(form: &FormData<CategoryField>) -> CoreResult<Self> {
        let mut v = FormValidator::new();
        let category = Self {
            id: v.id(form.get(CategoryField::Id)),
            name: v.text("Name", form.get(CategoryField::Name)),
            description: FormValidator::optional_text(form.get(CategoryField::Description)),
        };
        v.finish(category)
    }

    fn to_form_data(&self) -> FormData<CategoryField> {
        FormData::new()
            .with_opt(CategoryField::Id, self.id.map(|id| id.to_string()))
            .with(CategoryField::Name, self.name.clone())
            .with_opt(CategoryField::Description, self.description.clone())
    }
}

impl ListItem for Category {
    const DEFAULT_SORT: SortKey = SortKey::NameAscending;

    fn sort_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}
