//! Budget: a spending limit for one category

use serde::{Deserialize, Serialize};

use super::validate::FormValidator;
use crate::controllers::list_view::ListItem;
use crate::error::CoreResult;
use crate::traits::{form_fields, FormEntity};
use crate::types::FormData;
use crate::utils::money::format_cents;

form_fields! {
    /// Form fields of a [`Budget`]
    pub enum BudgetField {
        Id => ("id", Text),
        Amount => ("amount", Currency),
        CategoryId => ("categoryId", Text),
    }
}

/// Budget record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Limit in cents
    pub amount: i64,
    pub category_id: String,
}

impl FormEntity for Budget {
    type Field = BudgetField;

    const ITEM_NAME: &'static str = "Budget";
    const ENDPOINT: &'static str = "budgets";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn from_form_data(form: &FormData<BudgetField>) -> CoreResult<Self> {
        let mut v = FormValidator::new();
        let budget = Self {
            id: v.id(form.get(BudgetField::Id)),
            amount: v.positive_cents("Amount", form.get(BudgetField::Amount)),
            category_id: v.text("Category", form.get(BudgetField::CategoryId)),
        };
        v.finish(budget)
    }

    fn to_form_data(&self) -> FormData<BudgetField> {
        FormData::new()
            .with_opt(BudgetField::Id, self.id.map(|id| id.to_string()))
            .with(BudgetField::Amount, format_cents(self.amount))
            .with(BudgetField::CategoryId, self.category_id.clone())
    }
}

impl ListItem for Budget {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn parses_formatted_amount_into_cents() {
        let form = FormData::new()
            .with(BudgetField::Amount, "1,234.56")
            .with(BudgetField::CategoryId, "c1");
        let budget = Budget::from_form_data(&form).unwrap();
        assert_eq!(budget.amount, 123_456);
        assert_eq!(budget.id, None);
        assert_eq!(budget.category_id, "c1");
    }

    #[test]
    fn new_budget_serializes_without_id() {
        let budget = Budget {
            id: None,
            amount: 500,
            category_id: "c1".to_string(),
        };
        let json = serde_json::to_value(&budget).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["categoryId"], "c1");
    }

    #[test]
    fn form_round_trip() {
        let budget = Budget {
            id: Some(5),
            amount: 1700,
            category_id: "c1".to_string(),
        };
        let form = budget.to_form_data();
        assert_eq!(form.get(BudgetField::Amount), Some("17.00"));
        assert_eq!(Budget::from_form_data(&form).unwrap(), budget);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let result = Budget::from_form_data(&FormData::new());
        assert!(matches!(
            result,
            Err(CoreError::Validation(ref errors))
                if errors == &["Amount is required", "Category is required"]
        ));
    }
}
