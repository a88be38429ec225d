//! Holding: an account or asset with a current balance

use serde::{Deserialize, Serialize};

use super::validate::FormValidator;
use crate::controllers::list_view::{ListItem, SortKey};
use crate::error::CoreResult;
use crate::traits::{form_fields, FormEntity};
use crate::types::FormData;
use crate::utils::money::format_cents;

form_fields! {
    /// Form fields of a [`Holding`]
    ///
    /// `Balance` is a currency field, and currency keystrokes carry no sign.
    /// A negative balance loaded with `on_item_is_editing` is submitted as is,
    /// but editing the field makes it positive.
    pub enum HoldingField {
        Id => ("id", Text),
        Name => ("name", Text),
        Balance => ("balance", Currency),
        InterestRate => ("interestRate", Percentage),
        Institution => ("institution", Text),
    }
}

/// Holding record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// Current balance in cents
    pub balance: i64,
    /// Annual rate in percent, e.g. `4.5`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

impl FormEntity for Holding {
    type Field = HoldingField;

    const ITEM_NAME: &'static str = "Holding";
    const ENDPOINT: &'static str = "holdings";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn from_form_data(form: &FormData<HoldingField>) -> CoreResult<Self> {
        let mut v = FormValidator::new();
        let holding = Self {
            id: v.id(form.get(HoldingField::Id)),
            name: v.text("Name", form.get(HoldingField::Name)),
            balance: v.cents("Balance", form.get(HoldingField::Balance)),
            interest_rate: v.optional_percent("Interest rate", form.get(HoldingField::InterestRate)),
            institution: FormValidator::optional_text(form.get(HoldingField::Institution)),
        };
        v.finish(holding)
    }

    fn to_form_data(&self) -> FormData<HoldingField> {
        FormData::new()
            .with_opt(HoldingField::Id, self.id.map(|id| id.to_string()))
            .with(HoldingField::Name, self.name.clone())
            .with(HoldingField::Balance, format_cents(self.balance))
            .with_opt(HoldingField::InterestRate, self.interest_rate.map(|r| r.to_string()))
            .with_opt(HoldingField::Institution, self.institution.clone())
    }
}

impl ListItem for Holding {
    const DEFAULT_SORT: SortKey = SortKey::NameAscending;

    fn sort_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}
