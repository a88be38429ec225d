//! Cash-flow entry: one dated inflow or outflow

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validate::FormValidator;
use crate::controllers::list_view::{ListItem, SortKey};
use crate::error::CoreResult;
use crate::traits::{form_fields, FormEntity};
use crate::types::FormData;
use crate::utils::date::format_iso_day;
use crate::utils::money::format_cents;

form_fields! {
    /// Form fields of a [`CashFlowEntry`]
    pub enum CashFlowField {
        Id => ("id", Text),
        Date => ("date", Text),
        Amount => ("amount", Currency),
        Direction => ("direction", Text),
        Description => ("description", Text),
        CategoryId => ("categoryId", Text),
    }
}

/// Money moving in or out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    Inflow,
    #[default]
    Outflow,
}

impl FlowDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inflow => "inflow",
            Self::Outflow => "outflow",
        }
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inflow" | "in" | "income" => Ok(Self::Inflow),
            "outflow" | "out" | "expense" => Ok(Self::Outflow),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Cash-flow entry record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    /// Magnitude in cents; the sign lives in `direction`
    pub amount: i64,
    pub direction: FlowDirection,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

impl FormEntity for CashFlowEntry {
    type Field = CashFlowField;

    const ITEM_NAME: &'static str = "Cash Flow";
    const ENDPOINT: &'static str = "cash-flows";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn from_form_data(form: &FormData<CashFlowField>) -> CoreResult<Self> {
        let mut v = FormValidator::new();
        let entry = Self {
            id: v.id(form.get(CashFlowField::Id)),
            date: v.date("Date", form.get(CashFlowField::Date)),
            amount: v.positive_cents("Amount", form.get(CashFlowField::Amount)),
            direction: v.parse("Direction", form.get(CashFlowField::Direction)),
            description: v.text("Description", form.get(CashFlowField::Description)),
            category_id: FormValidator::optional_text(form.get(CashFlowField::CategoryId)),
        };
        v.finish(entry)
    }

    fn to_form_data(&self) -> FormData<CashFlowField> {
        FormData::new()
            .with_opt(CashFlowField::Id, self.id.map(|id| id.to_string()))
            .with(CashFlowField::Date, format_iso_day(self.date))
            .with(CashFlowField::Amount, format_cents(self.amount))
            .with(CashFlowField::Direction, self.direction.as_str())
            .with(CashFlowField::Description, self.description.clone())
            .with_opt(CashFlowField::CategoryId, self.category_id.clone())
    }
}

impl ListItem for CashFlowEntry {
    const DEFAULT_SORT: SortKey = SortKey::DateDescending;

    fn sort_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}
