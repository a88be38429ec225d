//! Snapshot: a holding's balance recorded on a given day

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
    /// Form fields of a [`Snapshot`]
    ///
    /// `Balance` is a currency field, and currency keystrokes carry no sign.
    /// A negative balance loaded with `on_item_is_editing` is submitted as is,
    /// but editing the field makes it positive.
    pub enum SnapshotField {
        Id => ("id", Text),
        Date => ("date", Text),
        HoldingId => ("holdingId", Text),
        Balance => ("balance", Currency),
    }
}

/// Balance snapshot record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub holding_id: i64,
    /// Balance in cents
    pub balance: i64,
}

impl FormEntity for Snapshot {
    type Field = SnapshotField;

    const ITEM_NAME: &'static str = "Snapshot";
    const ENDPOINT: &'static str = "snapshots";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn from_form_data(form: &FormData<SnapshotField>) -> CoreResult<Self> {
        let mut v = FormValidator::new();
        let snapshot = Self {
            id: v.id(form.get(SnapshotField::Id)),
            date: v.date("Date", form.get(SnapshotField::Date)),
            holding_id: v.reference("Holding", form.get(SnapshotField::HoldingId)),
            balance: v.cents("Balance", form.get(SnapshotField::Balance)),
        };
        v.finish(snapshot)
    }

    fn to_form_data(&self) -> FormData<SnapshotField> {
        FormData::new()
            .with_opt(SnapshotField::Id, self.id.map(|id| id.to_string()))
            .with(SnapshotField::Date, format_iso_day(self.date))
            .with(SnapshotField::HoldingId, self.holding_id.to_string())
            .with(SnapshotField::Balance, format_cents(self.balance))
    }
}

impl ListItem for Snapshot {
    const DEFAULT_SORT: SortKey = SortKey::DateDescending;

    fn sort_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}
