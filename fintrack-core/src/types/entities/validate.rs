//! Field-level validation shared by the entity transforms.
//!
//! Every check records its message and returns a placeholder, so a transform can
//! collect all problems in one pass and fail once in [`FormValidator::finish`].

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::utils::date::parse_iso_day;
use crate::utils::money::parse_cents;

#[derive(Debug, Default)]
pub(crate) struct FormValidator {
    errors: Vec<String>,
}

fn blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, message: String) {
        self.errors.push(message);
    }

    /// Optional entity id; blank means "new item".
    pub fn id(&mut self, value: Option<&str>) -> Option<i64> {
        let raw = blank(value)?;
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                self.fail(format!("Invalid id: {raw}"));
                None
            }
        }
    }

    /// Required id of another record
    pub fn reference(&mut self, label: &str, value: Option<&str>) -> i64 {
        let Some(raw) = blank(value) else {
            self.fail(format!("{label} is required"));
            return 0;
        };
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => id,
            _ => {
                self.fail(format!("{label} must be a valid id"));
                0
            }
        }
    }

    pub fn text(&mut self, label: &str, value: Option<&str>) -> String {
        if let Some(v) = blank(value) {
            v.to_string()
        } else {
            self.fail(format!("{label} is required"));
            String::new()
        }
    }

    pub fn optional_text(value: Option<&str>) -> Option<String> {
        blank(value).map(str::to_string)
    }

    /// Required amount in cents, any sign
    pub fn cents(&mut self, label: &str, value: Option<&str>) -> i64 {
        let Some(raw) = blank(value) else {
            self.fail(format!("{label} is required"));
            return 0;
        };
        parse_cents(raw).unwrap_or_else(|| {
            self.fail(format!("{label} must be a valid amount"));
            0
        })
    }

    /// Required amount in cents, strictly positive
    pub fn positive_cents(&mut self, label: &str, value: Option<&str>) -> i64 {
        let before = self.errors.len();
        let cents = self.cents(label, value);
        if self.errors.len() == before && cents <= 0 {
            self.fail(format!("{label} must be greater than zero"));
        }
        cents
    }

    pub fn optional_percent(&mut self, label: &str, value: Option<&str>) -> Option<f64> {
        let raw = blank(value)?;
        match raw.parse::<f64>() {
            Ok(p) if (-100.0..=100.0).contains(&p) => Some(p),
            Ok(_) => {
                self.fail(format!("{label} must be between -100 and 100"));
                None
            }
            Err(_) => {
                self.fail(format!("{label} must be a number"));
                None
            }
        }
    }

    pub fn date(&mut self, label: &str, value: Option<&str>) -> NaiveDate {
        let Some(raw) = blank(value) else {
            self.fail(format!("{label} is required"));
            return NaiveDate::default();
        };
        parse_iso_day(raw).unwrap_or_else(|| {
            self.fail(format!("{label} must be in YYYY-MM-DD format"));
            NaiveDate::default()
        })
    }

    /// Required value parsed with `FromStr`
    pub fn parse<T: std::str::FromStr + Default>(
        &mut self,
        label: &str,
        value: Option<&str>,
    ) -> T {
        let Some(raw) = blank(value) else {
            self.fail(format!("{label} is required"));
            return T::default();
        };
        raw.parse().unwrap_or_else(|_| {
            self.fail(format!("{label} is invalid: {raw}"));
            T::default()
        })
    }

    /// Return `item` when no check failed.
    pub fn finish<T>(self, item: T) -> CoreResult<T> {
        if self.errors.is_empty() {
            Ok(item)
        } else {
            Err(CoreError::Validation(self.errors))
        }
    }
}
