use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

use super::category::Category;

/// One recorded financial transaction.
///
/// Entries are immutable once created: `balance` is fixed to
/// `income - expense` at construction and the store never edits or removes
/// an entry afterwards. `timestamp` records when the entry was captured and
/// is provenance only; display ordering always uses `date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub category: Category,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    /// Builds an entry from already-validated parts.
    ///
    /// Callers are expected to have run amounts through
    /// [`EntryDraft::build`] or equivalent validation; `income` and
    /// `expense` must be non-negative.
    pub fn new(
        date: NaiveDate,
        income: f64,
        expense: f64,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            income,
            expense,
            balance: income - expense,
            category,
            description: description.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Raw form input for a new entry, as captured by the presentation layer.
///
/// [`build`](EntryDraft::build) is the validation gate between free text and
/// the always-valid [`Entry`]: it is the only place date and amount text is
/// parsed, so malformed input never reaches the query or stats stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: String,
    pub income: String,
    pub expense: String,
    pub category: String,
    pub description: String,
}

impl EntryDraft {
    pub fn build(self) -> Result<Entry, TrackerError> {
        let date_text = require("date", &self.date)?;
        let income_text = require("income", &self.income)?;
        let expense_text = require("expense", &self.expense)?;
        let category_text = require("category", &self.category)?;
        let description = require("description", &self.description)?;

        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
            .map_err(|_| TrackerError::InvalidDate(date_text.to_string()))?;
        let income = parse_amount("income", income_text)?;
        let expense = parse_amount("expense", expense_text)?;
        let category = Category::parse(category_text)
            .ok_or_else(|| TrackerError::UnknownCategory(category_text.to_string()))?;

        Ok(Entry::new(date, income, expense, category, description))
    }
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, TrackerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::MissingField(field));
    }
    Ok(trimmed)
}

fn parse_amount(field: &'static str, text: &str) -> Result<f64, TrackerError> {
    let value: f64 = text.parse().map_err(|_| TrackerError::InvalidAmount {
        field,
        value: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(TrackerError::InvalidAmount {
            field,
            value: text.to_string(),
        });
    }
    if value < 0.0 {
        return Err(TrackerError::NegativeAmount { field, value });
    }
    Ok(value)
}
