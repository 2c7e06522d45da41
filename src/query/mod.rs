//! Query engine: turns the raw entry sequence into a filtered, date-sorted
//! view.
//!
//! Filtering is a conjunction of three independent predicates (text search,
//! date range, entry type); [`filter`] is pure and idempotent, so the
//! presentation layer may re-run it on every keystroke.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ledger::Entry;

/// Inclusive date range where either bound may be open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Both bounds are applied independently; an inverted range (`start`
    /// after `end`) is therefore legal and matches nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let after_start = self.start.map_or(true, |start| date >= start);
        let before_end = self.end.map_or(true, |end| date <= end);
        after_start && before_end
    }
}

/// Selects entries by which amount field carries money.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    /// An entry carrying both income and expense passes both the `Income`
    /// and `Expense` filters; the variants are not mutually exclusive.
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => entry.income > 0.0,
            TypeFilter::Expense => entry.expense > 0.0,
        }
    }
}

/// The complete filter state supplied by the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub date_range: DateRange,
    pub type_filter: TypeFilter,
}

impl FilterCriteria {
    pub fn matches(&self, entry: &Entry) -> bool {
        self.search_matches(entry)
            && self.date_range.contains(entry.date)
            && self.type_filter.matches(entry)
    }

    /// Case-insensitive substring match against the description or the
    /// category name. An empty term matches everything.
    fn search_matches(&self, entry: &Entry) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        entry.description.to_lowercase().contains(&term)
            || entry.category.name().to_lowercase().contains(&term)
    }
}

/// Applies `criteria` to `entries` and returns the matches sorted ascending
/// by date.
///
/// The sort is stable, so entries sharing a date keep their store order —
/// the store has no secondary key to break ties with.
pub fn filter(entries: &[Entry], criteria: &FilterCriteria) -> Vec<Entry> {
    let mut view: Vec<Entry> = entries
        .iter()
        .filter(|entry| criteria.matches(entry))
        .cloned()
        .collect();
    view.sort_by_key(|entry| entry.date);
    view
}
