use crate::errors::TrackerError;
use crate::ledger::{Entry, EntryDraft, Ledger};
use crate::query::{self, DateRange, FilterCriteria, TypeFilter};
use crate::stats::{self, ChartSlice, OverviewPoint, Statistics};

/// Facade that owns the ledger and the active filter.
///
/// This is the single root controller of application state: the
/// presentation layer mutates it on user input and re-reads the derived
/// accessors afterwards. Every derived accessor recomputes from scratch and
/// is side-effect-free, so calling one repeatedly never changes behaviour.
pub struct FinanceTracker {
    ledger: Ledger,
    criteria: FilterCriteria,
}

impl FinanceTracker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ledger: Ledger::new(name),
            criteria: FilterCriteria::default(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Validates raw form input and appends the resulting entry.
    pub fn submit(&mut self, draft: EntryDraft) -> Result<(), TrackerError> {
        let entry = draft.build()?;
        tracing::debug!(
            date = %entry.date,
            category = %entry.category,
            balance = entry.balance,
            "entry appended"
        );
        self.ledger.append(entry);
        Ok(())
    }

    /// Appends an entry that was validated elsewhere.
    pub fn append(&mut self, entry: Entry) {
        self.ledger.append(entry);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.criteria.type_filter = type_filter;
    }

    pub fn set_date_range(&mut self, date_range: DateRange) {
        self.criteria.date_range = date_range;
    }

    /// The entries passing the active filter, sorted ascending by date.
    pub fn filtered_view(&self) -> Vec<Entry> {
        query::filter(self.ledger.entries(), &self.criteria)
    }

    /// Summary statistics over the current filtered view.
    pub fn statistics(&self) -> Statistics {
        stats::aggregate(&self.filtered_view())
    }

    /// Category-distribution slices over the current filtered view.
    pub fn distribution(&self) -> Vec<ChartSlice> {
        self.statistics().distribution()
    }

    /// Income/expense/balance series over the current filtered view.
    pub fn overview(&self) -> Vec<OverviewPoint> {
        stats::overview(&self.filtered_view())
    }
}
