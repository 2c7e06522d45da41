use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::Entry;

/// Append-only store of ledger entries.
///
/// Entries are kept in insertion order; the order carries no display
/// meaning (views sort by entry date) but it is preserved so that stable
/// sorts downstream have a deterministic base. There is no removal or
/// update operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    entries: Vec<Entry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a validated entry to the end of the sequence.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.touch();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::category::Category;
    use chrono::NaiveDate;

    fn entry(day: u32) -> Entry {
        Entry::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            100.0,
            40.0,
            Category::Other,
            format!("entry {day}"),
        )
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut ledger = Ledger::new("Household");
        ledger.append(entry(9));
        ledger.append(entry(2));
        ledger.append(entry(5));

        let days: Vec<u32> = ledger
            .entries()
            .iter()
            .map(|e| e.description.trim_start_matches("entry ").parse().unwrap())
            .collect();
        assert_eq!(days, vec![9, 2, 5]);
        assert_eq!(ledger.entry_count(), 3);
    }

    #[test]
    fn new_ledger_starts_empty() {
        let ledger = Ledger::new("Empty");
        assert!(ledger.is_empty());
        assert_eq!(ledger.entries(), &[]);
    }

    #[test]
    fn append_touches_updated_at() {
        let mut ledger = Ledger::new("Touched");
        let created = ledger.updated_at;
        ledger.append(entry(1));
        assert!(ledger.updated_at >= created);
    }
}
