use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorises ledger entries for search and reporting.
///
/// The set is fixed and mixes income-flavoured and expense-flavoured labels
/// on purpose: a category never constrains which amount field of an entry is
/// nonzero, and no kind mapping is maintained.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Salary,
    Investments,
    Freelance,
    Food,
    Transport,
    Utilities,
    Entertainment,
    Healthcare,
    Other,
}

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Category; 9] = [
        Category::Salary,
        Category::Investments,
        Category::Freelance,
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Investments => "Investments",
            Category::Freelance => "Freelance",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Other => "Other",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn parse(name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Category::parse("salary"), Some(Category::Salary));
        assert_eq!(Category::parse(" HEALTHCARE "), Some(Category::Healthcare));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Category::parse("Groceries"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn every_category_round_trips_through_its_name() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.name()), Some(category));
        }
    }
}
