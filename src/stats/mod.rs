//! Aggregator: reduces a filtered view into summary statistics and
//! chart-ready projections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ledger::{Category, Entry};

/// Summary statistics derived from one filtered view.
///
/// Fully recomputed from scratch on every call to [`aggregate`]; there is no
/// incremental update path. `Default` is the all-zero value returned for an
/// empty view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Statistics {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_balance: f64,
    pub average_income: f64,
    pub average_expense: f64,
    pub category_totals: Vec<CategoryTotal>,
}

/// Expense attributed to one category.
///
/// Only expense amounts are attributed, never income, so income-flavoured
/// categories show a zero total unless an entry also carries an expense.
/// Totals are kept in first-seen order of the aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

impl Statistics {
    /// Looks up the summed expense for a category, if any entry in the view
    /// referenced it.
    pub fn category_total(&self, category: Category) -> Option<f64> {
        self.category_totals
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.total)
    }

    /// Projects the category totals into pie-chart slices, one per
    /// referenced category, in first-seen order.
    pub fn distribution(&self) -> Vec<ChartSlice> {
        self.category_totals
            .iter()
            .map(|entry| ChartSlice {
                name: entry.category.name().to_string(),
                value: entry.total,
            })
            .collect()
    }
}

/// One slice of the category-distribution chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
}

/// One point of the income/expense/balance overview line chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverviewPoint {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Computes summary statistics over a filtered view in a single pass.
///
/// The empty view is an explicit early return of all-zero statistics; no
/// division happens on that path.
pub fn aggregate(filtered: &[Entry]) -> Statistics {
    if filtered.is_empty() {
        return Statistics::default();
    }

    let mut stats = Statistics::default();
    for entry in filtered {
        stats.total_income += entry.income;
        stats.total_expense += entry.expense;
        match stats
            .category_totals
            .iter_mut()
            .find(|total| total.category == entry.category)
        {
            Some(total) => total.total += entry.expense,
            None => stats.category_totals.push(CategoryTotal {
                category: entry.category,
                total: entry.expense,
            }),
        }
    }

    let count = filtered.len() as f64;
    stats.net_balance = stats.total_income - stats.total_expense;
    stats.average_income = stats.total_income / count;
    stats.average_expense = stats.total_expense / count;
    stats
}

/// Projects a filtered view into the overview line-chart series.
pub fn overview(filtered: &[Entry]) -> Vec<OverviewPoint> {
    filtered
        .iter()
        .map(|entry| OverviewPoint {
            date: entry.date,
            income: entry.income,
            expense: entry.expense,
            balance: entry.balance,
        })
        .collect()
}
