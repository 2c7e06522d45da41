use chrono::NaiveDate;
use finance_core::{
    core::FinanceTracker,
    ledger::{Category, Entry, EntryDraft},
    query::{DateRange, TypeFilter},
};

fn date(text: &str) -> NaiveDate {
    text.parse().expect("test date")
}

fn prepared_tracker() -> FinanceTracker {
    let mut tracker = FinanceTracker::new("Daily Finance");
    tracker.append(Entry::new(
        date("2024-01-01"),
        1000.0,
        200.0,
        Category::Salary,
        "January salary",
    ));
    tracker.append(Entry::new(
        date("2024-01-03"),
        0.0,
        50.0,
        Category::Food,
        "groceries",
    ));
    tracker
}

#[test]
fn unfiltered_pipeline_matches_worked_example() {
    let tracker = prepared_tracker();

    let view = tracker.filtered_view();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].category, Category::Salary);
    assert_eq!(view[1].category, Category::Food);

    let stats = tracker.statistics();
    assert_eq!(stats.total_income, 1000.0);
    assert_eq!(stats.total_expense, 250.0);
    assert_eq!(stats.net_balance, 750.0);
    assert_eq!(stats.average_income, 500.0);
    assert_eq!(stats.average_expense, 125.0);
    assert_eq!(stats.category_total(Category::Salary), Some(200.0));
    assert_eq!(stats.category_total(Category::Food), Some(50.0));
}

#[test]
fn start_bound_restricts_view_and_statistics() {
    let mut tracker = prepared_tracker();
    tracker.set_date_range(DateRange::new(Some(date("2024-01-02")), None));

    let view = tracker.filtered_view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].category, Category::Food);

    let stats = tracker.statistics();
    assert_eq!(stats.total_income, 0.0);
    assert_eq!(stats.total_expense, 50.0);
    assert_eq!(stats.net_balance, -50.0);
    assert_eq!(stats.average_expense, 50.0);
    assert_eq!(stats.category_total(Category::Salary), None);
}

#[test]
fn empty_view_produces_zero_statistics() {
    let mut tracker = prepared_tracker();
    tracker.set_search_term("no such entry");

    assert!(tracker.filtered_view().is_empty());
    let stats = tracker.statistics();
    assert_eq!(stats.net_balance, 0.0);
    assert_eq!(stats.average_income, 0.0);
    assert_eq!(stats.average_expense, 0.0);
    assert!(stats.category_totals.is_empty());
    assert!(tracker.distribution().is_empty());
}

#[test]
fn mixed_entry_is_visible_through_both_type_filters() {
    let mut tracker = FinanceTracker::new("Mixed");
    tracker.append(Entry::new(
        date("2024-03-01"),
        100.0,
        50.0,
        Category::Other,
        "sale and fee",
    ));

    tracker.set_type_filter(TypeFilter::Income);
    assert_eq!(tracker.filtered_view().len(), 1);

    tracker.set_type_filter(TypeFilter::Expense);
    assert_eq!(tracker.filtered_view().len(), 1);
}

#[test]
fn form_input_flows_through_the_whole_pipeline() {
    let mut tracker = FinanceTracker::new("Form");
    tracker
        .submit(EntryDraft {
            date: "2024-05-20".into(),
            income: "0".into(),
            expense: "42.50".into(),
            category: "transport".into(),
            description: "train to the coast".into(),
        })
        .expect("valid draft");

    tracker.set_search_term("coast");
    let stats = tracker.statistics();
    assert_eq!(stats.total_expense, 42.5);
    assert_eq!(stats.category_total(Category::Transport), Some(42.5));

    let points = tracker.overview();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].balance, -42.5);
}

#[test]
fn distribution_serializes_to_chart_shape() {
    let tracker = prepared_tracker();
    let slices = tracker.distribution();

    let json = serde_json::to_value(&slices).expect("serializable slices");
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "Salary", "value": 200.0 },
            { "name": "Food", "value": 50.0 },
        ])
    );
}
