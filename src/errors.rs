use thiserror::Error;

/// Error type that captures entry construction failures.
///
/// Filtering and aggregation are total functions; the only fallible surface
/// in the crate is turning raw form input into a validated
/// [`Entry`](crate::ledger::Entry).
#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid amount {value:?} for {field}")]
    InvalidAmount { field: &'static str, value: String },
    #[error("negative amount {value} for {field}")]
    NegativeAmount { field: &'static str, value: f64 },
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}
