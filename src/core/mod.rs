//! Application-facing facade over the ledger pipeline.

pub mod tracker;

pub use tracker::FinanceTracker;
