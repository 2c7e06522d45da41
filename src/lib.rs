#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the ledger, filtering, and aggregation primitives
//! behind a personal income/expense tracker.
//!
//! The crate is organised as a three-stage pipeline: an append-only
//! [`ledger::Ledger`] of entries, a [`query`] engine deriving a date-sorted
//! filtered view, and a [`stats`] aggregator reducing that view into summary
//! statistics and chart-ready projections. Every stage is a pure function of
//! its inputs, so callers may re-run the pipeline on each change without
//! side effects. [`core::FinanceTracker`] ties the stages together behind a
//! single facade.

pub mod core;
pub mod errors;
pub mod ledger;
pub mod query;
pub mod stats;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
