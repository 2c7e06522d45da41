//! Ledger domain models and the append-only entry store.

pub mod category;
pub mod entry;
pub mod store;

pub use category::Category;
pub use entry::{Entry, EntryDraft};
pub use store::Ledger;
