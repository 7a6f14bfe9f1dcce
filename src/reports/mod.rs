//! Reports module
//!
//! Read-only projections computed from the ledger.

pub mod summary;

pub use summary::{category_breakdown, CategoryTotal, LedgerSummary};
