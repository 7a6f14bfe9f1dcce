//! Student Budget - a personal budget tracker for students
//!
//! This library provides the core functionality for the `budget` command.
//! Expenses and income are kept in two append-only CSV ledgers; every
//! summary shown to the user is recomputed from those ledgers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Ledger rows, money amounts and dates
//! - `storage`: CSV persistence and the `Ledger` session object
//! - `services`: Recording entries and bulk CSV import
//! - `reports`: The summary projection (totals and category breakdown)
//! - `display`: Terminal formatting for lists and reports
//! - `cli`: Command handlers for the `budget` binary
//! - `tui`: Read-only terminal dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use student_budget::config::paths::BudgetPaths;
//! use student_budget::reports::LedgerSummary;
//! use student_budget::storage::Ledger;
//!
//! let ledger = Ledger::open(BudgetPaths::new())?;
//! let summary = LedgerSummary::from_ledger(&ledger);
//! println!("Net savings: {}", summary.net_savings);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
