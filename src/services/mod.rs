//! Service layer
//!
//! Business logic between the presentation layer and the ledger: building
//! records from user input, importing files, and selecting rows for display.

pub mod expense;
pub mod import;
pub mod income;

pub use expense::{filter_expenses, ExpenseEntry, ExpenseService};
pub use import::{read_import_file, stamp_expenses, stamp_income, ImportFormat, ImportService};
pub use income::{filter_income, IncomeEntry, IncomeService};
