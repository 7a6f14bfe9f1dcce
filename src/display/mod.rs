//! Display formatting for terminal output

pub mod ledger;
pub mod report;

pub use ledger::{format_expense_table, format_income_table};
pub use report::{format_bar, format_percentage, separator, truncate};
