//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod income;
pub mod summary;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use summary::{handle_summary_command, SummaryArgs};

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{parse_date, Money};

/// Parse an amount argument
pub(crate) fn parse_amount(raw: &str) -> BudgetResult<Money> {
    Money::parse(raw).map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))
}

/// Parse a date argument; unlike ledger files, a bad date here is an error
pub(crate) fn parse_date_arg(raw: &str) -> BudgetResult<NaiveDate> {
    parse_date(raw).ok_or_else(|| {
        BudgetError::Validation(format!("Invalid date '{}': use YYYY-MM-DD", raw.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("120.50").unwrap(), Money::from_cents(12050));
        assert!(parse_amount("lots").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2025-08-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
        );
        assert!(parse_date_arg("tomorrow").unwrap_err().is_validation());
    }
}
