//! Core data models for the budget tracker
//!
//! This module contains the data structures that represent the ledger:
//! expense and income rows, money amounts and date handling.

pub mod date;
pub mod expense;
pub mod income;
pub mod money;
pub mod record;

pub use date::{format_date, parse_date, DATE_FORMAT};
pub use expense::{ExpenseCategory, ExpenseRecord, PaymentMethod};
pub use income::{IncomeKind, IncomeRecord};
pub use money::{Money, MoneyParseError};
pub use record::{HeaderIndex, LedgerRecord, RawRow};
