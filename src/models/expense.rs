//! Expense model
//!
//! Expenses are stored with a negative amount: the entered magnitude is
//! always negated, so summing a ledger gives the net balance directly.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::date::{format_date, parse_date};
use super::money::Money;
use super::record::{LedgerRecord, RawRow};
use crate::error::BudgetError;

/// Spending categories offered when recording an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Groceries,
    Entertainment,
    Education,
    Health,
    Shopping,
    Bills,
    Essentials,
    Other,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub const ALL: [ExpenseCategory; 10] = [
        Self::Food,
        Self::Transport,
        Self::Groceries,
        Self::Entertainment,
        Self::Education,
        Self::Health,
        Self::Shopping,
        Self::Bills,
        Self::Essentials,
        Self::Other,
    ];

    /// Display name, as stored in the ledger
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Groceries => "Groceries",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Health => "Health",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Essentials => "Essentials",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|c| c.name()).collect();
                BudgetError::Validation(format!(
                    "Unknown category '{}' (expected one of: {})",
                    wanted,
                    names.join(", ")
                ))
            })
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaymentMethod {
    #[default]
    Upi,
    Cash,
    Card,
    Bank,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [Self::Upi, Self::Cash, Self::Card, Self::Bank];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::Bank => "Bank",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PaymentMethod {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                BudgetError::Validation(format!(
                    "Unknown payment method '{}' (expected UPI, Cash, Card or Bank)",
                    wanted
                ))
            })
    }
}

/// A single expense row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    /// When the money was spent (`None` if the source date was unreadable)
    pub date: Option<NaiveDate>,
    /// Category name
    pub category: String,
    /// Free-text description
    pub description: String,
    /// Amount, negative for money spent
    pub amount: Money,
    /// Payment method name
    pub payment_method: String,
}

impl ExpenseRecord {
    /// Create an expense from an entered magnitude
    ///
    /// The stored amount is always `-abs(magnitude)`.
    pub fn new(
        date: NaiveDate,
        category: ExpenseCategory,
        description: impl Into<String>,
        magnitude: Money,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            date: Some(date),
            category: category.name().to_string(),
            description: description.into(),
            amount: -magnitude.abs(),
            payment_method: payment_method.name().to_string(),
        }
    }

    /// The amount spent, as a non-negative value
    pub fn spent(&self) -> Money {
        -self.amount
    }
}

impl LedgerRecord for ExpenseRecord {
    const COLUMNS: &'static [&'static str] =
        &["date", "category", "description", "amount", "payment_method"];

    fn from_raw(row: &RawRow<'_>) -> Self {
        Self {
            date: parse_date(row.get("date")),
            category: row.get("category").to_string(),
            description: row.get("description").to_string(),
            amount: Money::parse(row.get("amount")).unwrap_or_default(),
            payment_method: row.get("payment_method").to_string(),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            format_date(self.date),
            self.category.clone(),
            self.description.clone(),
            self.amount.to_string(),
            self.payment_method.clone(),
        ]
    }
}
