//! Expense service
//!
//! Records single expense entries and answers simple queries over the
//! expense table.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::error::BudgetResult;
use crate::models::{ExpenseCategory, ExpenseRecord, Money, PaymentMethod};
use crate::storage::Ledger;

/// A single expense as entered by the user
#[derive(Debug, Clone)]
pub struct ExpenseEntry {
    /// Date of the expense; today when not given
    pub date: Option<NaiveDate>,
    pub category: ExpenseCategory,
    pub description: String,
    /// Amount spent, entered as a magnitude
    pub amount: Money,
    pub payment_method: PaymentMethod,
}

impl ExpenseEntry {
    pub fn new(category: ExpenseCategory, amount: Money) -> Self {
        Self {
            date: None,
            category,
            description: String::new(),
            amount,
            payment_method: PaymentMethod::default(),
        }
    }
}

/// Service for expense entries
pub struct ExpenseService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ExpenseService<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Record one expense and persist the expense file
    pub fn add(&mut self, entry: ExpenseEntry) -> BudgetResult<ExpenseRecord> {
        let date = entry.date.unwrap_or_else(|| Local::now().date_naive());
        let record = ExpenseRecord::new(
            date,
            entry.category,
            entry.description.trim(),
            entry.amount,
            entry.payment_method,
        );

        self.ledger.add_expenses(vec![record.clone()])?;
        info!(category = %entry.category, amount = %record.spent(), "added expense");
        Ok(record)
    }
}

/// Select expenses, optionally by category, keeping only the most recent `limit` rows
pub fn filter_expenses<'l>(
    ledger: &'l Ledger,
    category: Option<ExpenseCategory>,
    limit: Option<usize>,
) -> Vec<&'l ExpenseRecord> {
    let matching: Vec<_> = ledger
        .expenses()
        .iter()
        .filter(|e| category.map_or(true, |c| e.category.eq_ignore_ascii_case(c.name())))
        .collect();
    keep_last(matching, limit)
}

pub(crate) fn keep_last<T>(mut rows: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        if rows.len() > limit {
            rows.drain(..rows.len() - limit);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use tempfile::TempDir;

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_data_dir(temp_dir.path().to_path_buf());
        (temp_dir, Ledger::open(paths).unwrap())
    }

    #[test]
    fn test_add_expense() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let mut entry = ExpenseEntry::new(ExpenseCategory::Groceries, Money::from_units(320));
        entry.date = NaiveDate::from_ymd_opt(2025, 4, 2);
        entry.description = "  Vegetables ".to_string();
        entry.payment_method = PaymentMethod::Cash;

        let record = ExpenseService::new(&mut ledger).add(entry).unwrap();

        assert_eq!(record.amount, Money::from_units(-320));
        assert_eq!(record.description, "Vegetables");
        assert_eq!(ledger.expenses().rows(), &[record]);
        let saved = std::fs::read_to_string(ledger.paths().expenses_file()).unwrap();
        assert!(saved.contains("2025-04-02,Groceries,Vegetables,-320.00,Cash"));
    }

    #[test]
    fn test_add_defaults_to_today() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let entry = ExpenseEntry::new(ExpenseCategory::Other, Money::from_units(5));

        let record = ExpenseService::new(&mut ledger).add(entry).unwrap();
        assert_eq!(record.date, Some(Local::now().date_naive()));
        assert_eq!(record.payment_method, "UPI");
    }

    #[test]
    fn test_filter_expenses() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        {
            let mut service = ExpenseService::new(&mut ledger);
            for (category, units) in [
                (ExpenseCategory::Food, 10),
                (ExpenseCategory::Transport, 20),
                (ExpenseCategory::Food, 30),
                (ExpenseCategory::Food, 40),
            ] {
                service.add(ExpenseEntry::new(category, Money::from_units(units))).unwrap();
            }
        }

        let food = filter_expenses(&ledger, Some(ExpenseCategory::Food), None);
        assert_eq!(food.len(), 3);

        let recent = filter_expenses(&ledger, Some(ExpenseCategory::Food), Some(2));
        let spent: Vec<i64> = recent.iter().map(|e| e.spent().units()).collect();
        assert_eq!(spent, vec![30, 40]);

        assert_eq!(filter_expenses(&ledger, None, Some(10)).len(), 4);
    }
}
