//! Storage layer for the budget tracker
//!
//! Provides CSV file storage for the two ledger datasets and the `Ledger`
//! session object that owns them for the life of the process.

pub mod file_io;
pub mod init;
pub mod table;

pub use file_io::{load_table, save_table, RawTable};
pub use table::Table;

use std::path::PathBuf;

use tracing::info;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{ExpenseRecord, IncomeRecord, LedgerRecord};

/// Application state: the expense and income tables plus where they live
///
/// Every mutation appends to an in-memory table and immediately rewrites the
/// corresponding file. If the write fails the in-memory table is left as it
/// was before the call.
#[derive(Debug)]
pub struct Ledger {
    paths: BudgetPaths,
    expenses: Table<ExpenseRecord>,
    income: Table<IncomeRecord>,
    degraded: Vec<PathBuf>,
}

impl Ledger {
    /// Open the ledger, loading both files from the data directory
    pub fn open(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        let mut degraded = Vec::new();
        let expenses = load_or_degrade(paths.expenses_file(), &mut degraded);
        let income = load_or_degrade(paths.income_file(), &mut degraded);

        Ok(Self {
            paths,
            expenses,
            income,
            degraded,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Current expense table
    pub fn expenses(&self) -> &Table<ExpenseRecord> {
        &self.expenses
    }

    /// Current income table
    pub fn income(&self) -> &Table<IncomeRecord> {
        &self.income
    }

    /// Files that existed but could not be parsed, and were loaded as empty
    pub fn degraded_files(&self) -> &[PathBuf] {
        &self.degraded
    }

    /// Append expense rows and persist the expense file
    ///
    /// Returns the number of rows added.
    pub fn add_expenses(&mut self, rows: Vec<ExpenseRecord>) -> Result<usize, BudgetError> {
        let count = rows.len();
        let next = self.expenses.append(rows);
        save_table(&next, self.paths.expenses_file())?;
        self.expenses = next;
        info!(added = count, total = self.expenses.len(), "expenses recorded");
        Ok(count)
    }

    /// Append income rows and persist the income file
    ///
    /// Returns the number of rows added.
    pub fn add_income(&mut self, rows: Vec<IncomeRecord>) -> Result<usize, BudgetError> {
        let count = rows.len();
        let next = self.income.append(rows);
        save_table(&next, self.paths.income_file())?;
        self.income = next;
        info!(added = count, total = self.income.len(), "income recorded");
        Ok(count)
    }
}

fn load_or_degrade<R: LedgerRecord>(path: PathBuf, degraded: &mut Vec<PathBuf>) -> Table<R> {
    let (table, unreadable) = load_table(&path);
    if unreadable {
        degraded.push(path);
    }
    table
}
