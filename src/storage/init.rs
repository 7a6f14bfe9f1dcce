//! Storage initialization
//!
//! Handles first-run setup: the data directory plus header-only ledger files.

use std::path::{Path, PathBuf};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{ExpenseRecord, IncomeRecord, LedgerRecord};

use super::file_io::save_table;
use super::table::Table;

/// Initialize storage for a fresh data directory
///
/// Existing ledger files are left untouched. Returns the files that were created.
pub fn initialize_storage(paths: &BudgetPaths) -> Result<Vec<PathBuf>, BudgetError> {
    paths.ensure_directories()?;

    let mut created = Vec::new();
    if create_if_missing::<ExpenseRecord>(&paths.expenses_file())? {
        created.push(paths.expenses_file());
    }
    if create_if_missing::<IncomeRecord>(&paths.income_file())? {
        created.push(paths.income_file());
    }
    Ok(created)
}

fn create_if_missing<R: LedgerRecord>(path: &Path) -> Result<bool, BudgetError> {
    if path.exists() {
        return Ok(false);
    }
    save_table(&Table::<R>::new(), path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::load_table;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_header_only_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_data_dir(temp_dir.path().join("data"));

        let created = initialize_storage(&paths).unwrap();
        assert_eq!(created.len(), 2);

        let expenses = fs::read_to_string(paths.expenses_file()).unwrap();
        assert_eq!(expenses.trim_end(), "date,category,description,amount,payment_method");
        let income = fs::read_to_string(paths.income_file()).unwrap();
        assert_eq!(income.trim_end(), "date,type,source,amount");
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_data_dir(temp_dir.path().to_path_buf());
        fs::write(
            paths.income_file(),
            "date,type,source,amount\n2025-01-01,Income,Stipend,700\n",
        )
        .unwrap();

        let created = initialize_storage(&paths).unwrap();
        assert_eq!(created, vec![paths.expenses_file()]);

        let (income, _): (Table<IncomeRecord>, _) = load_table(paths.income_file());
        assert_eq!(income.len(), 1);
    }
}
