//! Path management for the budget tracker
//!
//! All ledger files live in a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory passed by the caller (`--data-dir`)
//! 2. `STUDENT_BUDGET_DATA_DIR` environment variable (if set)
//! 3. `./budget_data` relative to the working directory

use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "STUDENT_BUDGET_DATA_DIR";

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "budget_data";

/// Manages all paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Directory holding the ledger CSV files and settings
    data_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve paths from the environment, falling back to `./budget_data`
    pub fn new() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self { data_dir }
    }

    /// Resolve paths, preferring an explicit directory over the environment
    pub fn resolve(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(dir) => Self::with_data_dir(dir.to_path_buf()),
            None => Self::new(),
        }
    }

    /// Create BudgetPaths with a custom data directory (useful for testing)
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    /// Get the path to expenses.csv
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir.join("expenses.csv")
    }

    /// Get the path to income.csv
    pub fn income_file(&self) -> PathBuf {
        self.data_dir.join("income.csv")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if the tracker has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

impl Default for BudgetPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_data_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.data_dir(), temp_dir.path());
        assert_eq!(paths.expenses_file(), temp_dir.path().join("expenses.csv"));
        assert_eq!(paths.income_file(), temp_dir.path().join("income.csv"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::resolve(Some(temp_dir.path()));
        assert_eq!(paths.data_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("budget_data");
        let paths = BudgetPaths::with_data_dir(nested.clone());

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
