//! Application state for the dashboard
//!
//! The app owns the ledger for the session and re-projects the summary
//! whenever the ledger is reloaded.

use crate::config::paths::BudgetPaths;
use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::reports::LedgerSummary;
use crate::storage::Ledger;

/// Dashboard state
pub struct App<'a> {
    /// The ledger being displayed
    pub ledger: Ledger,

    /// Application settings
    pub settings: &'a Settings,

    /// Current projection of the ledger
    pub summary: LedgerSummary,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message shown in the status bar
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create the app state from an opened ledger
    pub fn new(ledger: Ledger, settings: &'a Settings) -> Self {
        let summary = LedgerSummary::from_ledger(&ledger);
        let status_message = degraded_notice(&ledger);
        Self {
            ledger,
            settings,
            summary,
            should_quit: false,
            status_message,
        }
    }

    /// Paths of the ledger being displayed
    pub fn paths(&self) -> &BudgetPaths {
        self.ledger.paths()
    }

    /// Re-read both ledger files and recompute the summary
    pub fn reload(&mut self) -> BudgetResult<()> {
        self.ledger = Ledger::open(self.ledger.paths().clone())?;
        self.summary = LedgerSummary::from_ledger(&self.ledger);
        self.status_message = degraded_notice(&self.ledger).or_else(|| {
            Some(format!(
                "Reloaded {} expenses, {} income entries",
                self.ledger.expenses().len(),
                self.ledger.income().len()
            ))
        });
        Ok(())
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

fn degraded_notice(ledger: &Ledger) -> Option<String> {
    let files: Vec<String> = ledger
        .degraded_files()
        .iter()
        .filter_map(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    if files.is_empty() {
        None
    } else {
        Some(format!("Could not read {}; showing it as empty", files.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeKind, IncomeRecord, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_reload_picks_up_new_rows() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_data_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(Ledger::open(paths.clone()).unwrap(), &settings);
        assert_eq!(app.summary.total_income, Money::zero());
        assert!(app.status_message.is_none());

        // Another process appends income
        let mut other = Ledger::open(paths).unwrap();
        other
            .add_income(vec![IncomeRecord::new(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                IncomeKind::Income,
                "Stipend",
                Money::from_units(900),
            )])
            .unwrap();

        app.reload().unwrap();
        assert_eq!(app.summary.total_income, Money::from_units(900));
        assert!(app.status_message.as_deref().unwrap().contains("1 income"));
    }

    #[test]
    fn test_degraded_notice() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("expenses.csv"), "a,b\n1,2,3\n").unwrap();
        let paths = BudgetPaths::with_data_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let app = App::new(Ledger::open(paths).unwrap(), &settings);
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .contains("expenses.csv"));
    }
}
