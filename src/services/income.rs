//! Income service
//!
//! Records income and pocket money entries.

use chrono::{Local, NaiveDate};
use tracing::info;

use super::expense::keep_last;
use crate::error::BudgetResult;
use crate::models::{IncomeKind, IncomeRecord, Money};
use crate::storage::Ledger;

/// A single income entry as entered by the user
#[derive(Debug, Clone)]
pub struct IncomeEntry {
    /// Date received; today when not given
    pub date: Option<NaiveDate>,
    pub kind: IncomeKind,
    /// Who paid; the kind's default source when not given
    pub source: Option<String>,
    pub amount: Money,
}

impl IncomeEntry {
    pub fn new(kind: IncomeKind, amount: Money) -> Self {
        Self {
            date: None,
            kind,
            source: None,
            amount,
        }
    }
}

/// Service for income entries
pub struct IncomeService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> IncomeService<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Record one income entry and persist the income file
    pub fn add(&mut self, entry: IncomeEntry) -> BudgetResult<IncomeRecord> {
        let date = entry.date.unwrap_or_else(|| Local::now().date_naive());
        let source = entry
            .source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(entry.kind.default_source());

        let record = IncomeRecord::new(date, entry.kind, source, entry.amount);
        self.ledger.add_income(vec![record.clone()])?;
        info!(kind = %entry.kind, amount = %record.amount, "added income");
        Ok(record)
    }
}

/// Select income rows, optionally by type, keeping only the most recent `limit` rows
pub fn filter_income<'l>(
    ledger: &'l Ledger,
    kind: Option<IncomeKind>,
    limit: Option<usize>,
) -> Vec<&'l IncomeRecord> {
    let matching: Vec<_> = ledger
        .income()
        .iter()
        .filter(|r| kind.map_or(true, |k| r.kind.eq_ignore_ascii_case(k.name())))
        .collect();
    keep_last(matching, limit)
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
    fn test_add_uses_default_source() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let mut service = IncomeService::new(&mut ledger);

        let stipend = service
            .add(IncomeEntry::new(IncomeKind::Income, Money::from_units(5000)))
            .unwrap();
        assert_eq!(stipend.source, "Stipend");

        let mut entry = IncomeEntry::new(IncomeKind::PocketMoney, Money::from_units(-200));
        entry.source = Some("   ".to_string());
        let pocket = service.add(entry).unwrap();
        assert_eq!(pocket.source, "Parents");
        assert_eq!(pocket.amount, Money::from_units(200));
    }

    #[test]
    fn test_add_persists() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let mut entry = IncomeEntry::new(IncomeKind::Income, Money::from_cents(125050));
        entry.date = NaiveDate::from_ymd_opt(2025, 6, 1);
        entry.source = Some("Tutoring".to_string());

        IncomeService::new(&mut ledger).add(entry).unwrap();

        let saved = std::fs::read_to_string(ledger.paths().income_file()).unwrap();
        assert_eq!(
            saved,
            "date,type,source,amount\n2025-06-01,Income,Tutoring,1250.50\n"
        );
    }

    #[test]
    fn test_filter_income_by_kind() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        {
            let mut service = IncomeService::new(&mut ledger);
            service
                .add(IncomeEntry::new(IncomeKind::Income, Money::from_units(500)))
                .unwrap();
            service
                .add(IncomeEntry::new(IncomeKind::PocketMoney, Money::from_units(200)))
                .unwrap();
        }

        let pocket = filter_income(&ledger, Some(IncomeKind::PocketMoney), None);
        assert_eq!(pocket.len(), 1);
        assert_eq!(pocket[0].amount, Money::from_units(200));
        assert_eq!(filter_income(&ledger, None, Some(1)).len(), 1);
    }
}
