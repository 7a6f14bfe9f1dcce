//! Import service
//!
//! Turns a user-supplied CSV or spreadsheet file into ledger rows stamped
//! with the active expense category or income type. An import either
//! succeeds completely or leaves the ledger untouched.

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Reader};
use csv::StringRecord;
use tracing::{debug, info};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    ExpenseCategory, ExpenseRecord, IncomeKind, IncomeRecord, LedgerRecord, Money, RawRow,
    DATE_FORMAT,
};
use crate::storage::{Ledger, RawTable};

/// Column every import file must carry
pub const AMOUNT_COLUMN: &str = "amount";

const SUPPORTED: &str = "import .csv, .xlsx or .xls files";

/// Supported import file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    /// Office Open XML workbook (.xlsx, .xlsm)
    Xlsx,
    /// Legacy Excel workbook
    Xls,
}

impl ImportFormat {
    /// Detect the format from a file extension
    pub fn detect(path: &Path) -> BudgetResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx") | Some("xlsm") => Ok(Self::Xlsx),
            Some("xls") => Ok(Self::Xls),
            Some(other) => Err(BudgetError::Import(format!(
                "Unsupported file type '.{}': {}",
                other, SUPPORTED
            ))),
            None => Err(BudgetError::Import(format!(
                "Cannot tell the format of '{}': {}",
                path.display(),
                SUPPORTED
            ))),
        }
    }
}

/// Read an import file into a raw table
pub fn read_import_file(path: &Path) -> BudgetResult<RawTable> {
    match ImportFormat::detect(path)? {
        ImportFormat::Csv => {
            let file = File::open(path).map_err(|e| {
                BudgetError::Import(format!("Failed to open file '{}': {}", path.display(), e))
            })?;
            RawTable::from_reader(file).map_err(|e| {
                BudgetError::Import(format!("Failed to read '{}': {}", path.display(), e))
            })
        }
        ImportFormat::Xlsx | ImportFormat::Xls => read_spreadsheet(path),
    }
}

/// Read the first worksheet; its first row is the header
///
/// Fully blank rows are skipped.
fn read_spreadsheet(path: &Path) -> BudgetResult<RawTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        BudgetError::Import(format!("Failed to open file '{}': {}", path.display(), e))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            BudgetError::Import(format!("'{}' contains no worksheets", path.display()))
        })?
        .map_err(|e| BudgetError::Import(format!("Failed to read '{}': {}", path.display(), e)))?;

    let mut rows = range.rows();
    let header: StringRecord = rows
        .next()
        .map(|cells| cells.iter().map(cell_text).collect())
        .unwrap_or_default();
    let records = rows
        .filter(|cells| cells.iter().any(|cell| !cell.is_empty()))
        .map(|cells| cells.iter().map(cell_text).collect())
        .collect();

    debug!(path = %path.display(), "read first worksheet");
    Ok(RawTable::from_parts(&header, records))
}

/// Render a cell the way it would appear in a CSV export
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

/// Convert raw import rows into expenses of one category
///
/// Every amount must be numeric; amounts are stored as `-abs(amount)`.
pub fn stamp_expenses(raw: &RawTable, category: ExpenseCategory) -> BudgetResult<Vec<ExpenseRecord>> {
    require_amount_column(raw)?;

    raw.rows()
        .enumerate()
        .map(|(idx, row)| {
            let amount = strict_amount(&row, idx)?;
            let mut expense = ExpenseRecord::from_raw(&row);
            expense.category = category.name().to_string();
            expense.amount = -amount.abs();
            Ok(expense)
        })
        .collect()
}

/// Convert raw import rows into income of one type
///
/// Every amount must be numeric; amounts are stored as `abs(amount)`.
pub fn stamp_income(raw: &RawTable, kind: IncomeKind) -> BudgetResult<Vec<IncomeRecord>> {
    require_amount_column(raw)?;

    raw.rows()
        .enumerate()
        .map(|(idx, row)| {
            let amount = strict_amount(&row, idx)?;
            let mut income = IncomeRecord::from_raw(&row);
            income.kind = kind.name().to_string();
            income.amount = amount.abs();
            Ok(income)
        })
        .collect()
}

fn require_amount_column(raw: &RawTable) -> BudgetResult<()> {
    if raw.headers().contains(AMOUNT_COLUMN) {
        Ok(())
    } else {
        Err(BudgetError::Import(format!(
            "Missing required column '{}'",
            AMOUNT_COLUMN
        )))
    }
}

fn strict_amount(row: &RawRow<'_>, idx: usize) -> BudgetResult<Money> {
    Money::parse(row.get(AMOUNT_COLUMN)).map_err(|e| BudgetError::import_row(idx + 1, e))
}

/// Service for bulk imports into the ledger
pub struct ImportService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Import already-parsed rows as expenses of `category`
    pub fn import_expense_batch(
        &mut self,
        raw: &RawTable,
        category: ExpenseCategory,
    ) -> BudgetResult<usize> {
        let rows = stamp_expenses(raw, category)?;
        let count = self.ledger.add_expenses(rows)?;
        info!(category = %category, rows = count, "imported expenses");
        Ok(count)
    }

    /// Import already-parsed rows as income of `kind`
    pub fn import_income_batch(&mut self, raw: &RawTable, kind: IncomeKind) -> BudgetResult<usize> {
        let rows = stamp_income(raw, kind)?;
        let count = self.ledger.add_income(rows)?;
        info!(kind = %kind, rows = count, "imported income");
        Ok(count)
    }

    /// Import a file as expenses of `category`
    pub fn import_expense_file(
        &mut self,
        path: &Path,
        category: ExpenseCategory,
    ) -> BudgetResult<usize> {
        debug!(path = %path.display(), "reading expense import");
        let raw = read_import_file(path)?;
        self.import_expense_batch(&raw, category)
    }

    /// Import a file as income of `kind`
    pub fn import_income_file(&mut self, path: &Path, kind: IncomeKind) -> BudgetResult<usize> {
        debug!(path = %path.display(), "reading income import");
        let raw = read_import_file(path)?;
        self.import_income_batch(&raw, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_data_dir(temp_dir.path().join("budget_data"));
        let ledger = Ledger::open(paths).unwrap();
        (temp_dir, ledger)
    }

    fn write_temp_csv(contents: &str) -> NamedTempFile {
        let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(tmp, "{}", contents).unwrap();
        tmp
    }

    fn raw(contents: &str) -> RawTable {
        RawTable::from_reader(contents.as_bytes()).unwrap()
    }

    #[test]
    fn test_stamp_expenses_flips_sign_and_category() {
        let table = raw("date,description,amount,category\n2025-01-03,Pizza,250,Whatever\n2025-01-04,Refund,-40.5,\n");
        let rows = stamp_expenses(&table, ExpenseCategory::Food).unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.category == "Food"));
        assert_eq!(rows[0].amount, Money::from_units(-250));
        assert_eq!(rows[1].amount, Money::from_cents(-4050));
        assert_eq!(rows[0].description, "Pizza");
    }

    #[test]
    fn test_stamp_income_keeps_non_negative() {
        let table = raw("amount,source\n-300,Tutoring\n120,Gift\n");
        let rows = stamp_income(&table, IncomeKind::PocketMoney).unwrap();

        assert_eq!(rows[0].amount, Money::from_units(300));
        assert_eq!(rows[1].amount, Money::from_units(120));
        assert!(rows.iter().all(|r| r.kind == "Pocket Money"));
        assert_eq!(rows[0].date, None);
    }

    #[test]
    fn test_missing_amount_column() {
        let table = raw("date,description\n2025-01-01,Coffee\n");
        let err = stamp_expenses(&table, ExpenseCategory::Food).unwrap_err();
        assert!(err.is_import());
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn test_non_numeric_amount_leaves_ledger_unchanged() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger
            .add_expenses(vec![ExpenseRecord::new(
                chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                ExpenseCategory::Bills,
                "Phone",
                Money::from_units(299),
                crate::models::PaymentMethod::Bank,
            )])
            .unwrap();
        let before = ledger.expenses().clone();
        let file_before = std::fs::read_to_string(ledger.paths().expenses_file()).unwrap();

        let tmp = write_temp_csv("description,amount\nBus,20\nTrain,twenty\n");
        let err = ImportService::new(&mut ledger)
            .import_expense_file(tmp.path(), ExpenseCategory::Transport)
            .unwrap_err();

        assert!(err.to_string().contains("row 2"));
        assert_eq!(ledger.expenses(), &before);
        assert_eq!(
            std::fs::read_to_string(ledger.paths().expenses_file()).unwrap(),
            file_before
        );
    }

    #[test]
    fn test_import_file_appends_and_saves() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let tmp = write_temp_csv("date,source,amount\n2025-02-01,Stipend,5000\n2025-03-01,Stipend,5000\n");

        let count = ImportService::new(&mut ledger)
            .import_income_file(tmp.path(), IncomeKind::Income)
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(ledger.income().len(), 2);
        let saved = std::fs::read_to_string(ledger.paths().income_file()).unwrap();
        assert!(saved.starts_with("date,type,source,amount\n"));
        assert!(saved.contains("2025-03-01,Income,Stipend,5000.00"));
    }

    #[test]
    fn test_empty_import_appends_nothing() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let count = ImportService::new(&mut ledger)
            .import_expense_batch(&raw("amount\n"), ExpenseCategory::Other)
            .unwrap();
        assert_eq!(count, 0);
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(ImportFormat::detect(Path::new("a.CSV")).unwrap(), ImportFormat::Csv);
        assert_eq!(ImportFormat::detect(Path::new("a.xlsx")).unwrap(), ImportFormat::Xlsx);
        assert_eq!(ImportFormat::detect(Path::new("a.xls")).unwrap(), ImportFormat::Xls);
        assert!(ImportFormat::detect(Path::new("a.pdf")).unwrap_err().is_import());
        assert!(ImportFormat::detect(Path::new("statement")).unwrap_err().is_import());
    }

    #[test]
    fn test_rejects_unknown_types_and_missing_files() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let mut service = ImportService::new(&mut ledger);

        let err = service
            .import_expense_file(Path::new("statement.pdf"), ExpenseCategory::Food)
            .unwrap_err();
        assert!(err.to_string().contains(".pdf"));

        let err = service
            .import_expense_file(Path::new("does-not-exist.csv"), ExpenseCategory::Food)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));

        let err = service
            .import_expense_file(Path::new("does-not-exist.xlsx"), ExpenseCategory::Food)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_import_xlsx_workbook() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let workbook = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("transport_expenses.xlsx");

        let count = ImportService::new(&mut ledger)
            .import_expense_file(&workbook, ExpenseCategory::Transport)
            .unwrap();

        assert_eq!(count, 2);
        let rows = ledger.expenses().rows();
        assert!(rows.iter().all(|r| r.category == "Transport"));
        assert_eq!(rows[0].date, chrono::NaiveDate::from_ymd_opt(2025, 2, 1));
        assert_eq!(rows[0].description, "Bus pass");
        assert_eq!(rows[0].amount, Money::from_units(-25));
        assert_eq!(rows[0].payment_method, "UPI");
        // Date-formatted cell
        assert_eq!(rows[1].date, chrono::NaiveDate::from_ymd_opt(2025, 2, 2));
        assert_eq!(rows[1].amount, Money::from_cents(-4050));
        assert_eq!(rows[1].payment_method, "Cash");
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Float(25.0)), "25");
        assert_eq!(cell_text(&Data::Float(40.5)), "40.5");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::String("Auto".to_string())), "Auto");
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::DateTimeIso("2025-02-03".to_string())), "2025-02-03");
    }
}
