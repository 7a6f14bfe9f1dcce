//! CSV file I/O for ledger tables
//!
//! Ledger files are plain CSV with a fixed header. Saving rewrites the whole
//! file in place; loading is forgiving and never fails the caller.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::{debug, warn};

use super::table::Table;
use crate::error::BudgetError;
use crate::models::{HeaderIndex, LedgerRecord, RawRow};

/// Parsed CSV content: a header index plus the raw data records
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    headers: HeaderIndex,
    records: Vec<StringRecord>,
}

impl RawTable {
    /// Read a headed CSV document
    ///
    /// Rows shorter than the header are kept; their missing fields read as
    /// empty. A row with more fields than the header, or invalid UTF-8, fails
    /// the whole read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BudgetError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(reader);

        let header = reader.headers()?.clone();
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() > header.len() {
                let line = record.position().map_or(0, |p| p.line());
                return Err(BudgetError::Csv(format!(
                    "line {}: expected {} fields, saw {}",
                    line,
                    header.len(),
                    record.len()
                )));
            }
            records.push(record);
        }

        Ok(Self::from_parts(&header, records))
    }

    /// Build a table from an already-split header and data records
    pub fn from_parts(header: &StringRecord, records: Vec<StringRecord>) -> Self {
        Self {
            headers: HeaderIndex::new(header),
            records,
        }
    }

    /// Header index of the document
    pub fn headers(&self) -> &HeaderIndex {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over data rows as name-addressable views
    pub fn rows(&self) -> impl Iterator<Item = RawRow<'_>> {
        self.records
            .iter()
            .map(move |record| RawRow::new(&self.headers, record))
    }

    /// Coerce every row into a ledger record
    pub fn to_table<R: LedgerRecord>(&self) -> Table<R> {
        Table::from_rows(self.rows().map(|row| R::from_raw(&row)).collect())
    }
}

/// Read a ledger table, reporting parse failures
///
/// Returns `Ok(None)` when the file doesn't exist.
fn read_table<R, P>(path: P) -> Result<Option<Table<R>>, BudgetError>
where
    R: LedgerRecord,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let raw = RawTable::from_reader(file)
        .map_err(|e| BudgetError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(Some(raw.to_table()))
}

/// Load a ledger table, falling back to an empty table
///
/// A missing file is normal on first run. An unreadable file is logged and
/// treated as empty; the file itself is left untouched until the next save.
/// The flag is `true` when the file existed but could not be parsed.
pub fn load_table<R, P>(path: P) -> (Table<R>, bool)
where
    R: LedgerRecord,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match read_table(path) {
        Ok(Some(table)) => {
            debug!(path = %path.display(), rows = table.len(), "loaded ledger file");
            (table, false)
        }
        Ok(None) => {
            debug!(path = %path.display(), "ledger file not found, starting empty");
            (Table::new(), false)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ledger file unreadable, starting empty");
            (Table::new(), true)
        }
    }
}

/// Write a full ledger table to disk, replacing any existing file
pub fn save_table<R, P>(table: &Table<R>, path: P) -> Result<(), BudgetError>
where
    R: LedgerRecord,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(table.columns())?;
    for row in table {
        writer.write_record(row.to_fields())?;
    }
    writer
        .flush()
        .map_err(|e| BudgetError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), rows = table.len(), "saved ledger file");
    Ok(())
}
