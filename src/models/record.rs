//! Column-oriented view over ledger rows
//!
//! Every ledger dataset has a fixed column layout. `LedgerRecord` ties a row
//! type to that layout, and `RawRow` gives name-based access to the fields
//! of one CSV record regardless of the column order in the source file.

use std::collections::HashMap;

use csv::StringRecord;

/// A row type with a fixed, named column layout
pub trait LedgerRecord: Clone {
    /// Column names, in on-disk order
    const COLUMNS: &'static [&'static str];

    /// Build a record from raw fields, coercing values that don't parse
    fn from_raw(row: &RawRow<'_>) -> Self;

    /// Serialize the record as fields matching `COLUMNS`
    fn to_fields(&self) -> Vec<String>;
}

/// Maps normalized header names to their column index
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Build an index from a CSV header record
    ///
    /// Names are trimmed and lowercased; the first occurrence of a duplicate
    /// name wins.
    pub fn new(headers: &StringRecord) -> Self {
        let mut positions = HashMap::new();
        for (idx, name) in headers.iter().enumerate() {
            positions.entry(normalize(name)).or_insert(idx);
        }
        Self { positions }
    }

    /// Check whether a column is present
    pub fn contains(&self, column: &str) -> bool {
        self.positions.contains_key(&normalize(column))
    }

    /// Get the index of a column
    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(&normalize(column)).copied()
    }
}

fn normalize(name: &str) -> String {
    name.trim().trim_start_matches('\u{feff}').to_lowercase()
}

/// One CSV record viewed through a header index
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    index: &'a HeaderIndex,
    record: &'a StringRecord,
}

impl<'a> RawRow<'a> {
    pub fn new(index: &'a HeaderIndex, record: &'a StringRecord) -> Self {
        Self { index, record }
    }

    /// Get a field by column name, exactly as stored
    ///
    /// Missing columns and short rows yield "".
    pub fn get(&self, column: &str) -> &'a str {
        self.index
            .position(column)
            .and_then(|idx| self.record.get(idx))
            .unwrap_or("")
    }
}
