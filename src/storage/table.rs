//! In-memory ledger table
//!
//! A `Table` is an ordered, append-only list of rows with a fixed column
//! layout. Appending never mutates the original table; it produces a new one,
//! so a caller can persist the new state before committing to it.

use crate::models::LedgerRecord;

/// Ordered rows of a single ledger dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: LedgerRecord> Table<R> {
    /// Create an empty table
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a table from existing rows, keeping their order
    pub fn from_rows(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Column names of this table
    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    /// All rows, in insertion order
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Iterate over rows in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Return a new table with `rows` appended after the existing rows
    pub fn append<I>(&self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
    {
        let mut next = self.rows.clone();
        next.extend(rows);
        Self { rows: next }
    }
}

impl<R: LedgerRecord> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeKind, IncomeRecord, Money};
    use chrono::NaiveDate;

    fn income(units: i64) -> IncomeRecord {
        IncomeRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            IncomeKind::Income,
            "Stipend",
            Money::from_units(units),
        )
    }

    #[test]
    fn test_empty_table_has_columns() {
        let table: Table<IncomeRecord> = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.columns(), &["date", "type", "source", "amount"]);
    }

    #[test]
    fn test_append_preserves_order_and_original() {
        let original = Table::from_rows(vec![income(1)]);

        let next = original
            .append(vec![income(2), income(3)])
            .append(std::iter::once(income(4)));

        assert_eq!(original.len(), 1);
        assert_eq!(next.len(), 4);
        let amounts: Vec<i64> = next.iter().map(|r| r.amount.units()).collect();
        assert_eq!(amounts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_append_sequence_counts() {
        let mut table: Table<IncomeRecord> = Table::new();
        let batches = [0usize, 3, 1, 0, 5];
        let mut expected = 0;
        for (i, size) in batches.iter().enumerate() {
            let batch: Vec<_> = (0..*size).map(|j| income((i * 10 + j) as i64)).collect();
            table = table.append(batch);
            expected += size;
            assert_eq!(table.len(), expected);
        }
        assert_eq!(table.rows().last().unwrap().amount.units(), 44);
    }
}
