//! Income model
//!
//! Tracks money coming in, either as regular income (stipend, part-time job)
//! or pocket money. Amounts are always stored non-negative.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::date::{format_date, parse_date};
use super::money::Money;
use super::record::{LedgerRecord, RawRow};
use crate::error::BudgetError;

/// Kind of income entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IncomeKind {
    #[default]
    Income,
    PocketMoney,
}

impl IncomeKind {
    pub const ALL: [IncomeKind; 2] = [Self::Income, Self::PocketMoney];

    /// Name stored in the `type` column
    pub fn name(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::PocketMoney => "Pocket Money",
        }
    }

    /// Source suggested when the user doesn't give one
    pub fn default_source(&self) -> &'static str {
        match self {
            Self::Income => "Stipend",
            Self::PocketMoney => "Parents",
        }
    }
}

impl fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IncomeKind {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "income" => Ok(Self::Income),
            "pocketmoney" => Ok(Self::PocketMoney),
            _ => Err(BudgetError::Validation(format!(
                "Unknown income type '{}' (expected 'Income' or 'Pocket Money')",
                s.trim()
            ))),
        }
    }
}

/// A single income row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeRecord {
    /// When the money was received (`None` if the source date was unreadable)
    pub date: Option<NaiveDate>,
    /// Income type name ("Income" or "Pocket Money")
    pub kind: String,
    /// Who paid
    pub source: String,
    /// Amount received, non-negative
    pub amount: Money,
}

impl IncomeRecord {
    /// Create an income entry; the stored amount is `abs(amount)`
    pub fn new(date: NaiveDate, kind: IncomeKind, source: impl Into<String>, amount: Money) -> Self {
        Self {
            date: Some(date),
            kind: kind.name().to_string(),
            source: source.into(),
            amount: amount.abs(),
        }
    }
}

impl LedgerRecord for IncomeRecord {
    const COLUMNS: &'static [&'static str] = &["date", "type", "source", "amount"];

    fn from_raw(row: &RawRow<'_>) -> Self {
        Self {
            date: parse_date(row.get("date")),
            kind: row.get("type").to_string(),
            source: row.get("source").to_string(),
            amount: Money::parse(row.get("amount")).unwrap_or_default(),
        }
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            format_date(self.date),
            self.kind.clone(),
            self.source.clone(),
            self.amount.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_amount_non_negative() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let income = IncomeRecord::new(date, IncomeKind::Income, "Stipend", Money::from_units(-500));
        assert_eq!(income.amount, Money::from_units(500));
        assert_eq!(income.kind, "Income");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("income".parse::<IncomeKind>().unwrap(), IncomeKind::Income);
        assert_eq!(
            "Pocket Money".parse::<IncomeKind>().unwrap(),
            IncomeKind::PocketMoney
        );
        assert_eq!(
            "pocket-money".parse::<IncomeKind>().unwrap(),
            IncomeKind::PocketMoney
        );
        assert!("salary".parse::<IncomeKind>().is_err());
    }

    #[test]
    fn test_default_sources() {
        assert_eq!(IncomeKind::Income.default_source(), "Stipend");
        assert_eq!(IncomeKind::PocketMoney.default_source(), "Parents");
    }

    #[test]
    fn test_to_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let income = IncomeRecord::new(date, IncomeKind::PocketMoney, "Parents", Money::from_units(200));
        assert_eq!(
            income.to_fields(),
            vec!["2025-01-05", "Pocket Money", "Parents", "200.00"]
        );
    }
}
