//! Ledger listing tables
//!
//! Renders expense and income rows as terminal tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{ExpenseRecord, IncomeRecord};

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Paid With")]
    payment_method: String,
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn format_row_date(date: Option<chrono::NaiveDate>, date_format: &str) -> String {
    date.map(|d| d.format(date_format).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format expenses as a table; amounts are shown as money spent
pub fn format_expense_table(expenses: &[&ExpenseRecord], currency: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        date: format_row_date(e.date, date_format),
        category: e.category.clone(),
        description: truncate(&e.description, DESCRIPTION_WIDTH),
        amount: e.spent().format_with_symbol(currency),
        payment_method: e.payment_method.clone(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());
    format!("{}\n", table)
}

/// Format income rows as a table
pub fn format_income_table(income: &[&IncomeRecord], currency: &str, date_format: &str) -> String {
    if income.is_empty() {
        return "No income found.\n".to_string();
    }

    let rows = income.iter().map(|r| IncomeRow {
        date: format_row_date(r.date, date_format),
        kind: r.kind.clone(),
        source: truncate(&r.source, DESCRIPTION_WIDTH),
        amount: r.amount.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeKind, Money, PaymentMethod};
    use chrono::NaiveDate;

    #[test]
    fn test_expense_table() {
        let expense = ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
            ExpenseCategory::Education,
            "Textbooks",
            Money::from_units(899),
            PaymentMethod::Card,
        );
        let output = format_expense_table(&[&expense], "₹", "%d/%m/%Y");

        assert!(output.contains("Paid With"));
        assert!(output.contains("06/05/2025"));
        assert!(output.contains("Textbooks"));
        assert!(output.contains("₹899.00"));
    }

    #[test]
    fn test_income_table_missing_date() {
        let mut income = IncomeRecord::new(
            NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(),
            IncomeKind::PocketMoney,
            "Parents",
            Money::from_units(300),
        );
        income.date = None;
        let output = format_income_table(&[&income], "$", "%Y-%m-%d");

        assert!(output.contains("Pocket Money"));
        assert!(output.contains("$300.00"));
        assert!(output.contains(" - "));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_expense_table(&[], "₹", "%Y-%m-%d"), "No expenses found.\n");
        assert_eq!(format_income_table(&[], "₹", "%Y-%m-%d"), "No income found.\n");
    }
}
