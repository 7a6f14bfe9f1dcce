//! Ledger summary
//!
//! Derives total income, total expense, net savings and spending per
//! category from the current ledger tables. Nothing is cached; callers
//! project again whenever they render.

use std::collections::HashMap;
use std::io::Write;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseRecord, IncomeRecord, Money};
use crate::storage::{Ledger, Table};

/// Spending total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Absolute amount spent
    pub total: Money,
    /// Share of total spend, in percent
    pub percentage: f64,
}

/// Aggregate figures for the whole ledger
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub total_income: Money,
    pub total_expense: Money,
    pub net_savings: Money,
    /// Spending per category, largest first; empty when there are no expenses
    pub category_breakdown: Vec<CategoryTotal>,
}

impl LedgerSummary {
    /// Project a summary from the two ledger tables
    pub fn project(expenses: &Table<ExpenseRecord>, income: &Table<IncomeRecord>) -> Self {
        let total_expense: Money = expenses.iter().map(|e| -e.amount).sum();
        let total_income: Money = income.iter().map(|i| i.amount).sum();

        Self {
            total_income,
            total_expense,
            net_savings: total_income - total_expense,
            category_breakdown: category_breakdown(expenses),
        }
    }

    /// Project a summary from a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self::project(ledger.expenses(), ledger.income())
    }

    /// Whether there is anything to chart
    pub fn has_chart(&self) -> bool {
        !self.category_breakdown.is_empty()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str, chart_width: usize) -> String {
        let mut output = String::new();

        output.push_str("Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:   {:>14}\n",
            self.total_income.format_grouped(currency)
        ));
        output.push_str(&format!(
            "Total Expenses: {:>14}\n",
            self.total_expense.format_grouped(currency)
        ));
        output.push_str(&format!(
            "Total Savings:  {:>14}\n",
            self.net_savings.format_grouped(currency)
        ));

        if !self.has_chart() {
            output.push_str("\nNo expenses recorded yet.\n");
            return output;
        }

        output.push_str("\nSpend by Category\n");
        output.push_str(&separator(50));
        output.push('\n');

        let max = self
            .category_breakdown
            .first()
            .map(|c| c.total.as_f64())
            .unwrap_or_default();
        let name_width = self
            .category_breakdown
            .iter()
            .map(|c| c.category.chars().count())
            .max()
            .unwrap_or(0)
            .max(8);

        for entry in &self.category_breakdown {
            output.push_str(&format!(
                "{:<width$} {} {:>12} {:>6}\n",
                entry.category,
                format_bar(entry.total.as_f64(), max, chart_width),
                entry.total.format_with_symbol(currency),
                format_percentage(entry.percentage),
                width = name_width
            ));
        }

        output
    }

    /// Export the category breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["category", "amount", "percentage"])?;
        for entry in &self.category_breakdown {
            csv.write_record([
                entry.category.clone(),
                entry.total.to_string(),
                format!("{:.2}", entry.percentage),
            ])?;
        }
        csv.flush().map_err(|e| BudgetError::Io(e.to_string()))
    }
}

/// Group expenses by category, sum, take the absolute value and sort
/// descending by magnitude (ties by name)
pub fn category_breakdown(expenses: &Table<ExpenseRecord>) -> Vec<CategoryTotal> {
    let mut sums: HashMap<&str, Money> = HashMap::new();
    for expense in expenses {
        *sums.entry(expense.category.as_str()).or_default() += expense.amount;
    }

    let mut totals: Vec<(String, Money)> = sums
        .into_iter()
        .map(|(category, sum)| (category.to_string(), sum.abs()))
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let grand_total: Money = totals.iter().map(|(_, total)| *total).sum();

    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            percentage: if grand_total.is_zero() {
                0.0
            } else {
                total.as_f64() / grand_total.as_f64() * 100.0
            },
            category,
            total,
        })
        .collect()
}
