//! Expense CLI commands
//!
//! Implements the "add expense" form and CSV upload for a category.

use std::path::PathBuf;

use clap::Subcommand;

use super::{parse_amount, parse_date_arg};
use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::BudgetResult;
use crate::models::{ExpenseCategory, PaymentMethod};
use crate::services::{filter_expenses, ExpenseEntry, ExpenseService, ImportService};
use crate::storage::Ledger;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a single expense
    Add {
        /// Category (Food, Transport, Groceries, Entertainment, Education,
        /// Health, Shopping, Bills, Essentials, Other)
        category: ExpenseCategory,
        /// Amount spent (e.g., "120" or "120.50"); the sign is ignored
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// What the money was spent on
        #[arg(short = 'm', long, default_value = "")]
        description: String,
        /// Payment method (UPI, Cash, Card, Bank)
        #[arg(short, long, default_value = "UPI")]
        payment: PaymentMethod,
    },

    /// Import expenses for a category from a CSV or spreadsheet file
    Import {
        /// Category every imported row is filed under
        category: ExpenseCategory,
        /// Path to a .csv, .xlsx or .xls file with at least an `amount` column
        file: PathBuf,
    },

    /// List recorded expenses
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<ExpenseCategory>,
        /// Number of most recent entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
            description,
            payment,
        } => {
            let mut entry = ExpenseEntry::new(category, parse_amount(&amount)?);
            entry.date = date.as_deref().map(parse_date_arg).transpose()?;
            entry.description = description;
            entry.payment_method = payment;

            let record = ExpenseService::new(ledger).add(entry)?;
            println!(
                "Added expense: {} on {} ({})",
                record.spent().format_with_symbol(&settings.currency_symbol),
                record.category,
                record.payment_method
            );
        }

        ExpenseCommands::Import { category, file } => {
            let count = ImportService::new(ledger).import_expense_file(&file, category)?;
            println!("Imported {} rows into {}.", count, category);
        }

        ExpenseCommands::List { category, limit } => {
            let expenses = filter_expenses(ledger, category, Some(limit));
            print!(
                "{}",
                format_expense_table(&expenses, &settings.currency_symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
