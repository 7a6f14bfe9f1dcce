//! Income CLI commands
//!
//! Implements the "add income" / "add pocket money" form and CSV upload.

use std::path::PathBuf;

use clap::Subcommand;

use super::{parse_amount, parse_date_arg};
use crate::config::settings::Settings;
use crate::display::format_income_table;
use crate::error::BudgetResult;
use crate::models::IncomeKind;
use crate::services::{filter_income, ImportService, IncomeEntry, IncomeService};
use crate::storage::Ledger;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income or pocket money
    Add {
        /// Amount received (e.g., "5000" or "5000.00"); the sign is ignored
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Type of income ("income" or "pocket-money")
        #[arg(short, long, default_value = "income")]
        kind: IncomeKind,
        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Who paid (defaults to "Stipend" for income, "Parents" for pocket money)
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Import income from a CSV or spreadsheet file
    Import {
        /// Path to a .csv, .xlsx or .xls file with at least an `amount` column
        file: PathBuf,
        /// Type every imported row is filed under
        #[arg(short, long, default_value = "income")]
        kind: IncomeKind,
    },

    /// List recorded income
    List {
        /// Only show this type
        #[arg(short, long)]
        kind: Option<IncomeKind>,
        /// Number of most recent entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an income command
pub fn handle_income_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    match cmd {
        IncomeCommands::Add {
            amount,
            kind,
            date,
            source,
        } => {
            let mut entry = IncomeEntry::new(kind, parse_amount(&amount)?);
            entry.date = date.as_deref().map(parse_date_arg).transpose()?;
            entry.source = source;

            let record = IncomeService::new(ledger).add(entry)?;
            println!(
                "Added {}: {} from {}",
                record.kind,
                record.amount.format_with_symbol(&settings.currency_symbol),
                record.source
            );
        }

        IncomeCommands::Import { file, kind } => {
            let count = ImportService::new(ledger).import_income_file(&file, kind)?;
            println!("Imported {} rows as {}.", count, kind);
        }

        IncomeCommands::List { kind, limit } => {
            let income = filter_income(ledger, kind, Some(limit));
            print!(
                "{}",
                format_income_table(&income, &settings.currency_symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
