//! Summary CLI command
//!
//! Prints the three headline metrics and the spend by category chart, or
//! exports the category breakdown to CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::reports::LedgerSummary;
use crate::storage::Ledger;

/// Summary options
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Width of the bar chart (defaults to the configured width)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Export the category breakdown to a CSV file instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the summary command
pub fn handle_summary_command(
    ledger: &Ledger,
    settings: &Settings,
    args: SummaryArgs,
) -> BudgetResult<()> {
    let summary = LedgerSummary::from_ledger(ledger);

    if let Some(path) = args.output {
        let file = File::create(&path)
            .map_err(|e| BudgetError::Io(format!("Failed to create {}: {}", path.display(), e)))?;
        summary.export_csv(BufWriter::new(file))?;
        println!("Category breakdown exported to: {}", path.display());
        return Ok(());
    }

    let width = args.width.unwrap_or(settings.chart_width);
    print!("{}", summary.format_terminal(&settings.currency_symbol, width));
    Ok(())
}
