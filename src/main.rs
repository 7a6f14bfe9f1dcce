use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use student_budget::cli::{
    handle_expense_command, handle_income_command, handle_summary_command, ExpenseCommands,
    IncomeCommands, SummaryArgs,
};
use student_budget::config::{paths::BudgetPaths, settings::Settings};
use student_budget::storage::{init::initialize_storage, Ledger};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker for students",
    long_about = "Track daily expenses, income and pocket money from the terminal. \
                  Entries are kept in plain CSV files and summarized as total income, \
                  total expenses, savings and spend by category."
)]
struct Cli {
    /// Directory holding expenses.csv and income.csv
    #[arg(long, global = true, env = "STUDENT_BUDGET_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the dashboard
    #[command(alias = "ui")]
    Dashboard,

    /// Record, import and list expenses
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Record, import and list income and pocket money
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Show totals and spend by category
    Summary(SummaryArgs),

    /// Create the data directory and empty ledger files
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Open the ledger, reporting files that had to be loaded as empty
fn open_ledger(paths: &BudgetPaths) -> Result<Ledger> {
    let ledger = Ledger::open(paths.clone())?;
    for file in ledger.degraded_files() {
        eprintln!(
            "warning: {} could not be read and was loaded as empty",
            file.display()
        );
    }
    Ok(ledger)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = BudgetPaths::resolve(cli.data_dir.as_deref());
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Dashboard) => {
            let ledger = open_ledger(&paths)?;
            student_budget::tui::run_dashboard(ledger, &settings)?;
        }
        Some(Commands::Expense(cmd)) => {
            let mut ledger = open_ledger(&paths)?;
            handle_expense_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            let mut ledger = open_ledger(&paths)?;
            handle_income_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Summary(args)) => {
            let ledger = open_ledger(&paths)?;
            handle_summary_command(&ledger, &settings, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing budget at: {}", paths.data_dir().display());
            let created = initialize_storage(&paths)?;
            settings.save(&paths)?;
            for file in &created {
                println!("  created {}", file.display());
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'budget expense add Food 120' to record your first expense.");
        }
        Some(Commands::Config) => {
            println!("Student Budget Configuration");
            println!("============================");
            println!("Data directory: {}", paths.data_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Income file:    {}", paths.income_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no (run 'budget init')" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Chart width:     {}", settings.chart_width);
        }
        None => {
            println!("Student Budget - track expenses, income and savings");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget dashboard' to launch the dashboard.");
        }
    }

    Ok(())
}
