use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_backup_command, handle_expense_command, handle_export_command, handle_history_command,
    handle_report_command, BackupCommands, ExpenseCommands, ExportArgs, HistoryArgs,
    ReportCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSES_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record dated, categorized expenses, review them by month, \
                  see where the money goes, and keep CSV exports and JSON backups."
)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Export expenses to a CSV file
    Export(ExportArgs),

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        println!("Expense Tracker - personal expense ledger");
        println!();
        println!("Run 'expenses --help' for usage information.");
        return Ok(());
    };

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::open(&paths)
        .with_context(|| format!("opening {}", paths.database_file().display()))?;

    match command {
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, &settings, cmd)?,
        Commands::Export(args) => handle_export_command(&storage, args)?,
        Commands::Backup(cmd) => handle_backup_command(&storage, &paths, &settings, cmd)?,
        Commands::History(args) => handle_history_command(&storage, args)?,
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Database:         {}", paths.database_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:          {}", settings.currency_symbol);
            println!("  Date format:              {}", settings.date_format);
            println!(
                "  Require positive amounts: {}",
                settings.require_positive_amounts
            );
        }
    }

    storage.close()?;
    Ok(())
}
