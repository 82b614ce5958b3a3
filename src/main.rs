use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendbook::cli::{
    handle_add, handle_budget_command, handle_delete, handle_history, handle_months, handle_show,
    open_session, open_store, BudgetCommands,
};
use spendbook::config::{Settings, SpendbookPaths};
use spendbook::display::format_categories;
use spendbook::models::MonthKey;

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Monthly expense tracker for the terminal",
    long_about = "Spendbook records expenses by month, tracks them against a single \
                  monthly budget and breaks each month down by category. Use the \
                  subcommands for one-shot edits or 'spendbook tui' for the \
                  interactive interface."
)]
struct Cli {
    /// Directory holding settings, storage and the audit log
    #[arg(long, global = true, env = "SPENDBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Month to work on (YYYY-MM), defaults to the current month
    #[arg(short, long, global = true)]
    month: Option<MonthKey>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the selected month (the default command)
    #[command(alias = "ls")]
    Show,

    /// Add an expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount, e.g. 3.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense from the selected month
    #[command(alias = "rm")]
    Delete {
        /// Position in the list, as shown by 'show'
        position: usize,
    },

    /// List months with expenses, newest first
    Months,

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// List the allowed categories
    Categories,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        Some(dir) => SpendbookPaths::with_base_dir(dir),
        None => SpendbookPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Show) => {
            let mut session = open_session(&paths, &settings, cli.month)?;
            handle_show(&mut session)?;
        }
        Some(Commands::Add {
            description,
            amount,
            category,
            date,
        }) => {
            let mut session = open_session(&paths, &settings, cli.month)?;
            handle_add(&mut session, &settings, description, amount, category, date)?;
        }
        Some(Commands::Delete { position }) => {
            let mut session = open_session(&paths, &settings, cli.month)?;
            handle_delete(&mut session, position)?;
        }
        Some(Commands::Months) => {
            let session = open_session(&paths, &settings, cli.month)?;
            handle_months(&session)?;
        }
        Some(Commands::Budget(cmd)) => {
            let mut session = open_session(&paths, &settings, cli.month)?;
            handle_budget_command(&mut session, &settings, cmd)?;
        }
        Some(Commands::Categories) => {
            print!("{}", format_categories(&settings.categories));
        }
        Some(Commands::History { limit }) => {
            handle_history(&paths, limit)?;
        }
        Some(Commands::Tui) => {
            spendbook::tui::run_tui(&paths, &settings, cli.month)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Spendbook at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            let mut store = open_store(&paths, &settings)?;
            let current = store.current_month();
            store.ensure_month(&current)?;

            println!("Initialization complete!");
            println!();
            println!("Categories: {}", settings.categories.join(", "));
            println!("Run 'spendbook add <description> <amount> -c <category>' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("Spendbook Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Storage file:   {}", paths.storage_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() {
                    "yes"
                } else {
                    "no (run 'spendbook init')"
                }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Categories:      {}", settings.categories.len());
        }
    }

    Ok(())
}
