//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget;
use crate::error::SpendbookResult;
use crate::view::BudgetProgress;

use super::CliSession;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget (applies to every month)
    Set {
        /// Budget amount, stored as entered (e.g. "500" or "499.99")
        value: String,
    },

    /// Show the budget and progress for the selected month
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    session: &mut CliSession,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendbookResult<()> {
    match cmd {
        BudgetCommands::Set { value } => {
            session.set_budget(&value)?;
            println!("Monthly budget set to {}{}.", settings.currency_symbol, value);
            println!();
            print!("{}", session.presenter().output());
        }
        BudgetCommands::Show => {
            let store = session.store();
            match store.budget() {
                Some(budget) => println!("Monthly budget: {}{}", settings.currency_symbol, budget),
                None => println!("Monthly budget: (unset)"),
            }

            let total = store.total_for(session.selected_month());
            let progress = BudgetProgress::compute(total, store.budget());
            println!("Month: {}", session.selected_month());
            print!("{}", format_budget(&progress, &settings.currency_symbol));
        }
    }

    Ok(())
}
