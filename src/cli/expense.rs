//! Expense CLI commands
//!
//! `show`, `add`, `delete` and `months`. Each prints what the session
//! rendered once the command is done.

use crate::config::Settings;
use crate::display::{format_added, format_month_list};
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{coerce_amount, ExpenseRecord};

use super::{parse_date, CliSession};

/// Render the selected month
pub fn handle_show(session: &mut CliSession) -> SpendbookResult<()> {
    session.render()?;
    print!("{}", session.presenter().output());
    Ok(())
}

/// Add an expense; `date` defaults to today
pub fn handle_add(
    session: &mut CliSession,
    settings: &Settings,
    description: String,
    amount: String,
    category: String,
    date: Option<String>,
) -> SpendbookResult<()> {
    if !settings.has_category(&category) {
        return Err(SpendbookError::unknown_category(category));
    }

    let date = match date {
        Some(d) => parse_date(&d)?,
        None => session.store().today(),
    };

    let numeric = coerce_amount(&amount);
    let record = ExpenseRecord::new(
        description.clone(),
        amount,
        date.format("%Y-%m-%d").to_string(),
        category,
    );

    match session.add_expense(record)? {
        Some(outcome) => {
            println!(
                "{}",
                format_added(&description, numeric, &settings.currency_symbol, &outcome.month)
            );
            if !outcome.affects_selected {
                println!(
                    "Still showing {}; run with --month {} to see it.",
                    session.selected_month(),
                    outcome.month
                );
            }
            println!();
            print!("{}", session.presenter().output());
        }
        None => {
            println!("Nothing added: description, amount, date and category are all required.");
        }
    }

    Ok(())
}

/// Delete the expense at 1-based `position` in the selected month
pub fn handle_delete(session: &mut CliSession, position: usize) -> SpendbookResult<()> {
    // Position 0 is out of range like any other bad position
    let index = position.checked_sub(1).unwrap_or(usize::MAX);

    match session.delete_expense(index)? {
        Some(removed) => println!(
            "Deleted '{}' from {}.",
            removed.description,
            session.selected_month()
        ),
        None => println!(
            "Nothing deleted: {} has no expense #{}.",
            session.selected_month(),
            position
        ),
    }

    println!();
    print!("{}", session.presenter().output());
    Ok(())
}

/// Print the month list without touching storage
pub fn handle_months(session: &CliSession) -> SpendbookResult<()> {
    let months = session.store().sorted_month_keys();
    print!("{}", format_month_list(&months, session.selected_month()));
    Ok(())
}
