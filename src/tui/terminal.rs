//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::cli::open_store;
use crate::config::{Settings, SpendbookPaths};
use crate::models::MonthKey;
use crate::session::Session;

use super::app::{App, Screen};
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application on `month`, or the current month
pub fn run_tui(paths: &SpendbookPaths, settings: &Settings, month: Option<MonthKey>) -> Result<()> {
    // Open storage before touching the terminal so errors print normally
    let store = open_store(paths, settings)?;
    let mut session = Session::new(store, Screen::default(), settings.currency_symbol.clone());
    if let Some(month) = month {
        session = session.with_selected_month(month);
    }
    let mut app = App::new(session, settings)?;

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;

    result
}

fn event_loop<M, C>(terminal: &mut Tui, app: &mut App<'_, M, C>) -> Result<()>
where
    M: crate::storage::DurableMap,
    C: crate::services::Clock,
{
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }

    Ok(())
}
