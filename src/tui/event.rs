//! Event handling for the TUI
//!
//! Terminal events (key presses, resize) are read on a background thread
//! with crossterm's polling API and forwarded over a channel, interleaved
//! with periodic ticks.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::SpendbookResult;

/// Default tick interval
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    /// Kept so the reader thread is owned by the handler
    _reader: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let reader = thread::spawn(move || read_loop(sender, tick_rate));

        Self {
            receiver,
            _reader: reader,
        }
    }

    /// Get the next event (blocking)
    ///
    /// Fails once the reader thread has stopped.
    pub fn next(&self) -> SpendbookResult<Event> {
        Ok(self.receiver.recv()?)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

/// Forward terminal events until the receiver goes away or the terminal
/// can no longer be read
fn read_loop(sender: mpsc::Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    // Windows reports releases too
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(width, height)) => {
                        Some(Event::Resize(width, height))
                    }
                    Ok(_) => None,
                    Err(_) => return,
                };
                if let Some(event) = forwarded {
                    if sender.send(event).is_err() {
                        return;
                    }
                }
            }
            Ok(false) => {}
            Err(_) => return,
        }

        if last_tick.elapsed() >= tick_rate {
            if sender.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
