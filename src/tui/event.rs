//! Event handling for the dashboard
//!
//! Polls crossterm for terminal events on the calling thread.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// No input arrived within the tick interval
    Tick,
}

/// Polls for terminal events with a fixed tick rate
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait for the next event, returning `Tick` if none arrives in time
    pub fn next(&self) -> io::Result<Event> {
        if !event::poll(self.tick_rate)? {
            return Ok(Event::Tick);
        }

        match event::read()? {
            // Ignore key release events reported on some platforms
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
            CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
            _ => Ok(Event::Tick),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
