//! Event handler for the dashboard
//!
//! Routes keyboard events to app actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if let Err(err) = app.reload() {
                app.set_status(format!("Reload failed: {}", err));
            }
        }
        _ => app.clear_status(),
    }
}
