//! Status bar view
//!
//! Shows the status message (if any), the data directory and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(" │ "));
    }

    spans.push(Span::styled(
        format!(" {} ", app.paths().data_dir().display()),
        Style::default().fg(Color::Cyan),
    ));
    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        "r: reload  q: quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
