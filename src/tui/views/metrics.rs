//! Headline metrics: total income, total expenses, total savings

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;

/// Render the metrics row
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let currency = app.settings.currency_symbol.as_str();
    let summary = &app.summary;
    let savings_color = if summary.net_savings.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    render_metric(frame, columns[0], "Total Income", summary.total_income, currency, Color::Green);
    render_metric(frame, columns[1], "Total Expenses", summary.total_expense, currency, Color::Yellow);
    render_metric(frame, columns[2], "Total Savings", summary.net_savings, currency, savings_color);
}

fn render_metric(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: Money,
    currency: &str,
    color: Color,
) {
    let block = Block::bordered().title(Line::from(format!(" {} ", title)));
    let value = Paragraph::new(Line::from(value.format_grouped(currency)))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(value, area);
}
