//! Most recent expense entries

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Row, Table},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::App;

/// Render the latest expenses, newest first
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let currency = app.settings.currency_symbol.as_str();
    let date_format = app.settings.date_format.as_str();
    // Two rows for borders, one for the header
    let visible = area.height.saturating_sub(3) as usize;

    let rows: Vec<Row> = app
        .ledger
        .expenses()
        .rows()
        .iter()
        .rev()
        .take(visible)
        .map(|expense| {
            Row::new(vec![
                expense
                    .date
                    .map(|d| d.format(date_format).to_string())
                    .unwrap_or_else(|| "-".to_string()),
                truncate(&expense.category, 13),
                expense.spent().format_with_symbol(currency),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Min(8),
        ],
    )
    .header(Row::new(vec!["Date", "Category", "Amount"]).style(Style::default().add_modifier(Modifier::BOLD)))
    .block(Block::bordered().title(" Recent Expenses "));

    frame.render_widget(table, area);
}
