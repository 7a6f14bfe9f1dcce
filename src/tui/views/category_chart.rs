//! Spend by category bar chart

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the category chart, or a placeholder when there are no expenses
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().title(" Spend by Category ");

    if !app.summary.has_chart() {
        let empty = Paragraph::new("No expenses recorded yet.").block(block);
        frame.render_widget(empty, area);
        return;
    }

    let currency = app.settings.currency_symbol.as_str();
    let bars: Vec<Bar> = app
        .summary
        .category_breakdown
        .iter()
        .map(|entry| {
            // Whole units are enough resolution for bar lengths
            let value = entry.total.units().max(0) as u64;
            Bar::default()
                .label(Line::from(entry.category.clone()))
                .value(value)
                .text_value(entry.total.format_grouped(currency))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
