//! Dashboard views
//!
//! The dashboard is a single screen: the three headline metrics on top,
//! the spend-by-category chart and recent entries below, and a status bar.

pub mod category_chart;
pub mod metrics;
pub mod recent;
pub mod status_bar;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use super::app::App;

/// Render the entire dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let [metrics_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [chart_area, recent_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(body_area);

    metrics::render(frame, app, metrics_area);
    category_chart::render(frame, app, chart_area);
    recent::render(frame, app, recent_area);
    status_bar::render(frame, app, status_area);
}
