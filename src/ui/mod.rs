//! User interface rendering.

mod calculator;
pub mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::oracle::Evaluator;
use crate::plot::ui::draw_chart;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw<E: Evaluator>(f: &mut Frame<'_>, app: &App<E>) {
    let colors = ThemeColors::from_theme(&app.theme);
    let layout = &app.config().layout;

    // Chart and history, input rows, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let history_width = layout.history_width_percent.min(100);
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(100 - history_width),
            Constraint::Percentage(history_width),
        ])
        .split(chunks[0]);

    draw_chart(f, &app.plots, content[0], layout, &colors);
    calculator::draw_history(f, app, content[1], &colors);
    calculator::draw_inputs(f, app, chunks[1], &colors);
    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.focus, &colors);
}
