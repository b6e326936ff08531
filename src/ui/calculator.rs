//! Input fields, result line and history panel.

use crate::app::{App, InputField};
use crate::oracle::Evaluator;
use crate::ui::formatters::truncate_to_width;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the two rows of input fields.
pub(super) fn draw_inputs<E: Evaluator>(
    f: &mut Frame<'_>,
    app: &App<E>,
    area: Rect,
    colors: &ThemeColors,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[1]);

    draw_field(f, app, InputField::Expression, top[0], colors);
    draw_output(f, &app.output, app.output_is_error, top[1], colors);
    draw_field(f, app, InputField::Polynomial, bottom[0], colors);
    draw_field(f, app, InputField::Range, bottom[1], colors);
    draw_field(f, app, InputField::Step, bottom[2], colors);
}

fn draw_field<E: Evaluator>(
    f: &mut Frame<'_>,
    app: &App<E>,
    field: InputField,
    area: Rect,
    colors: &ThemeColors,
) {
    let focused = app.focus == field;
    let border = if focused { colors.yellow } else { colors.bg2 };
    let text = if focused {
        format!("{}▏", app.input_text(field))
    } else {
        app.input_text(field).to_string()
    };

    let mut title_style = Style::default().fg(colors.fg0);
    if focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(colors.fg0))
        .block(
            Block::default()
                .title(format!(" {} ", field.name()))
                .title_style(title_style)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(colors.bg0)),
        );

    f.render_widget(paragraph, area);
}

fn draw_output(f: &mut Frame<'_>, output: &str, is_error: bool, area: Rect, colors: &ThemeColors) {
    let fg = if is_error { colors.red } else { colors.green };
    let paragraph = Paragraph::new(output.to_string())
        .style(Style::default().fg(fg))
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0)),
        );

    f.render_widget(paragraph, area);
}

/// Draw the history panel, rebuilt from the snapshot every frame.
pub(super) fn draw_history<E: Evaluator>(
    f: &mut Frame<'_>,
    app: &App<E>,
    area: Rect,
    colors: &ThemeColors,
) {
    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line<'_>> = app
        .history
        .snapshot()
        .iter()
        .map(|entry| Line::from(truncate_to_width(entry, width)))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colors.fg0))
        .block(
            Block::default()
                .title(format!(
                    " History {}/{} ",
                    app.history.len(),
                    app.history.capacity()
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .style(Style::default().bg(colors.bg0)),
        );

    f.render_widget(paragraph, area);
}
