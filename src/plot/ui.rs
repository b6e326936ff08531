//! Chart rendering - pure rendering layer.

use super::PlotCollection;
use crate::config::ChartLayoutConfig;
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw every series in the collection.
pub fn draw_chart(
    f: &mut Frame<'_>,
    plots: &PlotCollection,
    area: Rect,
    layout: &ChartLayoutConfig,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .title(format!(" Plot ({}) ", plots.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));

    let Some((x_min, x_max, y_min, y_max)) = plots.bounds() else {
        let para = Paragraph::new("Nothing plotted yet")
            .style(Style::default().fg(colors.fg_dim))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };

    let (y_min, y_max) = padded_range(y_min, y_max, layout.y_axis_padding_factor);
    let (x_min, x_max) = padded_range(x_min, x_max, 0.0);

    // Dataset borrows its points, so collect them first
    let lines: Vec<Vec<(f64, f64)>> = plots
        .series()
        .iter()
        .map(|s| {
            s.xy()
                .into_iter()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect()
        })
        .collect();

    let mut datasets = Vec::with_capacity(lines.len() * 2);
    for (idx, (series, points)) in plots.series().iter().zip(&lines).enumerate() {
        let style = plots.style_of(series);
        let color = colors.series_color(idx);

        datasets.push(
            Dataset::default()
                .name(style.legend_label.to_string())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(points),
        );

        if style.marker_size > 0.0 {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(color))
                    .data(points),
            );
        }
    }

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.fg0))
        .bounds([x_min, x_max])
        .labels(vec![
            format_axis_label(x_min),
            format_axis_label((x_min + x_max) / 2.0),
            format_axis_label(x_max),
        ]);

    let y_axis = Axis::default()
        .title("y")
        .style(Style::default().fg(colors.fg0))
        .bounds([y_min, y_max])
        .labels(vec![
            format_axis_label(y_min),
            format_axis_label((y_min + y_max) / 2.0),
            format_axis_label(y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Widen `[min, max]` by `factor` of its span, or by one unit when flat.
fn padded_range(min: f64, max: f64, factor: f64) -> (f64, f64) {
    let span = max - min;
    if span <= f64::EPSILON * max.abs().max(1.0) {
        return (min - 1.0, max + 1.0);
    }
    let pad = span * factor;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_factor() {
        assert_eq!(padded_range(0.0, 10.0, 0.1), (-1.0, 11.0));
        assert_eq!(padded_range(-2.0, 2.0, 0.0), (-2.0, 2.0));
    }

    #[test]
    fn flat_ranges_get_unit_padding() {
        assert_eq!(padded_range(3.0, 3.0, 0.1), (2.0, 4.0));
    }
}
