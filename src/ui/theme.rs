//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Main background.
    pub bg0: Color,
    /// Status bar background.
    pub bg1: Color,
    /// Border color.
    pub bg2: Color,
    /// Primary text color.
    pub fg0: Color,
    /// Dimmed text color.
    pub fg_dim: Color,
    /// Focus highlight.
    pub yellow: Color,
    /// Validation messages.
    pub red: Color,
    /// Evaluation results.
    pub green: Color,
    /// Colors assigned to series in insertion order.
    pub series: [Color; 6],
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(102, 92, 84),
                fg0: Color::Rgb(235, 219, 178),
                fg_dim: Color::Rgb(168, 153, 132),
                yellow: Color::Rgb(250, 189, 47),
                red: Color::Rgb(251, 73, 52),
                green: Color::Rgb(184, 187, 38),
                series: [
                    Color::Rgb(131, 165, 152),
                    Color::Rgb(254, 128, 25),
                    Color::Rgb(211, 134, 155),
                    Color::Rgb(142, 192, 124),
                    Color::Rgb(250, 189, 47),
                    Color::Rgb(251, 73, 52),
                ],
            },
            Theme::GruvboxLight => Self {
                bg0: Color::Rgb(251, 241, 199),
                bg1: Color::Rgb(235, 219, 178),
                bg2: Color::Rgb(189, 174, 147),
                fg0: Color::Rgb(60, 56, 54),
                fg_dim: Color::Rgb(124, 111, 100),
                yellow: Color::Rgb(181, 118, 20),
                red: Color::Rgb(157, 0, 6),
                green: Color::Rgb(121, 116, 14),
                series: [
                    Color::Rgb(7, 102, 120),
                    Color::Rgb(175, 58, 3),
                    Color::Rgb(143, 63, 113),
                    Color::Rgb(66, 123, 88),
                    Color::Rgb(181, 118, 20),
                    Color::Rgb(157, 0, 6),
                ],
            },
        }
    }

    /// Color for the series at `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }
}
