//! Application configuration.

use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::plot::PlotStyle;
use crate::sampling::{DEFAULT_RANGE_TEXT, DEFAULT_STEP_TEXT};

/// Sample cap applied when none is configured.
pub const DEFAULT_MAX_SAMPLES: usize = 100_000;

/// Configuration for the chart view layout.
#[derive(Debug, Clone)]
pub struct ChartLayoutConfig {
    /// Padding factor for Y-axis (0.1 = 10% margin).
    pub y_axis_padding_factor: f64,
    /// Width of the history panel as a percentage of the screen.
    pub history_width_percent: u16,
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            history_width_percent: 30,
        }
    }
}

/// Runtime settings for the calculator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Entries kept in the evaluation history.
    pub history_capacity: usize,
    /// Range text restored after an invalid range.
    pub default_range: String,
    /// Step text restored after an invalid step.
    pub default_step: String,
    /// Largest number of samples a single plot may take.
    pub max_samples: usize,
    /// Series styling.
    pub plot_style: PlotStyle,
    /// Chart layout.
    pub layout: ChartLayoutConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            default_range: DEFAULT_RANGE_TEXT.to_string(),
            default_step: DEFAULT_STEP_TEXT.to_string(),
            max_samples: DEFAULT_MAX_SAMPLES,
            plot_style: PlotStyle::default(),
            layout: ChartLayoutConfig::default(),
        }
    }
}
