//! Application state and logic.
//!
//! `App` is the thin layer between the terminal UI and the core: it owns
//! the text fields, turns validation failures into user messages and
//! resets fields to their defaults.

use crate::clipboard;
use crate::config::AppConfig;
use crate::error::ResetField;
use crate::history::BoundedHistory;
use crate::oracle::{Evaluator, ExpressionOracle, MevalInterpreter};
use crate::plot::{PlotCollection, SeriesHandle};
use crate::sampling::{RangeSpec, SampleSeriesBuilder};

/// Shown when the expression field is blank.
pub const EMPTY_EXPRESSION_MESSAGE: &str = "Empty expression..!";

/// Shown when the polynomial field is blank.
pub const EMPTY_POLYNOMIAL_MESSAGE: &str = "Empty polynomial expression!";

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Editable input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    /// Expression to evaluate once.
    #[default]
    Expression,
    /// Expression to plot.
    Polynomial,
    /// Plotting range, `start,end`.
    Range,
    /// Plotting step.
    Step,
}

impl InputField {
    /// Get the next field in tab order.
    pub fn next(self) -> Self {
        match self {
            Self::Expression => Self::Polynomial,
            Self::Polynomial => Self::Range,
            Self::Range => Self::Step,
            Self::Step => Self::Expression,
        }
    }

    /// Get the previous field in tab order.
    pub fn prev(self) -> Self {
        match self {
            Self::Expression => Self::Step,
            Self::Polynomial => Self::Expression,
            Self::Range => Self::Polynomial,
            Self::Step => Self::Range,
        }
    }

    /// Get the field label.
    pub fn name(self) -> &'static str {
        match self {
            Self::Expression => "Expression",
            Self::Polynomial => "Plot f(x)",
            Self::Range => "Range",
            Self::Step => "Step",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App<E = MevalInterpreter> {
    /// Expression field.
    pub expression_input: String,
    /// Expression-to-plot field.
    pub polynomial_input: String,
    /// Range field.
    pub range_input: String,
    /// Step field.
    pub step_input: String,
    /// Result or validation message.
    pub output: String,
    /// Whether `output` holds an error rather than a result.
    pub output_is_error: bool,
    /// Focused field.
    pub focus: InputField,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Recent evaluations.
    pub history: BoundedHistory,
    /// Plotted series.
    pub plots: PlotCollection,
    oracle: ExpressionOracle<E>,
    sampler: SampleSeriesBuilder,
    config: AppConfig,
}

impl App<MevalInterpreter> {
    /// Create an application backed by the built-in interpreter.
    pub fn new(config: AppConfig) -> Self {
        Self::with_evaluator(config, MevalInterpreter::new())
    }
}

impl<E: Evaluator> App<E> {
    /// Create an application backed by `evaluator`.
    pub fn with_evaluator(config: AppConfig, evaluator: E) -> Self {
        Self {
            expression_input: String::new(),
            polynomial_input: String::new(),
            range_input: config.default_range.clone(),
            step_input: config.default_step.clone(),
            output: String::new(),
            output_is_error: false,
            focus: InputField::default(),
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            history: BoundedHistory::new(config.history_capacity),
            plots: PlotCollection::new(config.plot_style),
            oracle: ExpressionOracle::new(evaluator),
            sampler: SampleSeriesBuilder::new(config.max_samples),
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Evaluate the expression field and record it in the history.
    pub fn calculate_expression(&mut self) {
        let expression = self.expression_input.clone();
        if expression.trim().is_empty() {
            self.output = EMPTY_EXPRESSION_MESSAGE.to_string();
            self.output_is_error = true;
            self.expression_input.clear();
            return;
        }

        let result = self.oracle.evaluate(&expression);
        let payload = result.payload().to_string();
        self.history
            .append(BoundedHistory::format_entry(&expression, &payload));
        self.output = payload;
        self.output_is_error = !result.is_marked_valid();
    }

    /// Sample the polynomial field over the range and add it to the plot.
    pub fn plot_expression(&mut self) -> Option<SeriesHandle> {
        self.output.clear();
        self.output_is_error = false;

        let expression = self.polynomial_input.clone();
        if expression.trim().is_empty() {
            self.output = EMPTY_POLYNOMIAL_MESSAGE.to_string();
            self.output_is_error = true;
            self.polynomial_input.clear();
            return None;
        }

        let uses_log = expression.contains("log");
        let range = match RangeSpec::parse(&self.range_input, &self.step_input, uses_log) {
            Ok(range) => range,
            Err(e) => {
                self.output = e.to_string();
                self.output_is_error = true;
                match e.reset_field() {
                    Some(ResetField::Range) => {
                        self.range_input = self.config.default_range.clone();
                    },
                    Some(ResetField::Step) => {
                        self.step_input = self.config.default_step.clone();
                    },
                    None => {},
                }
                return None;
            },
        };

        match self.sampler.build(&mut self.oracle, &range, &expression) {
            Ok(samples) => {
                let handle = self.plots.add_series(samples, expression.as_str());
                self.status = format!("Plotted {}", expression);
                Some(handle)
            },
            Err(e) => {
                tracing::info!("Plot of '{}' failed: {}", expression, e);
                self.output = e.to_string();
                self.output_is_error = true;
                None
            },
        }
    }

    /// Remove the oldest plotted series.
    pub fn remove_oldest_plot(&mut self) {
        self.status = match self.plots.remove_oldest() {
            Some(series) => format!("Removed {}", series.label()),
            None => "Nothing to remove".to_string(),
        };
    }

    /// Remove every plotted series.
    pub fn remove_all_plots(&mut self) {
        self.plots.remove_all();
        self.status = "Cleared all plots".to_string();
    }

    /// Toggle point markers on every series.
    pub fn toggle_markers(&mut self) {
        self.plots.toggle_markers();
        self.status = "Toggled markers".to_string();
    }

    /// Copy the history panel text to the clipboard.
    pub fn copy_history(&mut self) {
        if self.history.is_empty() {
            self.status = "History is empty".to_string();
            return;
        }
        match clipboard::copy_to_clipboard(&self.history.render()) {
            Ok(()) => self.status = "History copied!".to_string(),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Submit the focused field.
    pub fn submit(&mut self) {
        match self.focus {
            InputField::Expression => self.calculate_expression(),
            InputField::Polynomial | InputField::Range | InputField::Step => {
                self.plot_expression();
            },
        }
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Add a character to the focused field.
    pub fn input(&mut self, c: char) {
        self.input_mut(self.focus).push(c);
    }

    /// Remove the last character from the focused field.
    pub fn backspace(&mut self) {
        self.input_mut(self.focus).pop();
    }

    /// Text of a field.
    pub fn input_text(&self, field: InputField) -> &str {
        match field {
            InputField::Expression => &self.expression_input,
            InputField::Polynomial => &self.polynomial_input,
            InputField::Range => &self.range_input,
            InputField::Step => &self.step_input,
        }
    }

    fn input_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Expression => &mut self.expression_input,
            InputField::Polynomial => &mut self.polynomial_input,
            InputField::Range => &mut self.range_input,
            InputField::Step => &mut self.step_input,
        }
    }
}
