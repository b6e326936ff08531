//! Error types for Plotterm.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! The `Display` text of every validation error is the exact message shown
//! to the user.

use thiserror::Error;

/// Result type alias for Plotterm operations.
pub type Result<T> = std::result::Result<T, PlottermError>;

/// Input field that should be reset to its default after a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetField {
    /// The plotting range field.
    Range,
    /// The plotting step field.
    Step,
}

/// Errors raised while validating a plotting range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// Range text was blank.
    #[error("Empty polynomial range!")]
    Empty,

    /// Range text did not look like `start,end`.
    #[error("Invalid range format!")]
    Malformed,

    /// Range text did not split into exactly two components.
    #[error("Invalid range format!")]
    WrongComponentCount {
        /// Number of components found.
        found: usize,
    },

    /// Start of the range lies after its end.
    #[error("Final value must be greater than initial value.")]
    Descending {
        /// Parsed start value.
        start: f64,
        /// Parsed end value.
        end: f64,
    },

    /// Start and end of the range are equal.
    #[error("Initial, Final value must be not be same values.")]
    Degenerate {
        /// The shared value.
        value: f64,
    },

    /// A logarithmic expression was asked to sample a non-positive domain.
    #[error("Log can only be plotted for positive integer values, update plotting range.")]
    LogDomain {
        /// Parsed start value.
        start: f64,
    },

    /// The step value was rejected.
    #[error(transparent)]
    Step(#[from] StepError),
}

impl RangeError {
    /// Field the caller should reset to its documented default, if any.
    pub fn reset_field(&self) -> Option<ResetField> {
        match self {
            Self::Empty | Self::Malformed | Self::WrongComponentCount { .. } => {
                Some(ResetField::Range)
            },
            Self::Step(_) => Some(ResetField::Step),
            Self::Descending { .. } | Self::Degenerate { .. } | Self::LogDomain { .. } => None,
        }
    }
}

/// Errors raised while validating a sampling step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    /// Step text was blank.
    #[error("Empty polynomial step!")]
    Empty,

    /// Step text was not a non-negative decimal.
    #[error("Invalid value in step!")]
    Malformed,

    /// Step parsed to zero.
    #[error("Step should be greater than 0!")]
    NonPositive {
        /// Parsed step value.
        step: f64,
    },
}

/// Errors raised while sampling an expression over a range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// The evaluator rejected the expression at some sample point.
    #[error("Invalid format of polynomial")]
    InvalidExpressionFormat,

    /// Adding the step no longer advances the sample position.
    #[error("Step is too small to advance past {x}")]
    StepTooSmall {
        /// Position where accumulation stalled.
        x: f64,
    },

    /// The sweep would produce more samples than allowed.
    #[error("Too many samples, the limit is {limit}")]
    TooManySamples {
        /// Configured sample cap.
        limit: usize,
    },
}

/// Errors that can occur in Plotterm.
#[derive(Debug, Error)]
pub enum PlottermError {
    /// Range or step validation failed.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Sampling an expression failed.
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}
