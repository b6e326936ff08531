//! Range and step parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RangeError, StepError};

static RANGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?,-?\d+(\.\d+)?$").expect("valid range pattern"));

static STEP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid step pattern"));

/// Default text for the range field after a reset.
pub const DEFAULT_RANGE_TEXT: &str = "0,10";

/// Default text for the step field after a reset.
pub const DEFAULT_STEP_TEXT: &str = "0.1";

/// A validated sampling plan.
///
/// Always satisfies `start < end` and `step > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    start: f64,
    end: f64,
    step: f64,
}

impl RangeSpec {
    /// Parse a `start,end` range and a step value.
    ///
    /// Checks run in a fixed order: range presence and shape, ordering,
    /// log domain, then the step. The first failure is reported.
    pub fn parse(
        range_text: &str,
        step_text: &str,
        expression_uses_log: bool,
    ) -> Result<Self, RangeError> {
        let range_text = range_text.trim();
        if range_text.is_empty() {
            return Err(RangeError::Empty);
        }
        if !RANGE_PATTERN.is_match(range_text) {
            return Err(RangeError::Malformed);
        }

        let components: Vec<&str> = range_text.split(',').collect();
        // Unreachable while RANGE_PATTERN admits exactly one comma.
        if components.len() != 2 {
            return Err(RangeError::WrongComponentCount {
                found: components.len(),
            });
        }

        let start: f64 = components[0].parse().map_err(|_| RangeError::Malformed)?;
        let end: f64 = components[1].parse().map_err(|_| RangeError::Malformed)?;
        if !start.is_finite() || !end.is_finite() {
            return Err(RangeError::Malformed);
        }

        if start > end {
            return Err(RangeError::Descending { start, end });
        }
        if start == end {
            return Err(RangeError::Degenerate { value: start });
        }
        if expression_uses_log && start <= 0.0 {
            return Err(RangeError::LogDomain { start });
        }

        let step = parse_step(step_text)?;

        Ok(Self { start, end, step })
    }

    /// First sample position.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound, inclusive.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Distance between consecutive samples.
    pub fn step(&self) -> f64 {
        self.step
    }
}

fn parse_step(step_text: &str) -> Result<f64, StepError> {
    let step_text = step_text.trim();
    if step_text.is_empty() {
        return Err(StepError::Empty);
    }
    if !STEP_PATTERN.is_match(step_text) {
        return Err(StepError::Malformed);
    }

    let step: f64 = step_text.parse().map_err(|_| StepError::Malformed)?;
    if step <= 0.0 {
        return Err(StepError::NonPositive { step });
    }

    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_range() {
        let spec = RangeSpec::parse("0,10", "2", false).unwrap();
        assert_eq!(spec.start(), 0.0);
        assert_eq!(spec.end(), 10.0);
        assert_eq!(spec.step(), 2.0);
    }

    #[test]
    fn parses_negative_and_decimal_components() {
        let spec = RangeSpec::parse(" -2.5,3.75 ", "0.25", false).unwrap();
        assert_eq!(spec.start(), -2.5);
        assert_eq!(spec.end(), 3.75);
        assert_eq!(spec.step(), 0.25);
    }

    #[test]
    fn blank_inputs_are_reported_as_empty() {
        assert_eq!(RangeSpec::parse("   ", "1", false), Err(RangeError::Empty));
        assert_eq!(
            RangeSpec::parse("0,1", " ", false),
            Err(RangeError::Step(StepError::Empty))
        );
    }

    #[test]
    fn alphabetic_range_text_is_malformed() {
        for text in ["a,b", "0,1x", "x", "1e3,5", "zero,10", "0;10", "0,10,20"] {
            assert_eq!(
                RangeSpec::parse(text, "1", false),
                Err(RangeError::Malformed),
                "{text}"
            );
        }
    }

    #[test]
    fn overflowing_components_are_malformed() {
        let digits = "9".repeat(400);
        assert_eq!(
            RangeSpec::parse(&format!("-{digits},0"), "1", false),
            Err(RangeError::Malformed)
        );
        assert_eq!(
            RangeSpec::parse(&format!("0,{digits}"), "1", false),
            Err(RangeError::Malformed)
        );
    }

    #[test]
    fn rejects_descending_and_degenerate_for_any_step() {
        for step in ["0", "0.5", "1", "abc", ""] {
            assert!(matches!(
                RangeSpec::parse("5,1", step, false),
                Err(RangeError::Descending { .. })
            ));
            assert!(matches!(
                RangeSpec::parse("3,3", step, false),
                Err(RangeError::Degenerate { .. })
            ));
        }
    }

    #[test]
    fn log_expressions_need_positive_start() {
        assert_eq!(
            RangeSpec::parse("0,10", "1", true),
            Err(RangeError::LogDomain { start: 0.0 })
        );
        assert!(RangeSpec::parse("1,10", "1", true).is_ok());
        assert!(RangeSpec::parse("0,10", "1", false).is_ok());
    }

    #[test]
    fn step_validation() {
        assert_eq!(
            RangeSpec::parse("0,1", "-1", false),
            Err(RangeError::Step(StepError::Malformed))
        );
        assert_eq!(
            RangeSpec::parse("0,1", "1.", false),
            Err(RangeError::Step(StepError::Malformed))
        );
        assert_eq!(
            RangeSpec::parse("0,1", "0.0", false),
            Err(RangeError::Step(StepError::NonPositive { step: 0.0 }))
        );
    }

    #[test]
    fn range_checks_run_before_step_checks() {
        assert_eq!(RangeSpec::parse("a,b", "", false), Err(RangeError::Malformed));
    }
}
