//! Sampling an expression across a range.

use super::RangeSpec;
use crate::error::SampleError;
use crate::oracle::{Evaluator, ExpressionOracle, OracleResult};

/// Name of the variable bound at each sample point.
pub const SAMPLE_VARIABLE: &str = "x";

/// One evaluated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Bound variable value.
    pub x: f64,
    /// Evaluated expression value.
    pub y: f64,
}

/// Drives the evaluator across a [`RangeSpec`].
#[derive(Debug, Clone, Copy)]
pub struct SampleSeriesBuilder {
    max_samples: usize,
}

impl SampleSeriesBuilder {
    /// Create a builder that refuses sweeps longer than `max_samples`.
    pub fn new(max_samples: usize) -> Self {
        Self { max_samples }
    }

    /// Evaluate `expression` at every point from `start` to `end` inclusive.
    ///
    /// Positions advance by repeated addition of the step, so the final
    /// position may fall short of `end` by accumulated rounding. The first
    /// point that fails to evaluate aborts the whole sweep.
    pub fn build<E: Evaluator>(
        &self,
        oracle: &mut ExpressionOracle<E>,
        range: &RangeSpec,
        expression: &str,
    ) -> Result<Vec<Sample>, SampleError> {
        let mut samples = Vec::new();
        let mut x = range.start();

        while x <= range.end() {
            if samples.len() >= self.max_samples {
                tracing::debug!(limit = self.max_samples, "Sample limit reached");
                return Err(SampleError::TooManySamples {
                    limit: self.max_samples,
                });
            }

            let binding = oracle.evaluate_checked(&format!("var {}={}", SAMPLE_VARIABLE, x));
            if matches!(binding, OracleResult::Invalid { .. }) {
                tracing::debug!(x, raw = binding.raw(), "Failed to bind sample variable");
                return Err(SampleError::InvalidExpressionFormat);
            }

            let y = match oracle.evaluate_checked(expression) {
                OracleResult::Numeric { value, .. } => value,
                other => {
                    tracing::debug!(x, raw = other.raw(), "Invalid sample");
                    return Err(SampleError::InvalidExpressionFormat);
                },
            };
            samples.push(Sample { x, y });

            let next = x + range.step();
            if next <= x {
                return Err(SampleError::StepTooSmall { x });
            }
            x = next;
        }

        tracing::debug!(count = samples.len(), expression, "Built sample series");
        Ok(samples)
    }
}

impl Default for SampleSeriesBuilder {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_SAMPLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::testing::ScriptedEvaluator;
    use crate::oracle::MevalInterpreter;

    fn xs(samples: &[Sample]) -> Vec<f64> {
        samples.iter().map(|s| s.x).collect()
    }

    #[test]
    fn samples_identity_inclusively() {
        let mut oracle = ExpressionOracle::new(MevalInterpreter::new());
        let range = RangeSpec::parse("0,10", "2", false).unwrap();

        let samples = SampleSeriesBuilder::default()
            .build(&mut oracle, &range, "x")
            .unwrap();

        let expected: Vec<Sample> = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
            .iter()
            .map(|&v| Sample { x: v, y: v })
            .collect();
        assert_eq!(samples, expected);
    }

    #[test]
    fn sample_count_matches_inclusive_formula() {
        let cases = [("0,10", "0.5"), ("-3,5", "2"), ("1,2", "0.25"), ("0,7", "3")];
        for (range_text, step_text) in cases {
            let range = RangeSpec::parse(range_text, step_text, false).unwrap();
            let mut oracle = ExpressionOracle::new(MevalInterpreter::new());
            let samples = SampleSeriesBuilder::default()
                .build(&mut oracle, &range, "x*x")
                .unwrap();

            let expected = ((range.end() - range.start()) / range.step()).floor() as usize + 1;
            assert_eq!(samples.len(), expected, "{range_text} step {step_text}");
            assert_eq!(samples[0].x, range.start());
            let last = samples[samples.len() - 1].x;
            assert!(last <= range.end());
            assert!(last + range.step() > range.end());
        }
    }

    #[test]
    fn accumulation_drift_can_drop_the_end_point() {
        let range = RangeSpec::parse("0,0.3", "0.1", false).unwrap();
        let mut oracle = ExpressionOracle::new(MevalInterpreter::new());
        let samples = SampleSeriesBuilder::default()
            .build(&mut oracle, &range, "x")
            .unwrap();

        // 0.1 + 0.1 + 0.1 overshoots 0.3
        assert_eq!(xs(&samples), vec![0.0, 0.1, 0.2]);
    }

    #[test]
    fn binds_variable_before_each_evaluation() {
        let mut oracle = ExpressionOracle::new(ScriptedEvaluator::new(|_: &str| {
            "ValidOutput \"1\"".to_string()
        }));
        let range = RangeSpec::parse("0,1", "0.5", false).unwrap();

        SampleSeriesBuilder::default()
            .build(&mut oracle, &range, "2*x")
            .unwrap();

        assert_eq!(
            oracle.evaluator().calls,
            vec!["var x=0", "2*x", "var x=0.5", "2*x", "var x=1", "2*x"]
        );
    }

    #[test]
    fn first_invalid_sample_discards_the_series() {
        let mut oracle = ExpressionOracle::new(ScriptedEvaluator::new(|expr: &str| {
            if expr == "f" {
                "EvalError \"boom\"".to_string()
            } else {
                "ValidOutput \"0\"".to_string()
            }
        }));
        let range = RangeSpec::parse("0,10", "1", false).unwrap();

        let result = SampleSeriesBuilder::default().build(&mut oracle, &range, "f");

        assert_eq!(result, Err(SampleError::InvalidExpressionFormat));
        assert_eq!(oracle.evaluator().calls.len(), 2);
    }

    #[test]
    fn non_numeric_payload_fails_the_build() {
        let mut oracle = ExpressionOracle::new(ScriptedEvaluator::new(|expr: &str| {
            if expr.starts_with("var ") {
                "ValidOutput \"1\"".to_string()
            } else {
                "ValidOutput \"text\"".to_string()
            }
        }));
        let range = RangeSpec::parse("0,1", "1", false).unwrap();

        let result = SampleSeriesBuilder::default().build(&mut oracle, &range, "s");
        assert_eq!(result, Err(SampleError::InvalidExpressionFormat));
    }

    #[test]
    fn unknown_symbols_are_invalid() {
        let mut oracle = ExpressionOracle::new(MevalInterpreter::new());
        let range = RangeSpec::parse("0,10", "1", false).unwrap();

        let result = SampleSeriesBuilder::default().build(&mut oracle, &range, "x + y");
        assert_eq!(result, Err(SampleError::InvalidExpressionFormat));
    }

    #[test]
    fn enforces_sample_limit() {
        let mut oracle = ExpressionOracle::new(MevalInterpreter::new());
        let range = RangeSpec::parse("0,10", "1", false).unwrap();

        let result = SampleSeriesBuilder::new(5).build(&mut oracle, &range, "x");
        assert_eq!(result, Err(SampleError::TooManySamples { limit: 5 }));

        let samples = SampleSeriesBuilder::new(11)
            .build(&mut oracle, &range, "x")
            .unwrap();
        assert_eq!(samples.len(), 11);
    }

    #[test]
    fn stalled_accumulation_is_reported() {
        let mut oracle = ExpressionOracle::new(ScriptedEvaluator::new(|_: &str| {
            "ValidOutput \"0\"".to_string()
        }));
        let range =
            RangeSpec::parse("100000000000000000000,100000000000000100000", "1", false).unwrap();

        let result = SampleSeriesBuilder::default().build(&mut oracle, &range, "x");
        assert!(matches!(result, Err(SampleError::StepTooSmall { .. })));
    }
}
