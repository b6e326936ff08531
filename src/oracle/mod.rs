//! Expression evaluation.
//!
//! The evaluator itself is a black box behind the [`Evaluator`] trait:
//! text goes in, the textual form of a result comes out. The
//! [`ExpressionOracle`] adapter turns that text into an [`OracleResult`].

mod envelope;
mod interpreter;

pub use envelope::{extract_payload, FALLBACK_PAYLOAD};
pub use interpreter::MevalInterpreter;

/// Substring the evaluator emits on successful evaluation.
pub const VALIDITY_MARKER: &str = "ValidOutput";

/// External expression evaluator.
pub trait Evaluator {
    /// Evaluate `expression` and return the textual form of the result.
    fn evaluate(&mut self, expression: &str) -> String;
}

/// Classified result of evaluating one expression.
#[derive(Debug, Clone, PartialEq)]
pub enum OracleResult {
    /// Payload parsed as a number.
    Numeric {
        /// Parsed value.
        value: f64,
        /// Raw evaluator output.
        raw: String,
    },
    /// Payload was not a number (typically a diagnostic).
    NonNumeric {
        /// Raw evaluator output.
        raw: String,
    },
    /// Output lacked the validity marker.
    Invalid {
        /// Raw evaluator output.
        raw: String,
    },
}

impl OracleResult {
    /// Raw evaluator output.
    pub fn raw(&self) -> &str {
        match self {
            Self::Numeric { raw, .. } | Self::NonNumeric { raw } | Self::Invalid { raw } => raw,
        }
    }

    /// Payload extracted from the raw output.
    pub fn payload(&self) -> &str {
        extract_payload(self.raw())
    }

    /// Numeric value, if any.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Numeric { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Whether the raw output carries the validity marker.
    pub fn is_marked_valid(&self) -> bool {
        self.raw().contains(VALIDITY_MARKER)
    }
}

/// Adapter over an [`Evaluator`].
#[derive(Debug)]
pub struct ExpressionOracle<E> {
    evaluator: E,
}

impl<E: Evaluator> ExpressionOracle<E> {
    /// Wrap an evaluator.
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Evaluate an expression for display.
    ///
    /// Classified by payload only: `Numeric` when the payload parses as
    /// a float, `NonNumeric` otherwise.
    pub fn evaluate(&mut self, expression: &str) -> OracleResult {
        let raw = self.evaluator.evaluate(expression);
        tracing::debug!(expression, raw = %raw, "Evaluated expression");
        classify(raw)
    }

    /// Evaluate an expression that must succeed, as during sampling.
    ///
    /// Output without [`VALIDITY_MARKER`] is `Invalid` whatever its payload.
    pub fn evaluate_checked(&mut self, expression: &str) -> OracleResult {
        let raw = self.evaluator.evaluate(expression);
        tracing::debug!(expression, raw = %raw, "Evaluated checked expression");
        if !raw.contains(VALIDITY_MARKER) {
            return OracleResult::Invalid { raw };
        }
        classify(raw)
    }

    /// Access the wrapped evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

fn classify(raw: String) -> OracleResult {
    match extract_payload(&raw).trim().parse::<f64>() {
        Ok(value) => OracleResult::Numeric { value, raw },
        Err(_) => OracleResult::NonNumeric { raw },
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Evaluator;

    /// Evaluator driven by a closure, recording every call.
    pub(crate) struct ScriptedEvaluator<F> {
        respond: F,
        pub(crate) calls: Vec<String>,
    }

    impl<F: FnMut(&str) -> String> ScriptedEvaluator<F> {
        pub(crate) fn new(respond: F) -> Self {
            Self {
                respond,
                calls: Vec::new(),
            }
        }
    }

    impl<F: FnMut(&str) -> String> Evaluator for ScriptedEvaluator<F> {
        fn evaluate(&mut self, expression: &str) -> String {
            self.calls.push(expression.to_string());
            (self.respond)(expression)
        }
    }
}
