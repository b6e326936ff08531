//! Built-in expression interpreter backed by `meval`.

use std::fmt;

use meval::{Context, Expr};

use super::{Evaluator, VALIDITY_MARKER};

/// Interpreter with a persistent variable context.
///
/// Understands plain expressions (`2*x + 1`) and assignments
/// (`var x=3`). Assigned variables stay bound for later calls.
pub struct MevalInterpreter {
    context: Context<'static>,
    variables: Vec<(String, f64)>,
}

impl MevalInterpreter {
    /// Create an interpreter with meval's builtins plus `log`.
    pub fn new() -> Self {
        let mut context = Context::new();
        context.func("log", f64::ln);
        Self {
            context,
            variables: Vec::new(),
        }
    }

    #[cfg(test)]
    fn variable(&self, name: &str) -> Option<f64> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    fn eval_expr(&self, text: &str) -> Result<f64, String> {
        let expr: Expr = text.parse().map_err(|e: meval::Error| e.to_string())?;
        expr.eval_with_context(&self.context)
            .map_err(|e| e.to_string())
    }

    fn assign(&mut self, assignment: &str) -> String {
        let Some((name, value_text)) = assignment.split_once('=') else {
            return "ParseError \"Expected '=' in assignment\"".to_string();
        };
        let name = name.trim();
        if !is_identifier(name) {
            return format!("ParseError \"Invalid variable name '{}'\"", name);
        }

        match self.eval_expr(value_text) {
            Ok(value) => {
                self.context.var(name, value);
                match self.variables.iter_mut().find(|(n, _)| n == name) {
                    Some(slot) => slot.1 = value,
                    None => self.variables.push((name.to_string(), value)),
                }
                tracing::debug!(name, value, "Bound variable");
                valid_output(value)
            },
            Err(e) => format!("EvalError \"{}\"", sanitize(&e)),
        }
    }
}

impl Default for MevalInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MevalInterpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MevalInterpreter")
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}

impl Evaluator for MevalInterpreter {
    fn evaluate(&mut self, expression: &str) -> String {
        let text = expression.trim();
        if text.is_empty() {
            return "Error: empty input".to_string();
        }

        if let Some(assignment) = text.strip_prefix("var ") {
            return self.assign(assignment);
        }

        match self.eval_expr(text) {
            Ok(value) => valid_output(value),
            Err(e) => format!("EvalError \"{}\"", sanitize(&e)),
        }
    }
}

fn valid_output(value: f64) -> String {
    format!("{} \"{}\"", VALIDITY_MARKER, value)
}

// Keep diagnostics inside a single quote pair.
fn sanitize(message: &str) -> String {
    message.replace('"', "'")
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
