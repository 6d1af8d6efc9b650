pub mod error;
pub mod functions;
pub mod parser;

pub use error::{ErrorKind, EvalError};
pub use parser::Parser;

use tracing::debug;

/// Evaluates arithmetic expressions.
///
/// The evaluator holds no state of its own: every call to
/// [`Evaluator::evaluate`] builds a fresh [`Parser`], so one instance can be
/// reused freely and shared across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, expr: &str) -> Result<f64, EvalError> {
        let result = Parser::new(expr).run();
        match &result {
            Ok(value) => debug!(expr, value, "evaluated expression"),
            Err(err) => debug!(expr, error = %err, "expression failed"),
        }
        result
    }
}

pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    Evaluator::new().evaluate(expr)
}
