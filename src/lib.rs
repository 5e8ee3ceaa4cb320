pub mod ast;
pub mod config;
pub mod format;
pub mod functions;
pub mod history;
pub mod session;

use ast::{evaluate, CalcError, EvaluationMode, Parser};
use rayon::prelude::*;

pub use config::CalculatorConfig;
pub use history::{HistoryEntry, HistoryStore};
pub use session::Calculator;

/// Tokenizes, parses and evaluates `expression` in the given mode.
pub fn evaluate_expression(expression: &str, mode: EvaluationMode) -> Result<f64, CalcError> {
    let ast = Parser::parse_expression(expression)?;
    Ok(evaluate(&ast, mode)?)
}

/// Evaluates independent expressions in parallel. Results keep the input order.
pub fn evaluate_batch<S>(expressions: &[S], mode: EvaluationMode) -> Vec<Result<f64, CalcError>>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| evaluate_expression(expression.as_ref(), mode))
        .collect()
}
