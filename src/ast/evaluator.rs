use crate::ast::{ASTNode, EvalError, EvaluationMode};
use crate::config::DEFAULT_PRECISION;
use crate::format::round_to_decimals;
use log::debug;

/// Evaluates an AST and rounds the result to ten decimal places.
///
/// Rounding happens once, on the final value; subexpressions keep full precision.
pub fn evaluate(ast: &ASTNode, mode: EvaluationMode) -> Result<f64, EvalError> {
    let value = evaluate_unrounded(ast, mode)?;
    let rounded = round_to_decimals(value, DEFAULT_PRECISION);
    debug!("Evaluated in {}: {} (rounded {})", mode, value, rounded);
    Ok(rounded)
}

/// Evaluates an AST without the final rounding step.
///
/// Every node's value is checked: a NaN or infinity not reported as a more specific
/// error surfaces as [`EvalError::NotFinite`].
pub fn evaluate_unrounded(ast: &ASTNode, mode: EvaluationMode) -> Result<f64, EvalError> {
    let value = match ast {
        ASTNode::Literal(value) => *value,

        ASTNode::Constant(constant) => constant.value(),

        ASTNode::UnaryOperation { operator, operand } => {
            operator.apply(evaluate_unrounded(operand, mode)?)
        }

        ASTNode::BinaryOperation {
            left,
            operator,
            right,
        } => {
            let left_value = evaluate_unrounded(left, mode)?;
            let right_value = evaluate_unrounded(right, mode)?;
            operator.apply(left_value, right_value)?
        }

        ASTNode::FunctionCall { function, argument } => {
            function.apply(evaluate_unrounded(argument, mode)?, mode)?
        }

        ASTNode::Percent(operand) => evaluate_unrounded(operand, mode)? / 100.0,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NotFinite)
    }
}
