use crate::ast::{EvalError, Function};

pub fn sqrt(argument: f64) -> Result<f64, EvalError> {
    if argument < 0.0 {
        return Err(EvalError::DomainError {
            function: Function::Sqrt,
            argument,
        });
    }
    Ok(argument.sqrt())
}
