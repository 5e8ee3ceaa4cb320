use crate::ast::{EvalError, Function};

pub fn log10(argument: f64) -> Result<f64, EvalError> {
    positive(Function::Log, argument).map(f64::log10)
}

pub fn ln(argument: f64) -> Result<f64, EvalError> {
    positive(Function::Ln, argument).map(f64::ln)
}

fn positive(function: Function, argument: f64) -> Result<f64, EvalError> {
    if argument > 0.0 {
        Ok(argument)
    } else {
        Err(EvalError::DomainError { function, argument })
    }
}
