use crate::ast::{EvalError, EvaluationMode, Function};
use log::trace;

/// The three ratios the calculator exposes, forwards and inverted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Ratio {
    Sine,
    Cosine,
    Tangent,
}

impl Ratio {
    /// The calculator function that inverts this ratio.
    pub fn inverse_function(self) -> Function {
        match self {
            Ratio::Sine => Function::Asin,
            Ratio::Cosine => Function::Acos,
            Ratio::Tangent => Function::Atan,
        }
    }
}

/// Applies `sin`, `cos` or `tan`. In degree mode the argument is converted to radians first.
pub fn forward(ratio: Ratio, argument: f64, mode: EvaluationMode) -> f64 {
    let radians = match mode {
        EvaluationMode::Degrees => argument.to_radians(),
        EvaluationMode::Radians => argument,
    };
    trace!("{:?}({}) in {} -> {} rad", ratio, argument, mode, radians);
    match ratio {
        Ratio::Sine => radians.sin(),
        Ratio::Cosine => radians.cos(),
        Ratio::Tangent => radians.tan(),
    }
}

/// Applies `asin`, `acos` or `atan`. In degree mode the result is converted to degrees.
pub fn inverse(ratio: Ratio, argument: f64, mode: EvaluationMode) -> Result<f64, EvalError> {
    let radians = match ratio {
        Ratio::Sine | Ratio::Cosine if !(-1.0..=1.0).contains(&argument) => {
            return Err(EvalError::DomainError {
                function: ratio.inverse_function(),
                argument,
            });
        }
        Ratio::Sine => argument.asin(),
        Ratio::Cosine => argument.acos(),
        Ratio::Tangent => argument.atan(),
    };
    Ok(match mode {
        EvaluationMode::Degrees => radians.to_degrees(),
        EvaluationMode::Radians => radians,
    })
}
