use std::fmt;
use std::str::FromStr;

mod error;
mod evaluator;
mod parser;
mod token;

pub use error::*;
pub use evaluator::{evaluate, evaluate_unrounded};
pub use parser::ExpressionParser as Parser;
pub use token::{tokenize, Lexeme, Symbol, Token};

use crate::functions;

#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Literal(f64),
    Constant(Constant),
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<ASTNode>,
    },
    BinaryOperation {
        left: Box<ASTNode>,
        operator: Operator,
        right: Box<ASTNode>,
    },
    FunctionCall {
        function: Function,
        argument: Box<ASTNode>,
    },
    /// Postfix `%`, always `operand / 100`.
    Percent(Box<ASTNode>),
}

/// How trigonometric arguments and results are interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum EvaluationMode {
    #[default]
    Degrees,
    Radians,
}

impl EvaluationMode {
    pub fn toggle(self) -> Self {
        match self {
            EvaluationMode::Degrees => EvaluationMode::Radians,
            EvaluationMode::Radians => EvaluationMode::Degrees,
        }
    }
}

impl fmt::Display for EvaluationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationMode::Degrees => write!(f, "DEG"),
            EvaluationMode::Radians => write!(f, "RAD"),
        }
    }
}

impl FromStr for EvaluationMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "deg" | "degrees" => Ok(EvaluationMode::Degrees),
            "rad" | "radians" => Ok(EvaluationMode::Radians),
            _ => Err(format!("Unknown evaluation mode: {}", value)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

impl TryFrom<&str> for Constant {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pi" => Ok(Constant::Pi),
            "e" => Ok(Constant::E),
            _ => Err(format!("Unknown constant: {}", value)),
        }
    }
}

/// The fixed one-argument function library.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Sqrt,
    Abs,
}

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
        }
    }

    pub fn apply(&self, argument: f64, mode: EvaluationMode) -> Result<f64, EvalError> {
        use functions::trig::{forward, inverse, Ratio};

        match self {
            Function::Sin => Ok(forward(Ratio::Sine, argument, mode)),
            Function::Cos => Ok(forward(Ratio::Cosine, argument, mode)),
            Function::Tan => Ok(forward(Ratio::Tangent, argument, mode)),
            Function::Asin => inverse(Ratio::Sine, argument, mode),
            Function::Acos => inverse(Ratio::Cosine, argument, mode),
            Function::Atan => inverse(Ratio::Tangent, argument, mode),
            Function::Log => functions::logarithm::log10(argument),
            Function::Ln => functions::logarithm::ln(argument),
            Function::Sqrt => functions::other::sqrt(argument),
            Function::Abs => Ok(argument.abs()),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Function {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "sin" => Ok(Function::Sin),
            "cos" => Ok(Function::Cos),
            "tan" => Ok(Function::Tan),
            "asin" => Ok(Function::Asin),
            "acos" => Ok(Function::Acos),
            "atan" => Ok(Function::Atan),
            "log" => Ok(Function::Log),
            "ln" => Ok(Function::Ln),
            "sqrt" => Ok(Function::Sqrt),
            "abs" => Ok(Function::Abs),
            _ => Err(format!("Unknown function: {}", value)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

impl UnaryOperator {
    pub fn apply(&self, operand: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -operand,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Power => {
                let result = left.powf(right);
                if result.is_finite() {
                    Ok(result)
                } else {
                    Err(EvalError::InvalidOperand {
                        base: left,
                        exponent: right,
                    })
                }
            }
        }
    }
}

impl TryFrom<Symbol> for Operator {
    type Error = String;

    fn try_from(value: Symbol) -> Result<Self, Self::Error> {
        match value {
            Symbol::Plus => Ok(Operator::Add),
            Symbol::Minus => Ok(Operator::Subtract),
            Symbol::Star => Ok(Operator::Multiply),
            Symbol::Slash => Ok(Operator::Divide),
            Symbol::Caret => Ok(Operator::Power),
            Symbol::Percent => Err("'%' is a postfix operator".to_string()),
        }
    }
}
