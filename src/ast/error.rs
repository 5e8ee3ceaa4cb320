use crate::ast::{Function, Token};
use crate::history::HistoryError;

/// Failure while turning raw text into tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("malformed number '{literal}' at position {position}")]
    MalformedNumber { literal: String, position: usize },

    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedCharacter(char, usize),
}

/// Failure while building an AST from a token sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("unexpected token '{0}' at position {1}")]
    UnexpectedToken(Token, usize),

    #[error("function '{0}' must be followed by '('")]
    MissingArgumentList(String),

    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("empty expression")]
    EmptyExpression,

    #[error("expression nested too deeply at position {0}")]
    NestingTooDeep(usize),
}

/// Failure while walking an AST.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{function}({argument}) is outside the function's domain")]
    DomainError { function: Function, argument: f64 },

    #[error("invalid operands for exponentiation: {base}^{exponent}")]
    InvalidOperand { base: f64, exponent: f64 },

    #[error("result is not a finite number")]
    NotFinite,
}

/// Any failure of the tokenize -> parse -> evaluate pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("history error: {0}")]
    History(#[from] HistoryError),
}

impl CalcError {
    /// The text a calculator display shows for every kind of failure.
    pub fn display_text(&self) -> &'static str {
        "Error"
    }
}
