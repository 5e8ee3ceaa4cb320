use crate::ast::LexError;
use log::{debug, trace};
use std::fmt;

/// Operator characters recognised by the tokenizer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Percent,
}

impl Symbol {
    pub fn as_char(&self) -> char {
        match self {
            Symbol::Plus => '+',
            Symbol::Minus => '-',
            Symbol::Star => '*',
            Symbol::Slash => '/',
            Symbol::Caret => '^',
            Symbol::Percent => '%',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    /// Function or constant name. Whether it is a call is decided by the parser.
    Identifier(String),
    Operator(Symbol),
    LeftParen,
    RightParen,
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Operator(symbol) => write!(f, "{}", symbol.as_char()),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::End => write!(f, "end of input"),
        }
    }
}

/// A token together with the character offset it started at.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}

impl Lexeme {
    pub fn new(token: Token, position: usize) -> Self {
        Self { token, position }
    }
}

/// Tokenizes an expression into lexemes.
///
/// Supports:
/// - decimal numerals with at most one `.` (`12`, `0.5`, `.5`, `5.`)
/// - ASCII identifiers, case-sensitive (`sin`, `pi`, ...)
/// - operators `+ - * / ^ %`, with `×` and `÷` as aliases of `*` and `/`
/// - parentheses
/// - `√` as the identifier `sqrt`, `π` as the identifier `pi`
///
/// The returned sequence always ends with a single [`Token::End`].
pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, LexError> {
    let chars: Vec<char> = input.chars().collect();
    let mut lexemes = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let end = scan_while(&chars, i, |c| c.is_ascii_digit() || c == '.');
            let literal: String = chars[i..end].iter().collect();
            lexemes.push(Lexeme::new(parse_number(literal, i)?, i));
            i = end;
            continue;
        }

        if c.is_ascii_alphabetic() {
            let end = scan_while(&chars, i, |c| c.is_ascii_alphabetic());
            let name: String = chars[i..end].iter().collect();
            lexemes.push(Lexeme::new(Token::Identifier(name), i));
            i = end;
            continue;
        }

        let token = match c {
            '+' => Token::Operator(Symbol::Plus),
            '-' => Token::Operator(Symbol::Minus),
            '*' | '×' => Token::Operator(Symbol::Star),
            '/' | '÷' => Token::Operator(Symbol::Slash),
            '^' => Token::Operator(Symbol::Caret),
            '%' => Token::Operator(Symbol::Percent),
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '√' => Token::Identifier("sqrt".to_string()),
            'π' => Token::Identifier("pi".to_string()),
            _ => return Err(LexError::UnexpectedCharacter(c, i)),
        };
        trace!("Token {:?} at {}", token, i);
        lexemes.push(Lexeme::new(token, i));
        i += 1;
    }

    lexemes.push(Lexeme::new(Token::End, chars.len()));
    debug!("Tokenized {:?} into {} tokens", input, lexemes.len());
    Ok(lexemes)
}

fn scan_while(chars: &[char], start: usize, accept: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    while end < chars.len() && accept(chars[end]) {
        end += 1;
    }
    end
}

fn parse_number(literal: String, position: usize) -> Result<Token, LexError> {
    let dots = literal.chars().filter(|c| *c == '.').count();
    if dots > 1 {
        return Err(LexError::MalformedNumber { literal, position });
    }
    match literal.parse::<f64>() {
        Ok(value) => Ok(Token::Number(value)),
        Err(_) => Err(LexError::MalformedNumber { literal, position }),
    }
}
