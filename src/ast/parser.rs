use crate::ast::{
    tokenize, ASTNode, CalcError, Constant, Function, Lexeme, Operator, ParseError, Symbol, Token,
    UnaryOperator,
};
use log::debug;

/// Deepest nesting of groups, signs, exponents and operator chains the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser over the calculator grammar, lowest precedence first:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := unary (('*' | '/') unary)*
/// unary      := '-' unary | power
/// power      := postfix ('^' unary)?
/// postfix    := primary '%'?
/// primary    := NUMBER | CONST | FUNC '(' expression ')' | '(' expression ')'
/// ```
///
/// `^` is right-associative and binds tighter than unary minus, so `-2^2` is `-(2^2)`
/// while `2^-1` still parses.
///
/// Input nesting past [`MAX_NESTING_DEPTH`] is rejected with [`ParseError::NestingTooDeep`],
/// which also bounds the depth of every AST the evaluator walks.
pub struct ExpressionParser {
    lexemes: Vec<Lexeme>,
    cursor: usize,
    depth: usize,
    nesting: usize,
}

impl ExpressionParser {
    /// Tokenizes and parses `input` in one step.
    pub fn parse_expression(input: &str) -> Result<ASTNode, CalcError> {
        debug!("Parsing expression: {}", input);
        let lexemes = tokenize(input)?;
        let ast = Self::parse(lexemes)?;
        debug!("Parse result: {:?}", ast);
        Ok(ast)
    }

    /// Parses a token sequence produced by [`tokenize`].
    pub fn parse(lexemes: Vec<Lexeme>) -> Result<ASTNode, ParseError> {
        let mut parser = Self::new(lexemes);

        if parser.peek() == &Token::End {
            return Err(ParseError::EmptyExpression);
        }

        let node = parser.build_expression()?;

        match parser.peek() {
            Token::End => Ok(node),
            Token::RightParen => Err(ParseError::UnbalancedParentheses),
            _ => Err(parser.unexpected()),
        }
    }

    fn new(mut lexemes: Vec<Lexeme>) -> Self {
        // End is the only terminator the grammar accepts; guarantee it is there.
        if !matches!(lexemes.last(), Some(Lexeme { token: Token::End, .. })) {
            let position = lexemes.last().map_or(0, |lexeme| lexeme.position + 1);
            lexemes.push(Lexeme::new(Token::End, position));
        }
        Self {
            lexemes,
            cursor: 0,
            depth: 0,
            nesting: 0,
        }
    }

    fn current(&self) -> &Lexeme {
        // cursor never moves past the trailing End
        &self.lexemes[self.cursor]
    }

    fn peek(&self) -> &Token {
        &self.current().token
    }

    fn advance(&mut self) {
        if self.cursor + 1 < self.lexemes.len() {
            self.cursor += 1;
        }
    }

    fn peek_symbol(&self) -> Option<Symbol> {
        match self.peek() {
            Token::Operator(symbol) => Some(*symbol),
            _ => None,
        }
    }

    fn next_is(&self, symbol: Symbol) -> bool {
        self.peek_symbol() == Some(symbol)
    }

    fn unexpected(&self) -> ParseError {
        let lexeme = self.current();
        ParseError::UnexpectedToken(lexeme.token.clone(), lexeme.position)
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.nesting >= MAX_NESTING_DEPTH {
            debug!("Nesting limit reached at {:?}", self.current());
            return Err(ParseError::NestingTooDeep(self.current().position));
        }
        self.nesting += 1;
        Ok(())
    }

    fn build_expression(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.build_term()?;
        // every folded operator deepens the left spine by one
        let outer = self.nesting;

        while let Some(symbol @ (Symbol::Plus | Symbol::Minus)) = self.peek_symbol() {
            let operator = Operator::try_from(symbol).map_err(|_| self.unexpected())?;
            self.descend()?;
            self.advance();
            let right = self.build_term()?;
            node = ASTNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        self.nesting = outer;
        Ok(node)
    }

    fn build_term(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.build_unary()?;
        let outer = self.nesting;

        while let Some(symbol @ (Symbol::Star | Symbol::Slash)) = self.peek_symbol() {
            let operator = Operator::try_from(symbol).map_err(|_| self.unexpected())?;
            self.descend()?;
            self.advance();
            let right = self.build_unary()?;
            node = ASTNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        self.nesting = outer;
        Ok(node)
    }

    /// Every recursive path (signs, exponents, groups) passes through here.
    fn build_unary(&mut self) -> Result<ASTNode, ParseError> {
        self.descend()?;

        let node = if self.next_is(Symbol::Minus) {
            self.advance();
            self.build_unary().map(|operand| ASTNode::UnaryOperation {
                operator: UnaryOperator::Negate,
                operand: Box::new(operand),
            })
        } else {
            self.build_power()
        };

        self.nesting -= 1;
        node
    }

    fn build_power(&mut self) -> Result<ASTNode, ParseError> {
        let base = self.build_postfix()?;

        if !self.next_is(Symbol::Caret) {
            return Ok(base);
        }
        self.advance();
        // Recursing through unary makes `^` right-associative.
        let exponent = self.build_unary()?;
        Ok(ASTNode::BinaryOperation {
            left: Box::new(base),
            operator: Operator::Power,
            right: Box::new(exponent),
        })
    }

    fn build_postfix(&mut self) -> Result<ASTNode, ParseError> {
        let primary = self.build_primary_expression()?;

        if self.next_is(Symbol::Percent) {
            self.advance();
            return Ok(ASTNode::Percent(Box::new(primary)));
        }
        Ok(primary)
    }

    fn build_primary_expression(&mut self) -> Result<ASTNode, ParseError> {
        match self.peek().clone() {
            Token::Number(value) => {
                self.advance();
                Ok(ASTNode::Literal(value))
            }
            Token::Identifier(name) => self.build_identifier(name),
            Token::LeftParen => {
                self.advance();
                self.build_group()
            }
            Token::RightParen if self.depth == 0 => Err(ParseError::UnbalancedParentheses),
            _ => {
                debug!("Unexpected token in primary expression: {:?}", self.current());
                Err(self.unexpected())
            }
        }
    }

    fn build_identifier(&mut self, name: String) -> Result<ASTNode, ParseError> {
        if let Ok(constant) = Constant::try_from(name.as_str()) {
            self.advance();
            return Ok(ASTNode::Constant(constant));
        }

        let function = Function::try_from(name.as_str())
            .map_err(|_| ParseError::UnknownIdentifier(name.clone()))?;
        self.advance();

        if self.peek() != &Token::LeftParen {
            return Err(ParseError::MissingArgumentList(name));
        }
        self.advance();

        let argument = self.build_group()?;
        Ok(ASTNode::FunctionCall {
            function,
            argument: Box::new(argument),
        })
    }

    /// Parses the inside of a group whose `(` was just consumed, and its `)`.
    fn build_group(&mut self) -> Result<ASTNode, ParseError> {
        self.depth += 1;
        let inner = self.build_expression()?;

        match self.peek() {
            Token::RightParen => {
                self.advance();
                self.depth -= 1;
                Ok(inner)
            }
            Token::End => Err(ParseError::UnbalancedParentheses),
            _ => Err(self.unexpected()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<ASTNode, ParseError> {
        ExpressionParser::parse(tokenize(input).unwrap())
    }

    fn num(value: f64) -> Box<ASTNode> {
        Box::new(ASTNode::Literal(value))
    }

    #[test]
    fn test_precedence_of_multiplication() {
        let ast = parse("2+3*4").unwrap();
        let expected_ast = ASTNode::BinaryOperation {
            left: num(2.0),
            operator: Operator::Add,
            right: Box::new(ASTNode::BinaryOperation {
                left: num(3.0),
                operator: Operator::Multiply,
                right: num(4.0),
            }),
        };
        assert_eq!(ast, expected_ast);
    }

    #[test]
    fn test_left_associative_subtraction() {
        let ast = parse("10-4-3").unwrap();
        let expected_ast = ASTNode::BinaryOperation {
            left: Box::new(ASTNode::BinaryOperation {
                left: num(10.0),
                operator: Operator::Subtract,
                right: num(4.0),
            }),
            operator: Operator::Subtract,
            right: num(3.0),
        };
        assert_eq!(ast, expected_ast);
    }

    #[test]
    fn test_right_associative_power() {
        let ast = parse("2^3^2").unwrap();
        let expected_ast = ASTNode::BinaryOperation {
            left: num(2.0),
            operator: Operator::Power,
            right: Box::new(ASTNode::BinaryOperation {
                left: num(3.0),
                operator: Operator::Power,
                right: num(2.0),
            }),
        };
        assert_eq!(ast, expected_ast);
    }

    #[test]
    fn test_unary_minus_is_looser_than_power() {
        let ast = parse("-2^2").unwrap();
        let expected_ast = ASTNode::UnaryOperation {
            operator: UnaryOperator::Negate,
            operand: Box::new(ASTNode::BinaryOperation {
                left: num(2.0),
                operator: Operator::Power,
                right: num(2.0),
            }),
        };
        assert_eq!(ast, expected_ast);
    }

    #[test]
    fn test_negative_exponent() {
        let ast = parse("2^-1").unwrap();
        let expected_ast = ASTNode::BinaryOperation {
            left: num(2.0),
            operator: Operator::Power,
            right: Box::new(ASTNode::UnaryOperation {
                operator: UnaryOperator::Negate,
                operand: num(1.0),
            }),
        };
        assert_eq!(ast, expected_ast);
    }

    #[test]
    fn test_function_call_and_constant() {
        let ast = parse("sin(pi/2)").unwrap();
        let expected_ast = ASTNode::FunctionCall {
            function: Function::Sin,
            argument: Box::new(ASTNode::BinaryOperation {
                left: Box::new(ASTNode::Constant(Constant::Pi)),
                operator: Operator::Divide,
                right: num(2.0),
            }),
        };
        assert_eq!(ast, expected_ast);
    }

    #[test]
    fn test_percent_binds_to_primary() {
        let ast = parse("200*50%").unwrap();
        let expected_ast = ASTNode::BinaryOperation {
            left: num(200.0),
            operator: Operator::Multiply,
            right: Box::new(ASTNode::Percent(num(50.0))),
        };
        assert_eq!(ast, expected_ast);

        let ast = parse("(1+1)%").unwrap();
        assert!(matches!(ast, ASTNode::Percent(_)));
    }

    #[test]
    fn test_grouping_is_transparent() {
        assert_eq!(parse("((7))").unwrap(), ASTNode::Literal(7.0));
    }

    #[test]
    fn test_root_glyph_parses_as_sqrt() {
        assert_eq!(parse("√(9)").unwrap(), parse("sqrt(9)").unwrap());
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression));
        assert_eq!(parse("   "), Err(ParseError::EmptyExpression));
        assert_eq!(
            ExpressionParser::parse(Vec::new()),
            Err(ParseError::EmptyExpression)
        );
    }

    #[test]
    fn test_missing_argument_list() {
        assert_eq!(
            parse("sin"),
            Err(ParseError::MissingArgumentList("sin".to_string()))
        );
        assert_eq!(
            parse("√9"),
            Err(ParseError::MissingArgumentList("sqrt".to_string()))
        );
        assert_eq!(
            parse("2*log 100"),
            Err(ParseError::MissingArgumentList("log".to_string()))
        );
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(parse("(2+3"), Err(ParseError::UnbalancedParentheses));
        assert_eq!(parse("2+3)"), Err(ParseError::UnbalancedParentheses));
        assert_eq!(parse("sin(30"), Err(ParseError::UnbalancedParentheses));
        assert_eq!(parse(")"), Err(ParseError::UnbalancedParentheses));
        assert_eq!(parse("((1)"), Err(ParseError::UnbalancedParentheses));
    }

    #[test]
    fn test_unexpected_tokens() {
        assert_eq!(parse("2+"), Err(ParseError::UnexpectedToken(Token::End, 2)));
        assert_eq!(
            parse("2 3"),
            Err(ParseError::UnexpectedToken(Token::Number(3.0), 2))
        );
        assert_eq!(
            parse("*2"),
            Err(ParseError::UnexpectedToken(Token::Operator(Symbol::Star), 0))
        );
        assert_eq!(
            parse("()"),
            Err(ParseError::UnexpectedToken(Token::RightParen, 1))
        );
        assert_eq!(
            parse("5%%"),
            Err(ParseError::UnexpectedToken(
                Token::Operator(Symbol::Percent),
                2
            ))
        );
        assert_eq!(parse("pi(2)"), Err(ParseError::UnexpectedToken(Token::LeftParen, 2)));
    }

    #[test]
    fn test_unknown_identifiers() {
        assert_eq!(
            parse("pow(2)"),
            Err(ParseError::UnknownIdentifier("pow".to_string()))
        );
        assert_eq!(
            parse("Sin(30)"),
            Err(ParseError::UnknownIdentifier("Sin".to_string()))
        );
        assert_eq!(
            parse("2*x"),
            Err(ParseError::UnknownIdentifier("x".to_string()))
        );
    }

    #[test]
    fn test_parse_expression_reports_each_stage() {
        assert!(matches!(
            ExpressionParser::parse_expression("2 $ 3"),
            Err(CalcError::Lex(_))
        ));
        assert!(matches!(
            ExpressionParser::parse_expression("2 +"),
            Err(CalcError::Parse(_))
        ));
        assert!(ExpressionParser::parse_expression("1/0").is_ok());
    }

    #[test]
    fn test_deep_parentheses_are_rejected() {
        let input = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(parse(&input), Err(ParseError::NestingTooDeep(_))));

        let input = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse(&input), Ok(ASTNode::Literal(1.0)));
    }

    #[test]
    fn test_long_sign_chains_are_rejected() {
        let input = format!("{}1", "-".repeat(10_000));
        assert!(matches!(parse(&input), Err(ParseError::NestingTooDeep(_))));

        let input = format!("{}1", "-".repeat(MAX_NESTING_DEPTH - 1));
        assert!(parse(&input).is_ok());

        let input = format!("{}1", "-".repeat(MAX_NESTING_DEPTH));
        assert_eq!(
            parse(&input),
            Err(ParseError::NestingTooDeep(MAX_NESTING_DEPTH))
        );
    }

    #[test]
    fn test_deep_exponents_and_operator_chains_are_rejected() {
        let input = format!("{}2", "2^".repeat(10_000));
        assert!(matches!(parse(&input), Err(ParseError::NestingTooDeep(_))));

        let input = format!("{}1", "1+".repeat(10_000));
        assert!(matches!(parse(&input), Err(ParseError::NestingTooDeep(_))));

        let input = format!("{}1", "sin(".repeat(10_000));
        assert!(matches!(parse(&input), Err(ParseError::NestingTooDeep(_))));

        let input = format!("{}1", "1*".repeat(100));
        assert!(parse(&input).is_ok());
    }
}
