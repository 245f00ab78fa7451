use std::fmt;

use crate::Error;
use crate::ast::{BinaryOperator, Expr};
use crate::lexer::{LexError, Lexer};
use crate::token::{Span, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The current token is not one the grammar allows here.
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: TokenKind,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected ")?;
                for (i, kind) in expected.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{kind}")?;
                }
                write!(f, ", found {found}")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at column {}", span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Parse one arithmetic expression into an expression tree.
///
/// Grammar, with `*` binding tighter than `+`/`-` and every
/// operator left-associative:
///
/// ```text
/// expr   := term ( ('+' | '-') term )*
/// term   := factor ( '*' factor )*
/// factor := INTEGER | '(' expr ')'
/// ```
///
/// Tokens are pulled from the lexer one at a time, so a lexical
/// error surfaces at the point the parser reaches it.
pub fn parse(input: &str) -> Result<Expr, Error> {
    Parser::new(Lexer::new(input))?.parse()
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    fn new(mut lexer: Lexer<'a>) -> Result<Self, LexError> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    fn parse(mut self) -> Result<Expr, Error> {
        let expr = self.expr()?;
        self.expect(TokenKind::EndOfInput)?;
        Ok(expr)
    }

    fn expr(&mut self) -> Result<Expr, Error> {
        let mut node = self.term()?;

        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinaryOperator::Add,
                TokenKind::Minus => BinaryOperator::Subtract,
                _ => break,
            };
            self.advance()?;
            let right = self.term()?;
            node = Expr::binary(node, op, right);
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<Expr, Error> {
        let mut node = self.factor()?;

        while self.current.kind == TokenKind::Multiply {
            self.advance()?;
            let right = self.factor()?;
            node = Expr::binary(node, BinaryOperator::Multiply, right);
        }

        Ok(node)
    }

    fn factor(&mut self) -> Result<Expr, Error> {
        let current = self.current;
        match current {
            Token {
                kind: TokenKind::Integer,
                value: Some(value),
                ..
            } => {
                self.advance()?;
                Ok(Expr::Literal(value))
            }
            Token {
                kind: TokenKind::LeftParen,
                ..
            } => {
                self.advance()?;
                let node = self.expr()?;
                self.expect(TokenKind::RightParen)?;
                Ok(node)
            }
            _ => Err(self
                .unexpected(vec![TokenKind::Integer, TokenKind::LeftParen])
                .into()),
        }
    }

    /// Move to the next token, returning the one just consumed.
    fn advance(&mut self) -> Result<Token, LexError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != kind {
            return Err(self.unexpected(vec![kind]).into());
        }
        Ok(self.advance()?)
    }

    fn unexpected(&self, expected: Vec<TokenKind>) -> ParseError {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected,
                found: self.current.kind,
            },
            span: self.current.span,
        }
    }
}
