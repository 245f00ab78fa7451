use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// Digit run with a leading zero, such as `007`.
    MalformedInteger(String),
    /// Digit run that does not fit a 64-bit unsigned integer.
    IntegerTooLarge(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch}")
            }
            Self::MalformedInteger(text) => {
                write!(f, "malformed integer: {text}")
            }
            Self::IntegerTooLarge(text) => {
                write!(f, "integer too large: {text}")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at column {}", span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize a whole expression eagerly.
///
/// The terminal `EndOfInput` token is not included.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.kind == TokenKind::EndOfInput {
            return Ok(tokens);
        }
        tokens.push(token);
    }
}

/// On-demand tokenizer over one expression.
///
/// Once the input is exhausted every further call to
/// [`Lexer::next_token`] yields `EndOfInput` again.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Produce the next token and advance past it.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let span = self.span();

        let Some(ch) = self.peek() else {
            return Ok(Self::make_token(TokenKind::EndOfInput, span));
        };

        let kind = match ch {
            b'0'..=b'9' => return self.read_integer(),
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Multiply,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            _ => {
                let unexpected = self.source[self.pos..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError {
                    kind: LexErrorKind::UnexpectedCharacter(unexpected),
                    span,
                });
            }
        };

        self.pos += 1;
        Ok(Self::make_token(kind, span))
    }

    const fn span(&self) -> Span {
        Span {
            column: self.pos + 1,
        }
    }

    const fn make_token(kind: TokenKind, span: Span) -> Token {
        Token {
            kind,
            value: None,
            span,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn read_integer(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;

        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }

        let text = &self.source[start..self.pos];

        // Only "0" itself may start with a zero.
        if text.len() > 1 && text.starts_with('0') {
            return Err(LexError {
                kind: LexErrorKind::MalformedInteger(text.to_string()),
                span,
            });
        }

        let value = text.parse::<u64>().map_err(|_| LexError {
            kind: LexErrorKind::IntegerTooLarge(text.to_string()),
            span,
        })?;

        Ok(Token {
            kind: TokenKind::Integer,
            value: Some(value),
            span,
        })
    }
}
