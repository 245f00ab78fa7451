use std::fmt;

/// Position of a token within a single expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// 1-based character column.
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Non-negative integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// End of the expression text. Repeats once reached.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Multiply => write!(f, "'*'"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A single token with its kind, integer payload, and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal value, present only for `TokenKind::Integer`.
    pub value: Option<u64>,
    pub span: Span,
}
