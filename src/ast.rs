use std::fmt;

/// Expression tree produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Non-negative integer literal.
    Literal(u64),
    /// Binary operation owning both operands.
    Binary {
        left: Box<Self>,
        op: BinaryOperator,
        right: Box<Self>,
    },
}

/// Operators that may join two subexpressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
}

impl Expr {
    /// Build a binary node from two subtrees.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Subtract => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
        }
    }
}

/// Fully parenthesised rendering, handy for checking tree shape.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
