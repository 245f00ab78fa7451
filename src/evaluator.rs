use crate::ast::{BinaryOperator, Expr};

/// Errors raised while resolving or computing a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Identifier referenced before any assignment to it.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
    /// Text still held an identifier character after substitution.
    #[error("unresolved character after substitution: {0}")]
    InternalInconsistency(char),
    /// Intermediate result does not fit a 128-bit signed integer.
    #[error("integer overflow evaluating {left} {op} {right}")]
    Overflow {
        left: i128,
        op: BinaryOperator,
        right: i128,
    },
    /// Final value does not fit the 64-bit signed range of a variable.
    #[error("value out of range for a variable: {0}")]
    OutOfRange(i128),
}

/// Compute the value of an expression tree with checked `i128`
/// arithmetic.
///
/// Literals are unsigned 64-bit magnitudes, so the working width
/// must exceed `i64` for `-9223372036854775808` to round-trip.
pub fn evaluate(expr: &Expr) -> Result<i128, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(i128::from(*value)),
        Expr::Binary { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            apply(left, *op, right)
        }
    }
}

pub(crate) fn apply(left: i128, op: BinaryOperator, right: i128) -> Result<i128, EvalError> {
    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Subtract => left.checked_sub(right),
        BinaryOperator::Multiply => left.checked_mul(right),
    };
    result.ok_or(EvalError::Overflow { left, op, right })
}
