//! Per-line evaluation: substitute, normalize, parse, evaluate.

use crate::Error;
use crate::ast::BinaryOperator;
use crate::evaluator::{EvalError, apply, evaluate};
use crate::normalize::normalize;
use crate::parser::parse;
use crate::substitute::substitute;
use crate::variables::VariableTable;

/// Evaluate raw expression text against the current bindings.
///
/// Arithmetic runs in `i128`; only the final value, after the
/// leading-sign multiplier, must fit `i64`.
///
/// ```
/// use assigncalc::{VariableTable, evaluate_expression};
///
/// let vars = VariableTable::new().with("a", 4);
/// assert_eq!(evaluate_expression("a--2*a", &vars).unwrap(), 12);
/// ```
pub fn evaluate_expression(expression: &str, variables: &VariableTable) -> Result<i64, Error> {
    let substituted = substitute(expression, variables)?;
    let normalized = normalize(&substituted);
    let tree = parse(&normalized.text)?;
    let value = apply(
        evaluate(&tree)?,
        BinaryOperator::Multiply,
        i128::from(normalized.multiplier),
    )?;
    i64::try_from(value).map_err(|_| EvalError::OutOfRange(value).into())
}

/// Evaluate one assignment and bind its result to `identifier`.
///
/// On failure the table is left untouched.
pub fn evaluate_line(
    identifier: &str,
    expression: &str,
    variables: &mut VariableTable,
) -> Result<i64, Error> {
    let value = evaluate_expression(expression, variables)?;
    variables.bind(identifier, value);
    Ok(value)
}
