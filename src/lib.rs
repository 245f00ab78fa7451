//! Evaluator for line-oriented integer assignment scripts.
//!
//! A script is a sequence of `identifier = expression;` lines.
//! Expressions combine non-negative integer literals and earlier
//! variables with `+`, `-`, `*` and parentheses. Each line is run
//! through the same pipeline:
//!
//! 1. [`substitute()`] replaces identifiers with their current values.
//! 2. [`normalize()`] folds runs of `+`/`-` into one sign and lifts a
//!    leading sign out as a multiplier.
//! 3. [`parse`] builds an [`Expr`] tree by recursive descent, pulling
//!    tokens from the [`Lexer`] on demand.
//! 4. [`evaluate`] walks the tree with checked `i128` arithmetic; the
//!    result must fit `i64` to be bound.
//!
//! # Quick start
//!
//! ## Run a whole script
//!
//! ```
//! use assigncalc::{report, run_str};
//!
//! let vars = run_str("a = 1;\nb = a + 2;\n").unwrap();
//! assert_eq!(vars.get("b"), Some(3));
//! assert_eq!(report::format(&vars), "a  = 1\nb  = 3\n");
//! ```
//!
//! ## Evaluate one expression
//!
//! ```
//! use assigncalc::{VariableTable, evaluate_expression};
//!
//! let vars = VariableTable::new().with("x", 3);
//! assert_eq!(evaluate_expression("(x+1)*2--x", &vars).unwrap(), 11);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod normalize;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod script;
pub mod substitute;
pub mod token;
pub mod variables;

pub use ast::{BinaryOperator, Expr};
pub use evaluator::{EvalError, evaluate};
pub use lexer::{LexError, LexErrorKind, Lexer, tokenize};
pub use normalize::{Normalized, normalize};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use pipeline::{evaluate_expression, evaluate_line};
pub use script::{LineRecord, ScriptError, ScriptErrorKind, parse_script, run_lines};
pub use substitute::substitute;
pub use token::{Span, Token, TokenKind};
pub use variables::VariableTable;

/// Unified error type covering every expression stage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// A substitution or arithmetic error.
    #[error("{0}")]
    Eval(#[from] EvalError),
}

/// Split and run a whole script against a fresh variable table.
pub fn run_str(source: &str) -> Result<VariableTable, ScriptError> {
    let records = parse_script(source)?;
    let mut variables = VariableTable::new();
    run_lines(&records, &mut variables)?;
    Ok(variables)
}
