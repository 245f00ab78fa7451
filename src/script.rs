//! Script driver: splits source text into assignments and runs them
//! in order.

use std::fmt;

use crate::Error;
use crate::pipeline::evaluate_line;
use crate::substitute::is_identifier;
use crate::variables::VariableTable;

/// One `identifier = expression;` line, already split and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// 1-based line number in the script.
    pub line: usize,
    pub identifier: String,
    pub expression: String,
}

/// Classifies a script error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    /// Line does not end with `;`.
    MissingSemicolon,
    /// Line does not contain exactly one `=`.
    MalformedAssignment,
    /// Left-hand side is not a valid identifier.
    InvalidIdentifier(String),
    /// Right-hand side failed to evaluate.
    Expression(Error),
}

impl fmt::Display for ScriptErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSemicolon => write!(f, "missing ';' at end of line"),
            Self::MalformedAssignment => {
                write!(f, "expected exactly one '=' in assignment")
            }
            Self::InvalidIdentifier(name) => {
                write!(f, "invalid identifier: '{name}'")
            }
            Self::Expression(err) => write!(f, "{err}"),
        }
    }
}

/// Error produced while running a script, tagged with its line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    pub kind: ScriptErrorKind,
    pub line: usize,
}

/// Split script source into assignment records.
///
/// Trailing whitespace is ignored and blank lines are skipped.
pub fn parse_script(source: &str) -> Result<Vec<LineRecord>, ScriptError> {
    let mut records = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim_end();
        if text.is_empty() {
            continue;
        }
        records.push(parse_line(text, line)?);
    }

    Ok(records)
}

fn parse_line(text: &str, line: usize) -> Result<LineRecord, ScriptError> {
    let error = |kind| ScriptError { kind, line };

    let body = text
        .strip_suffix(';')
        .ok_or_else(|| error(ScriptErrorKind::MissingSemicolon))?;

    let mut sides = body.split('=');
    let (Some(name), Some(expression), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(error(ScriptErrorKind::MalformedAssignment));
    };

    let identifier = name.trim();
    if !is_identifier(identifier) {
        return Err(error(ScriptErrorKind::InvalidIdentifier(
            identifier.to_string(),
        )));
    }

    Ok(LineRecord {
        line,
        identifier: identifier.to_string(),
        expression: expression.trim().to_string(),
    })
}

/// Evaluate records in order, binding each result into `variables`.
///
/// Stops at the first failing line; bindings made by earlier lines
/// remain in the table.
pub fn run_lines(records: &[LineRecord], variables: &mut VariableTable) -> Result<(), ScriptError> {
    for record in records {
        evaluate_line(&record.identifier, &record.expression, variables).map_err(|err| {
            ScriptError {
                kind: ScriptErrorKind::Expression(err),
                line: record.line,
            }
        })?;
    }
    Ok(())
}
