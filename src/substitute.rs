//! Replaces variable references with their current values.
//!
//! The expression is scanned once, left to right. Each maximal run
//! matching `[_a-z][A-Za-z0-9_]*` is treated as one identifier and
//! replaced by the decimal text of its value, so a name that is a
//! prefix of another (`a` and `ab`) never clobbers the longer one.

use crate::evaluator::EvalError;
use crate::variables::VariableTable;

/// Characters that may begin an identifier.
#[must_use]
pub const fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch == '_'
}

/// Characters that may continue an identifier.
#[must_use]
pub const fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Whether `text` is exactly one identifier.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_char)
}

/// Resolve every identifier in `expression` against `variables`.
///
/// Fails with [`EvalError::UndefinedVariable`] on the first name
/// with no binding. Any letter or underscore left over afterwards
/// (an uppercase letter outside an identifier, say) is reported as
/// [`EvalError::InternalInconsistency`].
pub fn substitute(expression: &str, variables: &VariableTable) -> Result<String, EvalError> {
    let mut out = String::with_capacity(expression.len());
    let mut chars = expression.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if !is_identifier_start(ch) {
            out.push(ch);
            continue;
        }

        let mut end = start + ch.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if !is_identifier_char(next) {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        let name = &expression[start..end];
        let value = variables
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))?;
        out.push_str(&value.to_string());
    }

    if let Some(leftover) = out.chars().find(|c| c.is_alphabetic() || *c == '_') {
        return Err(EvalError::InternalInconsistency(leftover));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_names() {
        let vars = VariableTable::new().with("x", 4).with("y_2", 10);
        assert_eq!(substitute("x + y_2*x", &vars), Ok("4 + 10*4".to_string()));
    }

    #[test]
    fn prefix_names_do_not_collide() {
        let vars = VariableTable::new().with("a", 1).with("ab", 23);
        assert_eq!(substitute("ab+a", &vars), Ok("23+1".to_string()));
    }

    #[test]
    fn negative_value_keeps_sign() {
        let vars = VariableTable::new().with("n", -5);
        assert_eq!(substitute("3-n", &vars), Ok("3--5".to_string()));
    }

    #[test]
    fn undefined_variable() {
        let vars = VariableTable::new();
        assert_eq!(
            substitute("x+1", &vars),
            Err(EvalError::UndefinedVariable("x".to_string()))
        );
    }

    #[test]
    fn uppercase_is_left_unresolved() {
        let vars = VariableTable::new();
        assert_eq!(
            substitute("1+X", &vars),
            Err(EvalError::InternalInconsistency('X'))
        );
    }

    #[test]
    fn non_ascii_letter_ends_a_name() {
        let vars = VariableTable::new().with("a", 1);
        assert_eq!(
            substitute("aé+2", &vars),
            Err(EvalError::InternalInconsistency('é'))
        );
    }

    #[test]
    fn no_identifiers() {
        let vars = VariableTable::new();
        assert_eq!(substitute("(1+2)*3", &vars), Ok("(1+2)*3".to_string()));
    }

    #[test]
    fn identifier_syntax() {
        assert!(is_identifier("_"));
        assert!(is_identifier("total_2B"));
        assert!(!is_identifier("Total"));
        assert!(!is_identifier("2x"));
        assert!(!is_identifier("a b"));
        assert!(!is_identifier(""));
    }
}
