//! Parser edge cases and error tests.

use assigncalc::{BinaryOperator, Error, Expr, ParseErrorKind, TokenKind, parse};

fn parse_kind(input: &str) -> ParseErrorKind {
    match parse(input) {
        Err(Error::Parse(err)) => err.kind,
        other => panic!("expected parse error for {input:?}, got {other:?}"),
    }
}

// -----------------------------------------------------------
// Tree shape.
// -----------------------------------------------------------

#[test]
fn parse_literal() {
    assert_eq!(parse("0").unwrap(), Expr::Literal(0));
}

#[test]
fn parse_redundant_parens() {
    assert_eq!(parse("((7))").unwrap(), Expr::Literal(7));
}

#[test]
fn parse_mixed_precedence() {
    let expected = Expr::binary(
        Expr::binary(
            Expr::Literal(1),
            BinaryOperator::Add,
            Expr::binary(Expr::Literal(2), BinaryOperator::Multiply, Expr::Literal(3)),
        ),
        BinaryOperator::Subtract,
        Expr::Literal(4),
    );
    assert_eq!(parse("1 + 2 * 3 - 4").unwrap(), expected);
}

#[test]
fn parse_display_shows_grouping() {
    let tree = parse("1-(2-3)*4").unwrap();
    assert_eq!(tree.to_string(), "(1 - ((2 - 3) * 4))");
}

// -----------------------------------------------------------
// Syntax errors.
// -----------------------------------------------------------

#[test]
fn parse_error_unclosed_paren() {
    assert_eq!(
        parse_kind("(1+2"),
        ParseErrorKind::UnexpectedToken {
            expected: vec![TokenKind::RightParen],
            found: TokenKind::EndOfInput,
        }
    );
}

#[test]
fn parse_error_nested_unclosed() {
    assert!(matches!(
        parse_kind("((1+2)*3"),
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::EndOfInput,
            ..
        }
    ));
}

#[test]
fn parse_error_empty_parens() {
    assert_eq!(
        parse_kind("()"),
        ParseErrorKind::UnexpectedToken {
            expected: vec![TokenKind::Integer, TokenKind::LeftParen],
            found: TokenKind::RightParen,
        }
    );
}

#[test]
fn parse_error_unary_minus_in_factor() {
    // Sign runs are folded before parsing; a sign where a factor
    // belongs is a syntax error.
    assert!(matches!(
        parse_kind("3*-2"),
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::Minus,
            ..
        }
    ));
}

#[test]
fn parse_error_trailing_paren() {
    assert_eq!(
        parse_kind("(1))"),
        ParseErrorKind::UnexpectedToken {
            expected: vec![TokenKind::EndOfInput],
            found: TokenKind::RightParen,
        }
    );
}

#[test]
fn parse_error_implicit_multiplication() {
    assert!(matches!(
        parse_kind("2(3)"),
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::LeftParen,
            ..
        }
    ));
}

#[test]
fn parse_error_dangling_operator() {
    assert!(matches!(
        parse_kind("1+"),
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::EndOfInput,
            ..
        }
    ));
}

// -----------------------------------------------------------
// Error display.
// -----------------------------------------------------------

#[test]
fn display_parse_error() {
    let err = parse("2*)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected integer or '(', found ')' at column 3"
    );
}
