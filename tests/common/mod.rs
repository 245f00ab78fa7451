#![allow(dead_code)]

use assigncalc::{Error, VariableTable, evaluate_expression, run_str};

/// Evaluate an expression with no variables bound.
pub fn eval(expression: &str) -> Result<i64, Error> {
    evaluate_expression(expression, &VariableTable::new())
}

/// Helper: run a script and compare the final bindings.
pub fn assert_script(source: &str, expected: &[(&str, i64)]) {
    let vars = run_str(source).unwrap_or_else(|e| {
        panic!("script failed: {e}\n--- script ---\n{source}")
    });
    let got: Vec<(&str, i64)> = vars.iter().collect();
    assert_eq!(
        got, expected,
        "bindings mismatch\n--- script ---\n{source}"
    );
}
