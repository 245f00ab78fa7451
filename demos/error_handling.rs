//! Demonstrate error handling for invalid scripts.

use assigncalc::{Error, ScriptErrorKind};

fn main() {
    // Malformed integer literal
    match assigncalc::run_str("a = 1;\nb = a + 007;\n") {
        Ok(_) => println!("Ran OK (unexpected)"),
        Err(e) => {
            println!("Script error: {e}");
            println!("  Line: {}", e.line);
            if let ScriptErrorKind::Expression(Error::Lex(lex)) = &e.kind {
                println!("  Kind: {:?}", lex.kind);
                println!("  Column: {}", lex.span.column);
            }
        }
    }

    println!();

    // Variable used before assignment
    match assigncalc::run_str("total = price * 2;\nprice = 5;\n") {
        Ok(_) => println!("Ran OK (unexpected)"),
        Err(e) => {
            println!("Script error: {e}");
            if let ScriptErrorKind::Expression(Error::Eval(eval)) = &e.kind {
                println!("  Kind: {eval:?}");
            }
        }
    }

    println!();

    // Unclosed parenthesis
    match assigncalc::evaluate_expression("(1 + 2", &assigncalc::VariableTable::new()) {
        Ok(v) => println!("Evaluated to {v} (unexpected)"),
        Err(Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
        }
        Err(e) => println!("Other error: {e}"),
    }
}
