//! Final listing of variable values.

use crate::variables::VariableTable;

/// Render every binding as `name  = value`, one per line, in
/// ascending name order.
#[must_use]
pub fn format(variables: &VariableTable) -> String {
    let mut out = String::new();
    for (name, value) in variables {
        out.push_str(name);
        out.push_str("  = ");
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out
}
