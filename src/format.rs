//! Formatting helpers for rendering ranges and linear expressions.

use crate::expr::LinearExpr;
use crate::range::Range;

pub fn pretty_range(range: &Range) -> String {
    if range.is_empty() {
        "Empty range".to_string()
    } else {
        format!("[{}, {}]", range.lower, range.upper)
    }
}

pub fn pretty_expr(expr: &LinearExpr) -> String {
    let mut out = format!("{}*x", expr.first_degree);
    if expr.constant >= 0.0 {
        out.push_str(&format!(" + {}", expr.constant));
    } else {
        out.push_str(&format!(" - {}", -expr.constant));
    }
    if expr.nonlinear {
        out.push_str(" + a_nonlinear_term");
    }
    out
}
