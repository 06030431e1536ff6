//! Solver for linear less-or-equal inequalities.

use tracing::error;

use crate::expr::LinearExpr;
use crate::range::Range;

/// Solves `left(x) <= right(x)` for x.
///
/// Returns the range of values of x that satisfy the inequality.
///
/// # Panics
///
/// Panics when the difference of the two expressions is nonlinear. The
/// solver guarantees correct intervals only for first-degree polynomials
/// and refuses to approximate anything beyond that.
pub fn solve_less_or_equal(left: LinearExpr, right: LinearExpr) -> Range {
    // Change "left <= right" to general form: 0 <= difference = right - left.
    let difference = right - left;

    if difference.nonlinear {
        error!(%left, %right, "cannot solve an inequality with a nonlinear expression");
        panic!("cannot solve inequality with nonlinear expression: {left} <= {right}");
    }

    // The difference is an expression of form k*x + m.
    let k = difference.first_degree;
    let m = difference.constant;

    // When solving 0 <= k*x + m there are three cases:
    if k < 0.0 {
        // Case I: k < 0: x <= -m/k
        Range::new(f64::NEG_INFINITY, -m / k)
    } else if k > 0.0 {
        // Case II: k > 0: x >= -m/k
        Range::new(-m / k, f64::INFINITY)
    } else if m >= 0.0 {
        // Case III: k == 0: 0 <= m, so x can be any real number...
        Range::FULL
    } else {
        // ...or no value of x helps.
        Range::EMPTY
    }
}
