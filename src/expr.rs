//! Symbolic linear expressions of a single distinguished variable.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

use crate::format;

/// Models an expression `first_degree * x + constant [+ a nonlinear term]`
/// of some variable x.
///
/// The `nonlinear` flag is monotonic: once a combination produces a term of
/// degree two or higher, every expression derived from it stays flagged,
/// even when later arithmetic cancels the coefficients back to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearExpr {
    pub first_degree: f64,
    pub constant: f64,
    pub nonlinear: bool,
}

impl LinearExpr {
    /// Creates the linear expression `first_degree * x + constant`.
    pub fn linear(first_degree: f64, constant: f64) -> Self {
        LinearExpr {
            first_degree,
            constant,
            nonlinear: false,
        }
    }
}

impl Add for LinearExpr {
    type Output = LinearExpr;

    fn add(self, other: LinearExpr) -> LinearExpr {
        LinearExpr {
            first_degree: self.first_degree + other.first_degree,
            constant: self.constant + other.constant,
            nonlinear: self.nonlinear || other.nonlinear,
        }
    }
}

impl Sub for LinearExpr {
    type Output = LinearExpr;

    fn sub(self, other: LinearExpr) -> LinearExpr {
        LinearExpr {
            first_degree: self.first_degree - other.first_degree,
            constant: self.constant - other.constant,
            nonlinear: self.nonlinear || other.nonlinear,
        }
    }
}

impl Mul for LinearExpr {
    type Output = LinearExpr;

    /// `(k1*x + c1) * (k2*x + c2)`. The sole place degree escalation is
    /// detected: a nonzero `k1*k2` term makes the product nonlinear.
    fn mul(self, other: LinearExpr) -> LinearExpr {
        let second_degree = self.first_degree * other.first_degree;
        LinearExpr {
            first_degree: self.first_degree * other.constant + self.constant * other.first_degree,
            constant: self.constant * other.constant,
            nonlinear: self.nonlinear || other.nonlinear || !second_degree.is_zero(),
        }
    }
}

impl fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::pretty_expr(self))
    }
}
