use wirenet::LinearExpr;

fn nonlinear(first_degree: f64, constant: f64) -> LinearExpr {
    LinearExpr {
        first_degree,
        constant,
        nonlinear: true,
    }
}

#[test]
fn zero_difference() {
    let a = LinearExpr::linear(3.14, 1.23);
    assert_eq!(a - a, LinearExpr::linear(0.0, 0.0));
}

#[test]
fn non_zero_difference() {
    // (x + 3) - (2x + 10) shall be -x - 7
    let a = LinearExpr::linear(1.0, 3.0);
    let b = LinearExpr::linear(2.0, 10.0);
    assert_eq!(a - b, LinearExpr::linear(-1.0, -7.0));
}

#[test]
fn sum() {
    // (2x + 27) + (x + 10) shall be 3x + 37
    let a = LinearExpr::linear(2.0, 27.0);
    let b = LinearExpr::linear(1.0, 10.0);
    assert_eq!(a + b, LinearExpr::linear(3.0, 37.0));
}

#[test]
fn add_infinity() {
    let inf = f64::INFINITY;
    let a = LinearExpr::linear(47.0, inf);
    let b = LinearExpr::linear(-inf, 11.0);
    assert_eq!(a + b, LinearExpr::linear(-inf, inf));
}

#[test]
fn linear_constructor_is_not_flagged() {
    assert!(!LinearExpr::linear(1.0, 2.0).nonlinear);
    assert!(nonlinear(1.0, 2.0).nonlinear);
}

#[test]
fn nonlinear_flag_propagates() {
    let a = nonlinear(1.0, 2.0);
    let b = LinearExpr::linear(3.0, 4.0);

    assert!((a + b).nonlinear);
    assert!((a - b).nonlinear);
    // Degree reduction does not clear a flag already set upstream.
    assert!((a - a).nonlinear);
}

#[test]
fn multiply_to_linear() {
    // (x + 2) * (-3) shall be -3x - 6
    let a = LinearExpr::linear(1.0, 2.0);
    let b = LinearExpr::linear(0.0, -3.0);
    assert_eq!(a * b, LinearExpr::linear(-3.0, -6.0));
}

#[test]
fn multiply_to_nonlinear() {
    // (x + 2) * (4x - 3) shall be 5x - 6 plus a nonlinear term
    let a = LinearExpr::linear(1.0, 2.0);
    let b = LinearExpr::linear(4.0, -3.0);
    assert_eq!(a * b, nonlinear(5.0, -6.0));
}

#[test]
fn commutative_multiplication() {
    let a = LinearExpr::linear(0.0, 2.0);
    let b = LinearExpr::linear(3.0, 0.0);
    let c = LinearExpr::linear(5.0, 4.0);
    let d = nonlinear(7.0, 6.0);

    assert_eq!(a * b, b * a);
    assert_eq!(a * c, c * a);
    assert_eq!(b * c, c * b);
    assert_eq!(a * d, d * a);
    assert_eq!(b * d, d * b);
    assert_eq!(c * d, d * c);
}

#[test]
fn negative_constant_to_string() {
    assert_eq!(LinearExpr::linear(5.0, -3.0).to_string(), "5*x - 3");
}

#[test]
fn zero_constant_to_string() {
    assert_eq!(LinearExpr::linear(5.0, 0.0).to_string(), "5*x + 0");
}

#[test]
fn positive_constant_to_string() {
    assert_eq!(LinearExpr::linear(5.0, 3.0).to_string(), "5*x + 3");
}

#[test]
fn fractional_to_string() {
    assert_eq!(LinearExpr::linear(5.2, -3.999).to_string(), "5.2*x - 3.999");
}

#[test]
fn nonlinear_to_string() {
    assert_eq!(
        nonlinear(-2.0, -3.0).to_string(),
        "-2*x - 3 + a_nonlinear_term"
    );
}

#[test]
fn infinite_to_string() {
    assert_eq!(
        LinearExpr::linear(f64::INFINITY, f64::NEG_INFINITY).to_string(),
        "inf*x - inf"
    );
}
