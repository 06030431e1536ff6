//! Property-based tests for the interval and expression algebra.
//!
//! These tests verify the universals the engine leans on: intersection is
//! commutative, emptiness depends only on bound order, and the nonlinear
//! flag survives every combination it should.

use proptest::prelude::*;

use wirenet::{LinearExpr, Network, Range};

fn bound() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

proptest! {
    #[test]
    fn intersect_is_commutative(
        a_lower in bound(), a_upper in bound(),
        b_lower in bound(), b_upper in bound(),
    ) {
        let a = Range::new(a_lower, a_upper);
        let b = Range::new(b_lower, b_upper);
        prop_assert_eq!(Range::intersect(a, b), Range::intersect(b, a));
    }

    #[test]
    fn emptiness_is_bound_order(lower in bound(), upper in bound()) {
        let r = Range::new(lower, upper);
        prop_assert_eq!(r.is_empty(), lower > upper);
    }

    #[test]
    fn all_empty_ranges_are_equal(
        a_lower in bound(), a_drop in 1.0e-3f64..1.0e6,
        b_lower in bound(), b_drop in 1.0e-3f64..1.0e6,
    ) {
        let a = Range::new(a_lower, a_lower - a_drop);
        let b = Range::new(b_lower, b_lower - b_drop);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a, Range::EMPTY);
    }

    #[test]
    fn expression_minus_itself_is_zero(k in bound(), c in bound()) {
        let e = LinearExpr::linear(k, c);
        let difference = e - e;
        prop_assert_eq!(difference.first_degree, 0.0);
        prop_assert_eq!(difference.constant, 0.0);
        prop_assert!(!difference.nonlinear);
    }

    #[test]
    fn degree_reduction_keeps_the_nonlinear_flag(k in bound(), c in bound()) {
        let e = LinearExpr {
            first_degree: k,
            constant: c,
            nonlinear: true,
        };
        prop_assert!((e - e).nonlinear);
    }

    #[test]
    fn multiplication_coefficients_are_commutative(
        k1 in bound(), c1 in bound(),
        k2 in bound(), c2 in bound(),
        flagged in any::<bool>(),
    ) {
        let a = LinearExpr { first_degree: k1, constant: c1, nonlinear: flagged };
        let b = LinearExpr::linear(k2, c2);
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn range_query_round_trips_bounds(
        lower in -1.0e6f64..0.0,
        upper in 0.0f64..1.0e6,
    ) {
        let network = Network::new();
        let x = network.make(0.0);
        x.ge(network.constant(lower));
        x.le(network.constant(upper));
        prop_assert_eq!(x.range(), Range::new(lower, upper));
    }
}
