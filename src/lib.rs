//! Forward-propagating constraint network over real-valued scalar wires.
//!
//! A [`Network`] owns wires and the operations connecting them. Setting a
//! wire's value propagates through every arithmetic operation consuming it
//! and reports whether all downstream relations still hold. For any wire
//! the network can also compute the interval of values consistent with all
//! currently-linear constraints, by symbolically re-deriving each
//! downstream quantity as a function of that wire and solving the
//! resulting inequalities.

pub mod error;
pub mod expr;
pub mod format;
pub mod network;
pub mod prelude;
pub mod range;
pub mod solver;

mod op;
mod wire;

pub use error::{Propagation, Violation};
pub use expr::LinearExpr;
pub use network::{LessOrEqual, Network, Wire};
pub use range::Range;
pub use solver::solve_less_or_equal;
