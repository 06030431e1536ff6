//! Prelude for convenient imports of the primary API types.

pub use crate::error::{Propagation, Violation};
pub use crate::expr::LinearExpr;
pub use crate::network::{LessOrEqual, Network, Wire};
pub use crate::range::Range;
pub use crate::solver::solve_less_or_equal;
