//! The operation variants of a constraint network.
//!
//! There are two kinds of operations. Arithmetic operations (sum, product)
//! consume two input wires and drive one output wire. Relation operations
//! model the actual constraints and have no output; they are always leaves
//! of the listener graph.

use crate::error::{Propagation, Violation};
use crate::expr::LinearExpr;
use crate::network::Graph;
use crate::range::Range;
use crate::solver::solve_less_or_equal;
use crate::wire::WireId;

/// Identifies an operation within its owning network's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OpId(pub(crate) usize);

pub(crate) enum Op {
    Sum {
        lhs: WireId,
        rhs: WireId,
        out: WireId,
    },
    Product {
        lhs: WireId,
        rhs: WireId,
        out: WireId,
    },
    LessOrEqual {
        left: WireId,
        right: WireId,
    },
}

impl Graph {
    /// Inserts an operation, registers it as listener on its inputs and as
    /// driver of its output, and runs one propagation pass. Under active
    /// soundness verification a failing initial pass means the network was
    /// built with a constraint its current values already violate, which
    /// is a construction error.
    pub(crate) fn push_op(&mut self, op: Op) -> OpId {
        let id = OpId(self.ops.len());
        self.ops.push(op);
        match *self.op(id) {
            Op::Sum { lhs, rhs, out } | Op::Product { lhs, rhs, out } => {
                self.connect(lhs, id);
                self.connect(rhs, id);
                self.set_driver(out, id);
            }
            Op::LessOrEqual { left, right } => {
                self.connect(left, id);
                self.connect(right, id);
            }
        }
        let initial = self.propagate_op(id);
        if self.verify_soundness {
            if let Err(violation) = initial {
                panic!("unsound constraint {}: {violation}", self.op_name(id));
            }
        }
        id
    }

    pub(crate) fn op(&self, id: OpId) -> &Op {
        &self.ops[id.0]
    }

    /// Re-evaluates the operation. Arithmetic recomputes its output and
    /// sets it on the output wire, cascading further propagation; a
    /// relation re-checks that it still holds.
    pub(crate) fn propagate_op(&mut self, id: OpId) -> Propagation {
        match *self.op(id) {
            Op::Sum { lhs, rhs, out } => {
                let value = self.wire(lhs).value + self.wire(rhs).value;
                self.set_value(out, value)
                    .map_err(|violation| violation.caused_by(self.op_error_fragment(id)))
            }
            Op::Product { lhs, rhs, out } => {
                let value = self.wire(lhs).value * self.wire(rhs).value;
                self.set_value(out, value)
                    .map_err(|violation| violation.caused_by(self.op_error_fragment(id)))
            }
            Op::LessOrEqual { left, right } => {
                if self.wire(left).value <= self.wire(right).value {
                    Ok(())
                } else {
                    Err(Violation::new(self.op_error_fragment(id)))
                }
            }
        }
    }

    /// The range `varying` may take as seen from this operation.
    /// Arithmetic operations impose no bound of their own; they recurse
    /// into their output wire, whose downstream relations do the
    /// constraining. A relation solves its inequality symbolically.
    pub(crate) fn op_range(&self, id: OpId, varying: WireId) -> Range {
        match *self.op(id) {
            Op::Sum { out, .. } | Op::Product { out, .. } => self.wire_range(out, varying),
            Op::LessOrEqual { left, right } => solve_less_or_equal(
                self.wire_expr(left, varying),
                self.wire_expr(right, varying),
            ),
        }
    }

    /// The operation's output as a symbolic function of `varying`.
    pub(crate) fn op_expr(&self, id: OpId, varying: WireId) -> LinearExpr {
        match *self.op(id) {
            Op::Sum { lhs, rhs, .. } => {
                self.wire_expr(lhs, varying) + self.wire_expr(rhs, varying)
            }
            Op::Product { lhs, rhs, .. } => {
                self.wire_expr(lhs, varying) * self.wire_expr(rhs, varying)
            }
            Op::LessOrEqual { .. } => {
                panic!("a relation has no output value to express symbolically")
            }
        }
    }

    /// Structural, value-independent rendering of the operation. Product
    /// operands are parenthesized to keep nested expressions unambiguous.
    pub(crate) fn op_name(&self, id: OpId) -> String {
        match *self.op(id) {
            Op::Sum { lhs, rhs, .. } => {
                format!("{} + {}", self.wire_name(lhs), self.wire_name(rhs))
            }
            Op::Product { lhs, rhs, .. } => {
                format!("({}) * ({})", self.wire_name(lhs), self.wire_name(rhs))
            }
            Op::LessOrEqual { left, right } => {
                format!("{} <= {}", self.wire_name(left), self.wire_name(right))
            }
        }
    }

    pub(crate) fn op_short_description(&self, id: OpId) -> String {
        match *self.op(id) {
            Op::Sum { lhs, rhs, .. } => format!(
                "{} + {}",
                self.wire_short_description(lhs),
                self.wire_short_description(rhs)
            ),
            Op::Product { lhs, rhs, .. } => format!(
                "{} * {}",
                self.wire_short_description(lhs),
                self.wire_short_description(rhs)
            ),
            Op::LessOrEqual { left, right } => format!(
                "{} <= {}",
                self.wire_short_description(left),
                self.wire_short_description(right)
            ),
        }
    }

    fn op_error_fragment(&self, id: OpId) -> String {
        match *self.op(id) {
            Op::Sum { .. } | Op::Product { .. } => {
                format!("{} would fail because ", self.op_name(id))
            }
            Op::LessOrEqual { .. } => format!("{} would fail", self.op_name(id)),
        }
    }

    pub(crate) fn op_dump(&self, id: OpId, level: usize) -> String {
        let mut rendered = format!("{}{}\n", "  ".repeat(level), self.op_short_description(id));
        if let Op::Sum { out, .. } | Op::Product { out, .. } = *self.op(id) {
            rendered.push_str(&self.wire_dump(out, level + 1));
        }
        rendered
    }
}
