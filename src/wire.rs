//! Wire state and the wire side of propagation, range queries, and
//! symbolic expression derivation.

use tracing::trace;

use crate::error::Propagation;
use crate::expr::LinearExpr;
use crate::network::Graph;
use crate::op::OpId;
use crate::range::Range;

/// Identifies a wire within its owning network's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WireId(pub(crate) usize);

/// A value slot in the network: either an externally driven variable or
/// the output of an arithmetic operation.
pub(crate) struct WireState {
    pub(crate) value: f64,
    pub(crate) name: String,
    pub(crate) driver: Option<OpId>,
    pub(crate) listeners: Vec<OpId>,
}

impl Graph {
    pub(crate) fn alloc_wire(&mut self, value: f64) -> WireId {
        let id = WireId(self.wires.len());
        self.wires.push(WireState {
            value,
            name: String::new(),
            driver: None,
            listeners: Vec::new(),
        });
        id
    }

    pub(crate) fn wire(&self, id: WireId) -> &WireState {
        &self.wires[id.0]
    }

    pub(crate) fn wire_mut(&mut self, id: WireId) -> &mut WireState {
        &mut self.wires[id.0]
    }

    /// Stores a new value and propagates it to every listener in
    /// registration order. The first failing listener short-circuits the
    /// rest; the stored value is kept either way.
    pub(crate) fn set_value(&mut self, id: WireId, value: f64) -> Propagation {
        trace!(wire = %self.wire_name(id), value, "setting wire value");
        self.wire_mut(id).value = value;
        self.propagate_from(id)
    }

    /// Re-evaluates every listener against the wire's current value.
    pub(crate) fn propagate_from(&mut self, id: WireId) -> Propagation {
        let listeners = self.wire(id).listeners.clone();
        for op in listeners {
            self.propagate_op(op)?;
        }
        Ok(())
    }

    /// The range `varying` may take, as constrained by everything
    /// downstream of this wire. Each listener reports the range it permits
    /// and the results are intersected; no listeners means no constraint.
    pub(crate) fn wire_range(&self, id: WireId, varying: WireId) -> Range {
        self.wire(id)
            .listeners
            .iter()
            .fold(Range::FULL, |acc, &op| {
                Range::intersect(acc, self.op_range(op, varying))
            })
    }

    /// This wire's value as a symbolic function of `varying`. The queried
    /// wire itself is the identity; any other free wire is frozen at its
    /// current value; a driven wire delegates to its driver.
    pub(crate) fn wire_expr(&self, id: WireId, varying: WireId) -> LinearExpr {
        if id == varying {
            LinearExpr::linear(1.0, 0.0)
        } else if let Some(driver) = self.wire(id).driver {
            self.op_expr(driver, varying)
        } else {
            LinearExpr::linear(0.0, self.wire(id).value)
        }
    }

    pub(crate) fn connect(&mut self, wire: WireId, op: OpId) {
        self.wire_mut(wire).listeners.push(op);
    }

    pub(crate) fn set_driver(&mut self, wire: WireId, op: OpId) {
        let state = self.wire_mut(wire);
        assert!(
            state.driver.is_none(),
            "wire already has a driver operation"
        );
        state.driver = Some(op);
    }

    pub(crate) fn wire_name(&self, id: WireId) -> String {
        let state = self.wire(id);
        let mut name = String::new();
        if !state.name.is_empty() {
            name.push_str(&state.name);
            if state.driver.is_some() {
                name.push_str(": ");
            }
        }
        if let Some(driver) = state.driver {
            name.push_str(&self.op_name(driver));
        }
        name
    }

    pub(crate) fn wire_short_description(&self, id: WireId) -> String {
        format!("({})={}", self.wire_name(id), self.wire(id).value)
    }

    pub(crate) fn wire_dump(&self, id: WireId, level: usize) -> String {
        let mut out = format!(
            "{}{} with value {} and range {}\n",
            "  ".repeat(level),
            self.wire_name(id),
            self.wire(id).value,
            self.wire_range(id, id),
        );
        for &op in &self.wire(id).listeners {
            out.push_str(&self.op_dump(op, level + 1));
        }
        out
    }
}
