//! The owning network: arena, factories, and soundness verification.

use std::cell::RefCell;
use std::ops::{Add, Mul};
use std::ptr;

use tracing::debug;

use crate::error::Propagation;
use crate::expr::LinearExpr;
use crate::op::{Op, OpId};
use crate::range::Range;
use crate::wire::{WireId, WireState};

/// The arena holding every wire and operation of one network.
///
/// Wires and operations cross-reference each other by id only; the graph
/// is acyclic in the driver direction, and relations never drive a wire.
pub(crate) struct Graph {
    pub(crate) wires: Vec<WireState>,
    pub(crate) ops: Vec<Op>,
    pub(crate) verify_soundness: bool,
}

/// A forward-propagating constraint network.
///
/// The network consists of wires and operations. A wire can be a variable
/// that is connected as an input to an operation. Wires can also be output
/// from an operation, e.g. an addition or multiplication. Some operations
/// model relations and have no output, e.g. comparison.
///
/// ```text
///      Height  Width   <- wires
///          |     |
///           \   /
///           [ * ]       <- operation
///             |
///            Area  1234 <- wires
///             \    /
///             [ <= ]    <- relation operation
/// ```
///
/// ```
/// use wirenet::Network;
///
/// let network = Network::new();
/// let height = network.make(0.0);
/// let width = network.make(0.0);
/// let area = height * width;
/// area.le(network.constant(1234.0));
///
/// assert!(height.set(10.0).is_ok());
/// assert!(width.set(5.0).is_ok());
/// let max_height = height.range().upper;
/// assert_eq!(max_height, 1234.0 / 5.0);
/// ```
///
/// The network owns every wire and operation created through it; the
/// [`Wire`] and [`LessOrEqual`] handles it returns borrow the network and
/// cannot outlive it. Combining handles from two different networks is a
/// usage error and panics.
pub struct Network {
    graph: RefCell<Graph>,
}

impl Network {
    /// Creates a network that verifies soundness: adding a constraint that
    /// does not hold for the current wire values panics.
    pub fn new() -> Self {
        Self::with_soundness_verification(true)
    }

    /// Creates a network, specifying whether to verify soundness while
    /// constraints are added. Disabling it allows the network to be built
    /// without regard for what the wire values currently are; it does not
    /// affect the results returned when setting wire values afterwards.
    pub fn with_soundness_verification(verify_soundness: bool) -> Self {
        Network {
            graph: RefCell::new(Graph {
                wires: Vec::new(),
                ops: Vec::new(),
                verify_soundness,
            }),
        }
    }

    /// Creates a free wire, auto-named `Wire<N>` by allocation order.
    pub fn make(&self, value: f64) -> Wire<'_> {
        let id = {
            let mut graph = self.graph.borrow_mut();
            let id = graph.alloc_wire(value);
            graph.wire_mut(id).name = format!("Wire{}", id.0 + 1);
            id
        };
        Wire { network: self, id }
    }

    /// Creates a free wire with a name for easier debugging.
    pub fn make_named(&self, name: impl Into<String>, value: f64) -> Wire<'_> {
        let id = {
            let mut graph = self.graph.borrow_mut();
            let id = graph.alloc_wire(value);
            graph.wire_mut(id).name = name.into();
            id
        };
        Wire { network: self, id }
    }

    /// Materializes a literal as a free wire named after its value.
    ///
    /// Every literal that takes part in an expression becomes a regular
    /// wire in the network through this factory.
    pub fn constant(&self, value: f64) -> Wire<'_> {
        self.make_named(value.to_string(), value)
    }

    /// Creates an addition operation between two wires and returns the
    /// output wire for the sum. Prefer the `+` operator on [`Wire`].
    pub fn add<'n>(&'n self, lhs: Wire<'n>, rhs: Wire<'n>) -> Wire<'n> {
        self.check_owned(lhs);
        self.check_owned(rhs);
        let id = {
            let mut graph = self.graph.borrow_mut();
            let out = graph.alloc_wire(0.0);
            graph.push_op(Op::Sum {
                lhs: lhs.id,
                rhs: rhs.id,
                out,
            });
            out
        };
        Wire { network: self, id }
    }

    /// Creates a multiplication operation between two wires and returns
    /// the output wire for the product. Prefer the `*` operator on
    /// [`Wire`].
    pub fn multiply<'n>(&'n self, lhs: Wire<'n>, rhs: Wire<'n>) -> Wire<'n> {
        self.check_owned(lhs);
        self.check_owned(rhs);
        let id = {
            let mut graph = self.graph.borrow_mut();
            let out = graph.alloc_wire(0.0);
            graph.push_op(Op::Product {
                lhs: lhs.id,
                rhs: rhs.id,
                out,
            });
            out
        };
        Wire { network: self, id }
    }

    /// Creates a less-than-or-equal-to relation between two wires and
    /// returns the relation itself, since it has no output wire. Prefer
    /// [`Wire::le`] and [`Wire::ge`].
    pub fn less_or_equal<'n>(&'n self, left: Wire<'n>, right: Wire<'n>) -> LessOrEqual<'n> {
        self.check_owned(left);
        self.check_owned(right);
        let id = self.graph.borrow_mut().push_op(Op::LessOrEqual {
            left: left.id,
            right: right.id,
        });
        LessOrEqual { network: self, id }
    }

    pub fn is_verifying_soundness(&self) -> bool {
        self.graph.borrow().verify_soundness
    }

    /// Activates verification that new constraints are sound when they are
    /// added. Runs a propagation pass over every wire in allocation order
    /// and returns whether all constraints currently hold. Already-built
    /// violations are reported through the return value, never
    /// retroactively escalated. Idempotent.
    pub fn activate_soundness_verification(&self) -> bool {
        let mut graph = self.graph.borrow_mut();
        graph.verify_soundness = true;
        let wire_count = graph.wires.len();
        let sound = (0..wire_count).all(|i| graph.propagate_from(WireId(i)).is_ok());
        debug!(sound, "activated soundness verification");
        sound
    }

    fn check_owned(&self, wire: Wire<'_>) {
        assert!(
            ptr::eq(self, wire.network),
            "wire belongs to a different network"
        );
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::new()
    }
}

/// Handle to a wire owned by a [`Network`].
///
/// Copyable and only valid for the owning network's lifetime. All value
/// access and all combinators go through this handle.
#[derive(Clone, Copy)]
pub struct Wire<'n> {
    pub(crate) network: &'n Network,
    pub(crate) id: WireId,
}

impl<'n> Wire<'n> {
    /// The wire's current value.
    pub fn get(self) -> f64 {
        self.network.graph.borrow().wire(self.id).value
    }

    /// Assigns a value to the wire and propagates it through every
    /// downstream operation. On failure the value is kept anyway; partial
    /// propagation is an observable outcome, not rolled back.
    pub fn set(self, value: f64) -> Propagation {
        self.network.graph.borrow_mut().set_value(self.id, value)
    }

    /// The allowed range of values for this wire, as constrained by every
    /// downstream relation that is linear in it.
    pub fn range(self) -> Range {
        self.network.graph.borrow().wire_range(self.id, self.id)
    }

    /// This wire's value as a symbolic function of `varying`.
    pub fn expression(self, varying: Wire<'n>) -> LinearExpr {
        self.network.check_owned(varying);
        self.network
            .graph
            .borrow()
            .wire_expr(self.id, varying.id)
    }

    pub fn name(self) -> String {
        self.network.graph.borrow().wire_name(self.id)
    }

    /// The name and current value of the wire, as `(name)=value`.
    pub fn short_description(self) -> String {
        self.network.graph.borrow().wire_short_description(self.id)
    }

    /// A tree of downstream wires and operations with their respective
    /// values and ranges. For diagnostics only.
    pub fn dump(self) -> String {
        self.network.graph.borrow().wire_dump(self.id, 0)
    }

    /// Constrains this wire to be less than or equal to `other`.
    pub fn le(self, other: Wire<'n>) -> LessOrEqual<'n> {
        self.network.less_or_equal(self, other)
    }

    /// Constrains this wire to be greater than or equal to `other`.
    pub fn ge(self, other: Wire<'n>) -> LessOrEqual<'n> {
        self.network.less_or_equal(other, self)
    }
}

impl<'n> Add for Wire<'n> {
    type Output = Wire<'n>;

    fn add(self, rhs: Wire<'n>) -> Wire<'n> {
        self.network.add(self, rhs)
    }
}

impl<'n> Mul for Wire<'n> {
    type Output = Wire<'n>;

    fn mul(self, rhs: Wire<'n>) -> Wire<'n> {
        self.network.multiply(self, rhs)
    }
}

/// Handle to a less-or-equal relation owned by a [`Network`].
///
/// Relations have no output wire, so the factory hands out the operation
/// itself for naming and diagnostics.
#[derive(Clone, Copy)]
pub struct LessOrEqual<'n> {
    network: &'n Network,
    id: OpId,
}

impl LessOrEqual<'_> {
    pub fn name(self) -> String {
        self.network.graph.borrow().op_name(self.id)
    }

    pub fn short_description(self) -> String {
        self.network.graph.borrow().op_short_description(self.id)
    }

    pub fn dump(self) -> String {
        self.network.graph.borrow().op_dump(self.id, 0)
    }
}
