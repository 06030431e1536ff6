//! Error types for value propagation.

use thiserror::Error;

/// Outcome of writing a value into the network.
pub type Propagation = std::result::Result<(), Violation>;

/// A downstream relation was violated while propagating a wire value.
///
/// Carries the causal chain of operations between the written wire and the
/// first failing relation. The relation itself is pushed first; every
/// arithmetic operation between it and the written wire pushes its own
/// fragment as the cascade unwinds. The rendered message reads the chain
/// outermost-first and ends with a period.
#[derive(Clone, Debug, Error)]
#[error("{}.", render_causes(.causes))]
pub struct Violation {
    causes: Vec<String>,
}

impl Violation {
    pub(crate) fn new(cause: String) -> Self {
        Violation {
            causes: vec![cause],
        }
    }

    /// Wraps this violation in an outer operation's failure fragment.
    pub(crate) fn caused_by(mut self, cause: String) -> Self {
        self.causes.push(cause);
        self
    }
}

fn render_causes(causes: &[String]) -> String {
    causes.iter().rev().map(String::as_str).collect()
}
