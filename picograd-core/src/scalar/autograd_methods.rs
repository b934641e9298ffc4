// src/scalar/autograd_methods.rs

use crate::autograd::{graph, BackwardOp};
use crate::error::PicoGradError;
use crate::scalar::Scalar;
use std::sync::Arc;

impl Scalar {
    /// Computes the gradients of this node w.r.t. every node it was
    /// computed from.
    ///
    /// After this returns, each node reachable from `self` through
    /// predecessor edges holds `d(self)/d(node)` in its gradient
    /// accumulator, assuming all reachable gradients were zero beforehand.
    /// The engine never resets gradients itself: call [`Scalar::zero_grad`]
    /// on the relevant nodes between independent passes, or let repeated
    /// passes accumulate deliberately.
    pub fn backward(&self) -> Result<(), PicoGradError> {
        graph::backward_pass(self)
    }

    /// Resets the gradient accumulator of this node to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Returns the backward record of the operation that produced this
    /// node, or `None` for a leaf.
    pub fn grad_fn(&self) -> Option<Arc<dyn BackwardOp>> {
        self.read_data().grad_fn.clone()
    }

    /// Whether this node is a leaf (an input or constant, not the result
    /// of an operation).
    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Handles to the direct predecessors of this node; empty for leaves.
    pub fn predecessors(&self) -> Vec<Scalar> {
        match self.grad_fn() {
            Some(grad_fn) => grad_fn.inputs(),
            None => Vec::new(),
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests; // Link to the test file
