use crate::autograd::BackwardOp;
use crate::scalar::Scalar;
use std::sync::Arc;

/// Internal state of a computation-graph node, owned behind
/// `Arc<RwLock<ScalarData>>` by the [`Scalar`] handle.
///
/// `value` is fixed by the forward pass (only external code, e.g. an
/// optimizer, rewrites it between passes). `grad` is the accumulator the
/// backward pass adds into; it starts at 0.0 and is reset externally.
#[derive(Debug)]
pub struct ScalarData {
    /// Forward value of this node.
    pub value: f64,
    /// Accumulated gradient of the backward root with respect to this node.
    pub grad: f64,
    /// Backward record of the operation that produced this node.
    /// `None` for leaves (inputs and constants).
    pub grad_fn: Option<Arc<dyn BackwardOp>>,
    /// Tag of the producing operation, for diagnostics only.
    pub op: &'static str,
}

impl ScalarData {
    /// State for a fresh leaf node.
    pub(crate) fn new_leaf(value: f64) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            grad_fn: None,
            op: "",
        }
    }

    /// State for a node produced by an operation.
    pub(crate) fn new_from_op(value: f64, op: &'static str, grad_fn: Arc<dyn BackwardOp>) -> Self {
        ScalarData {
            value,
            grad: 0.0,
            grad_fn: Some(grad_fn),
            op,
        }
    }
}

impl Drop for ScalarData {
    /// Dismantles the predecessor chain iteratively.
    ///
    /// Dropping the last handle to the output of a long sequential graph
    /// would otherwise recurse through every `grad_fn` in the chain and
    /// overflow the stack, the same hazard a recursive graph traversal has.
    /// Nodes still referenced elsewhere (strong count > 1) are left intact.
    fn drop(&mut self) {
        let mut pending: Vec<Scalar> = match self.grad_fn.take() {
            Some(grad_fn) => grad_fn.inputs(),
            None => return,
        };
        while let Some(node) = pending.pop() {
            if Arc::strong_count(&node.data) == 1 {
                let taken = node.write_data().grad_fn.take();
                if let Some(grad_fn) = taken {
                    pending.extend(grad_fn.inputs());
                }
            }
            // `node` drops here; with its `grad_fn` already detached there
            // is nothing left to recurse into.
        }
    }
}
