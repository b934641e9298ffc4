// src/scalar/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::scalar_data::ScalarData;
use std::sync::{Arc, RwLock};

mod autograd_methods;
mod traits;

/// A differentiable scalar value: one node of the computation graph.
///
/// `Scalar` uses `Arc<RwLock<ScalarData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node used as predecessor by several
///     downstream nodes is referenced, not copied; clones are cheap and the
///     graph stays alive as long as any handle into it does (typically the
///     loss node transitively owns the whole graph).
/// 2.  **Interior Mutability:** the gradient accumulator (and, for
///     parameter updates, the value) can be modified through an immutable
///     handle.
///
/// Every engine operation produces a fresh node; `value`, `op` and the
/// backward record are fixed at construction, only `grad` mutates.
pub struct Scalar {
    /// Arc for shared ownership, RwLock for interior mutability of ScalarData.
    pub(crate) data: Arc<RwLock<ScalarData>>,
}

impl Scalar {
    /// Creates a leaf node (no predecessors) with the given value and a
    /// zero gradient.
    pub fn new(value: f64) -> Self {
        Scalar {
            data: Arc::new(RwLock::new(ScalarData::new_leaf(value))),
        }
    }

    /// Creates a node produced by an operation, carrying its backward record.
    pub(crate) fn from_op(value: f64, op: &'static str, grad_fn: Arc<dyn BackwardOp>) -> Self {
        Scalar {
            data: Arc::new(RwLock::new(ScalarData::new_from_op(value, op, grad_fn))),
        }
    }

    /// Returns the forward value of this node.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the forward value of this node.
    ///
    /// Intended for external updates between passes (e.g. an optimizer
    /// applying a gradient step to a parameter leaf); engine operations
    /// never rewrite a value.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Returns the accumulated gradient of this node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the gradient accumulator of this node.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Returns the tag of the operation that produced this node
    /// (empty for leaves). Diagnostics only.
    pub fn op(&self) -> &'static str {
        self.read_data().op
    }

    /// Identity of this node, stable across handle clones.
    pub(crate) fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    /// Acquires a read lock on the node's data.
    ///
    /// The lock is released when the guard goes out of scope.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn read_data(&self) -> std::sync::RwLockReadGuard<'_, ScalarData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node's data.
    ///
    /// The lock is released when the guard goes out of scope.
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, ScalarData> {
        self.data.write().expect("RwLock poisoned")
    }
}
