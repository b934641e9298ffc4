use crate::error::PicoGradError;
use crate::scalar::Scalar;
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar
/// operation.
///
/// Any operation that creates a non-leaf [`Scalar`] stores one of these
/// records in the output's `grad_fn` field. The record keeps handles to the
/// operation's inputs (the graph edges used for traversal) plus whatever
/// scalar parameters the derivative rule needs (e.g. a power exponent), and
/// is used during `backward()` to propagate gradients according to the
/// chain rule.
///
/// The `Debug + Send + Sync` bounds let the `Arc<dyn BackwardOp>` holding
/// the record be shared and inspected freely.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes the gradient contribution for each input of the operation,
    /// given the gradient of the backward root with respect to the
    /// operation's output (`grad_output`).
    ///
    /// For an operation `out = f(in_1, ..., in_n)` this returns
    /// `grad_output * d out / d in_i` for each `i`, evaluated at the
    /// already-known forward values. The order **must** strictly match the
    /// order of the handles returned by [`BackwardOp::inputs`]; the graph
    /// walker adds each contribution into the corresponding input's
    /// gradient accumulator.
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError>;

    /// Returns handles to the input nodes that participated in the forward
    /// operation. These are the predecessor edges of the computation graph.
    ///
    /// An input that is used several times by one operation (e.g. `x * x`)
    /// appears once per use; the walker accumulates each occurrence's
    /// contribution separately, which is exactly the chain rule for a
    /// repeated argument.
    fn inputs(&self) -> Vec<Scalar>;
}
