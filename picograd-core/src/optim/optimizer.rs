use crate::error::PicoGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameter values based on their
/// accumulated gradients.
pub trait Optimizer {
    /// Performs a single optimization step, updating the parameters
    /// managed by the optimizer from their accumulated gradients.
    fn step(&mut self) -> Result<(), PicoGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Typically called before the backward pass of a new training
    /// iteration, to prevent gradients from accumulating across iterations
    /// (unless that is the desired behavior).
    fn zero_grad(&mut self);
}
