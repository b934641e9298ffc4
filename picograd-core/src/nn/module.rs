use crate::error::PicoGradError;
use crate::scalar::Scalar;

/// The base trait for all neural network modules (layers, containers, etc.).
///
/// This trait defines the fundamental operations that any neural network
/// module should support: performing a forward pass over scalar nodes and
/// exposing its trainable parameters.
pub trait Module: std::fmt::Debug + Send + Sync {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: The input scalar nodes, one per feature.
    ///
    /// # Returns
    /// A `Result` containing the output nodes of the module, or a
    /// `PicoGradError` if an error occurs during the forward pass (e.g. an
    /// input arity mismatch).
    fn forward(&self, inputs: &[Scalar]) -> Result<Vec<Scalar>, PicoGradError>;

    /// Returns handles to all trainable parameters of the module,
    /// including those of sub-modules.
    ///
    /// The engine treats every node uniformly; "trainable" is purely this
    /// enumeration. Handles are cheap clones sharing state with the graph,
    /// so an optimizer can read gradients and write values through them.
    fn parameters(&self) -> Vec<Scalar>;
}
