// picograd-core/src/ops/activation/relu.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::scalar::Scalar;
use std::sync::Arc;

// --- Forward Operation ---

/// Rectified Linear Unit: `relu(x) = x` for positive `x`, else `0`.
///
/// The gate compares values only; no graph edge is created by the
/// comparison itself. A NaN input propagates as NaN.
pub fn relu_op(a: &Scalar) -> Scalar {
    let x = a.value();
    let value = if x < 0.0 { 0.0 } else { x };
    let grad_fn = ReluBackward {
        input: a.clone(),
        output_value: value,
    };
    Scalar::from_op(value, "relu", Arc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward record for ReLU: the gradient passes through where the output
/// was positive and is blocked elsewhere.
#[derive(Debug)]
struct ReluBackward {
    input: Scalar,
    output_value: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        let contribution = if self.output_value > 0.0 {
            grad_output
        } else {
            0.0
        };
        Ok(vec![contribution])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input.clone()]
    }
}

// --- Scalar Method ---

impl Scalar {
    /// Applies the Rectified Linear Unit activation: `max(0, self)`.
    pub fn relu(&self) -> Scalar {
        relu_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests; // Link to the test file
