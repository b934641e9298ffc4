// picograd-core/src/ops/activation/tanh.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::scalar::Scalar;
use std::sync::Arc;

// --- Forward Operation ---

/// Hyperbolic tangent activation.
pub fn tanh_op(a: &Scalar) -> Scalar {
    let value = a.value().tanh();
    let grad_fn = TanhBackward {
        input: a.clone(),
        output_value: value,
    };
    Scalar::from_op(value, "tanh", Arc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward record for tanh: `z = tanh(a)`, `dz/da = 1 - z^2`,
/// evaluated from the stored forward result.
#[derive(Debug)]
struct TanhBackward {
    input: Scalar,
    output_value: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        let t = self.output_value;
        Ok(vec![(1.0 - t * t) * grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input.clone()]
    }
}

// --- Scalar Method ---

impl Scalar {
    /// Applies the hyperbolic tangent activation.
    pub fn tanh(&self) -> Scalar {
        tanh_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests; // Link to the test file
