// picograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::scalar::Scalar;
use std::sync::Arc;

// --- Forward Operation ---

/// Multiplication of two scalar nodes.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    let value = a.value() * b.value();
    let grad_fn = MulBackward {
        input_a: a.clone(),
        input_b: b.clone(),
    };
    Scalar::from_op(value, "*", Arc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward record for multiplication: `z = a * b`, `dz/da = b`, `dz/db = a`.
///
/// The rule reads the inputs' forward values at propagation time.
#[derive(Debug)]
struct MulBackward {
    input_a: Scalar,
    input_b: Scalar,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        Ok(vec![
            self.input_b.value() * grad_output,
            self.input_a.value() * grad_output,
        ])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input_a.clone(), self.input_b.clone()]
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests; // Link to the test file
