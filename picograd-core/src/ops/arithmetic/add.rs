// picograd-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::scalar::Scalar;
use std::sync::Arc;

// --- Forward Operation ---

/// Addition of two scalar nodes.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    let value = a.value() + b.value();
    let grad_fn = AddBackward {
        input_a: a.clone(),
        input_b: b.clone(),
    };
    Scalar::from_op(value, "+", Arc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward record for addition: `z = a + b`, `dz/da = dz/db = 1`.
#[derive(Debug)]
struct AddBackward {
    input_a: Scalar,
    input_b: Scalar,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        Ok(vec![grad_output, grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input_a.clone(), self.input_b.clone()]
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests; // Link to the test file
