// picograd-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::error::PicoGradError;
use crate::scalar::Scalar;
use std::sync::Arc;

// --- Forward Operation ---

/// Exponential (base e) of a scalar node.
///
/// Overflow yields `f64::INFINITY` as an ordinary value, not an error; it
/// propagates through subsequent operations (which may then produce NaN).
pub fn exp_op(a: &Scalar) -> Scalar {
    let value = a.value().exp();
    let grad_fn = ExpBackward {
        input: a.clone(),
        output_value: value,
    };
    Scalar::from_op(value, "exp", Arc::new(grad_fn))
}

// --- Backward Operation ---

/// Backward record for exp: `z = e^a`, `dz/da = z`, reusing the stored
/// forward result.
#[derive(Debug)]
struct ExpBackward {
    input: Scalar,
    output_value: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Result<Vec<f64>, PicoGradError> {
        Ok(vec![self.output_value * grad_output])
    }

    fn inputs(&self) -> Vec<Scalar> {
        vec![self.input.clone()]
    }
}

// --- Scalar Method ---

impl Scalar {
    /// Computes the exponential: `e^self`.
    pub fn exp(&self) -> Scalar {
        exp_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests; // Link to the test file
